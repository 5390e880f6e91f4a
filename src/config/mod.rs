use crate::errors::{AppError, AppResult};
use crate::models::weekly_grid::{DEFAULT_RATE, Week};
use crate::ui::messages::success;
use crate::utils::date::parse_weekday;
use crate::utils::path::{companion_log, expand_tilde};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub workbook: String,
    #[serde(default = "default_rate")]
    pub default_rate: f64,
    #[serde(default = "default_week_ending_day")]
    pub week_ending_day: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_rate() -> f64 {
    DEFAULT_RATE
}
fn default_week_ending_day() -> String {
    "Thursday".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_workbook(Self::workbook_file())
    }
}

impl Config {
    fn with_workbook(path: PathBuf) -> Self {
        Self {
            workbook: path.to_string_lossy().to_string(),
            default_rate: default_rate(),
            week_ending_day: default_week_ending_day(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the default path of the workbook
    pub fn workbook_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn workbook_path(&self) -> PathBuf {
        expand_tilde(&self.workbook)
    }

    pub fn log_path(&self) -> PathBuf {
        companion_log(&self.workbook_path())
    }

    /// The configured week, validated.
    pub fn week(&self) -> AppResult<Week> {
        parse_weekday(&self.week_ending_day)
            .map(Week::ending_on)
            .ok_or_else(|| {
                AppError::Config(format!(
                    "week_ending_day '{}' is not a weekday",
                    self.week_ending_day
                ))
            })
    }

    /// Initialize configuration and workbook files
    pub fn init_all(custom_workbook: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // workbook: user provided (same resolution as --workbook) or default
        let workbook = match custom_workbook {
            Some(name) => expand_tilde(&name),
            None => Self::workbook_file(),
        };

        let config = Self::with_workbook(workbook.clone());

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        // Create empty workbook if not exists
        if !workbook.exists() {
            if let Some(parent) = workbook.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&workbook, "[]")?;
        }

        success(format!("Workbook:    {}", workbook.display()));

        Ok(config)
    }
}
