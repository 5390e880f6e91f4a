use crate::config::Config;
use crate::config::migrate::{missing_fields, run_config_migration};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        header("Current configuration");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report fields missing from the config file.
    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!("No configuration file at {}", path.display()));
            return Ok(());
        }

        let content = fs::read_to_string(path)?;
        let missing = missing_fields(&content)?;
        if missing.is_empty() {
            success("Configuration is complete.");
        } else {
            warning(format!("Missing fields: {}", missing.join(", ")));
            info("Run `rtimesheet config --migrate` to add them with default values.");
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        run_config_migration(path)?;
        Ok(())
    }

    /// Open the config file in `editor`, `$EDITOR`/`$VISUAL`, or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        if run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        ));

        if run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        } else {
            error(format!(
                "Failed to edit configuration file using fallback '{}'",
                default_editor
            ));
            Err(AppError::Config(format!("no usable editor for {}", path.display())))
        }
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
