//! Config file upgrades: detect fields added in newer versions and fill them
//! in with their defaults, leaving every value the user set untouched.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Top-level keys missing from the YAML document, in declaration order.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let current: Value = serde_yaml::from_str(content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    let (Some(current), Some(defaults)) = (current.as_mapping(), defaults.as_mapping()) else {
        return Ok(Vec::new());
    };

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add missing keys to `content` and return the upgraded YAML.
pub fn fill_missing(content: &str) -> AppResult<String> {
    let mut current: Value = serde_yaml::from_str(content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    if !current.is_mapping() {
        current = Value::Mapping(Mapping::new());
    }

    if let (Some(map), Some(defaults)) = (current.as_mapping_mut(), defaults.as_mapping()) {
        for (k, v) in defaults {
            if !map.contains_key(k) {
                map.insert(k.clone(), v.clone());
            }
        }
    }

    Ok(serde_yaml::to_string(&current)?)
}

/// Run the upgrade on the config file at `path`.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn run_config_migration(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        info("No configuration file found, nothing to migrate.");
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    let missing = missing_fields(&content)?;

    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    fs::write(path, fill_missing(&content)?)?;
    success(format!("Configuration updated, added: {}", missing.join(", ")));
    Ok(true)
}
