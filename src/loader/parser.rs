//! YAML parser for generator configuration
//!
//! Parses and validates configuration files. Two shapes are accepted:
//! the tagged form (`mode: range` / `mode: count` plus that mode's fields)
//! and the flat options form, where a `count` key selects count mode.
//! JSON files parse as well, being valid YAML.

use crate::error::{Error, Result};
use crate::loader::types::GenerationOptions;
use crate::pagination::GenerationConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Keys accepted next to `mode: range`, aliases included
const RANGE_FIELDS: &[&str] = &[
    "window_size",
    "range",
    "truncate",
    "distance_from",
    "distanceFrom",
];

/// Keys accepted next to `mode: count`
const COUNT_FIELDS: &[&str] = &["count", "bias"];

/// Load a generator configuration from a file path
pub fn load_config(path: impl AsRef<Path>) -> Result<GenerationConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    debug!("Loading generator config from {}", path.display());
    load_config_from_str(&content)
}

/// Load a generator configuration from a YAML (or JSON) string
pub fn load_config_from_str(yaml: &str) -> Result<GenerationConfig> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;

    let config = if value.is_null() {
        GenerationConfig::default()
    } else if value.get("mode").is_some() {
        check_mode_fields(&value)?;
        serde_yaml::from_value::<GenerationConfig>(value)
            .map_err(|e| Error::config(format!("Invalid config: {e}")))?
    } else {
        serde_yaml::from_value::<GenerationOptions>(value)
            .map_err(|e| Error::config(format!("Invalid config options: {e}")))?
            .into_config()?
    };

    config.validate()?;
    Ok(config)
}

/// Reject keys that do not belong to the selected mode
///
/// Serde drops unknown keys inside the tagged enum, so a stray `count` under
/// `mode: range` would otherwise vanish silently.
fn check_mode_fields(value: &serde_yaml::Value) -> Result<()> {
    let Some(mapping) = value.as_mapping() else {
        return Ok(());
    };
    let (mode, allowed) = match value.get("mode").and_then(serde_yaml::Value::as_str) {
        Some("range") => ("range", RANGE_FIELDS),
        Some("count") => ("count", COUNT_FIELDS),
        // Unknown modes are reported by serde
        _ => return Ok(()),
    };

    for key in mapping.keys() {
        match key.as_str() {
            Some("mode") => {}
            Some(name) if allowed.contains(&name) => {}
            Some(name) => {
                return Err(Error::config(format!(
                    "Unknown field '{name}' for mode '{mode}' (expected one of: {})",
                    allowed.join(", ")
                )))
            }
            None => {
                return Err(Error::config(format!(
                    "Non-string key {key:?} in config for mode '{mode}'"
                )))
            }
        }
    }
    Ok(())
}
