//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use std::path::{Path, PathBuf};

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [navigation] section
    if let Some(section) = ini.section(Some("navigation")) {
        if let Some(v) = section.get("arrival_threshold_m") {
            config.navigation.arrival_threshold_m =
                parse_positive("navigation", "arrival_threshold_m", v)?;
        }
        if let Some(v) = section.get("average_speed_kmh") {
            config.navigation.average_speed_kmh =
                parse_positive("navigation", "average_speed_kmh", v)?;
        }
        if let Some(v) = section.get("update_interval_ms") {
            config.navigation.update_interval_ms =
                v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "navigation".to_string(),
                    key: "update_interval_ms".to_string(),
                    value: v.to_string(),
                    reason: "must be a non-negative integer (milliseconds)".to_string(),
                })?;
        }
        if let Some(v) = section.get("update_distance_m") {
            config.navigation.update_distance_m =
                parse_non_negative("navigation", "update_distance_m", v)?;
        }
    }

    // [store] section
    if let Some(section) = ini.section(Some("store")) {
        if let Some(v) = section.get("buildings_file") {
            let v = v.trim();
            if !v.is_empty() {
                config.store.buildings_file = Some(expand_tilde(v));
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

fn parse_positive(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a positive number".to_string(),
        }),
    }
}

fn parse_non_negative(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be zero or a positive number".to_string(),
        }),
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Collapse the home directory to `~` for display and saving.
pub(super) fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
