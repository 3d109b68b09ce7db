//! Configuration key access and validation.
//!
//! Type-safe get/set of configuration values by `section.key` name, used by
//! the `config` CLI subcommands.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use super::parser::{expand_tilde, path_to_display};
use super::settings::ConfigFile;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Navigation settings
    NavigationArrivalThreshold,
    NavigationAverageSpeed,
    NavigationUpdateInterval,
    NavigationUpdateDistance,

    // Store settings
    StoreBuildingsFile,

    // Logging settings
    LoggingDirectory,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "navigation.average_speed_kmh").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::NavigationArrivalThreshold => "navigation.arrival_threshold_m",
            ConfigKey::NavigationAverageSpeed => "navigation.average_speed_kmh",
            ConfigKey::NavigationUpdateInterval => "navigation.update_interval_ms",
            ConfigKey::NavigationUpdateDistance => "navigation.update_distance_m",
            ConfigKey::StoreBuildingsFile => "store.buildings_file",
            ConfigKey::LoggingDirectory => "logging.directory",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "navigation").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "average_speed_kmh").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::NavigationArrivalThreshold => {
                config.navigation.arrival_threshold_m.to_string()
            }
            ConfigKey::NavigationAverageSpeed => config.navigation.average_speed_kmh.to_string(),
            ConfigKey::NavigationUpdateInterval => {
                config.navigation.update_interval_ms.to_string()
            }
            ConfigKey::NavigationUpdateDistance => config.navigation.update_distance_m.to_string(),
            ConfigKey::StoreBuildingsFile => config
                .store
                .buildings_file
                .as_ref()
                .map(|p| path_to_display(p))
                .unwrap_or_default(),
            ConfigKey::LoggingDirectory => path_to_display(&config.logging.directory),
            ConfigKey::LoggingFile => config.logging.file.clone(),
        }
    }

    /// Set the value in a config file.
    ///
    /// The config is left unchanged if the value is rejected.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let value = value.trim();
        match self {
            ConfigKey::NavigationArrivalThreshold => {
                config.navigation.arrival_threshold_m = self.number(value, Bound::Positive)?;
            }
            ConfigKey::NavigationAverageSpeed => {
                config.navigation.average_speed_kmh = self.number(value, Bound::Positive)?;
            }
            ConfigKey::NavigationUpdateInterval => {
                config.navigation.update_interval_ms =
                    value.parse().map_err(|_| self.invalid("must be a non-negative integer"))?;
            }
            ConfigKey::NavigationUpdateDistance => {
                config.navigation.update_distance_m = self.number(value, Bound::NonNegative)?;
            }
            ConfigKey::StoreBuildingsFile => {
                config.store.buildings_file = optional_path(value);
            }
            ConfigKey::LoggingDirectory => {
                if value.is_empty() {
                    return Err(self.invalid("must be a valid path"));
                }
                config.logging.directory = expand_tilde(value);
            }
            ConfigKey::LoggingFile => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(self.invalid("must be a plain file name"));
                }
                config.logging.file = value.to_string();
            }
        }
        Ok(())
    }

    /// Check a value without applying it.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        let mut scratch = ConfigFile::default();
        self.set(&mut scratch, value)
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::NavigationArrivalThreshold,
            ConfigKey::NavigationAverageSpeed,
            ConfigKey::NavigationUpdateInterval,
            ConfigKey::NavigationUpdateDistance,
            ConfigKey::StoreBuildingsFile,
            ConfigKey::LoggingDirectory,
            ConfigKey::LoggingFile,
        ]
    }

    fn number(&self, value: &str, bound: Bound) -> Result<f64, ConfigKeyError> {
        let n: f64 = value
            .parse()
            .map_err(|_| self.invalid(bound.reason()))?;
        let ok = n.is_finite()
            && match bound {
                Bound::Positive => n > 0.0,
                Bound::NonNegative => n >= 0.0,
            };
        if ok {
            Ok(n)
        } else {
            Err(self.invalid(bound.reason()))
        }
    }

    fn invalid(&self, reason: &str) -> ConfigKeyError {
        ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum Bound {
    Positive,
    NonNegative,
}

impl Bound {
    fn reason(self) -> &'static str {
        match self {
            Bound::Positive => "must be a positive number",
            Bound::NonNegative => "must be zero or a positive number",
        }
    }
}

/// Convert empty string to None, non-empty to Some path with tilde expansion.
fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(expand_tilde(value))
    }
}
