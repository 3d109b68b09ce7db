//! Settings structs for each configuration section.
//!
//! Each struct represents one `[section]` of `config.ini`.

use std::path::PathBuf;
use std::time::Duration;

use crate::navigation::{Accuracy, TrackerConfig, WatchOptions};

/// Default arrival radius in meters.
pub const DEFAULT_ARRIVAL_THRESHOLD_M: f64 = 20.0;

/// Default average speed for time estimates, in km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

/// Default minimum time between position updates, in milliseconds.
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 1000;

/// Default minimum movement between position updates, in meters.
pub const DEFAULT_UPDATE_DISTANCE_M: f64 = 5.0;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "dannav.log";

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub navigation: NavigationSettings,
    pub store: StoreSettings,
    pub logging: LoggingSettings,
}

/// Progress tracker tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationSettings {
    /// Arrival radius in meters
    pub arrival_threshold_m: f64,
    /// Average speed used for the remaining time estimate
    pub average_speed_kmh: f64,
    /// Minimum time between position updates
    pub update_interval_ms: u64,
    /// Minimum movement between position updates
    pub update_distance_m: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            arrival_threshold_m: DEFAULT_ARRIVAL_THRESHOLD_M,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            update_distance_m: DEFAULT_UPDATE_DISTANCE_M,
        }
    }
}

impl NavigationSettings {
    /// Builds the tracker configuration these settings describe.
    pub fn to_tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            arrival_threshold_km: self.arrival_threshold_m / 1000.0,
            average_speed_kmh: self.average_speed_kmh,
            watch: WatchOptions {
                accuracy: Accuracy::High,
                time_interval: Duration::from_millis(self.update_interval_ms),
                distance_interval_m: self.update_distance_m,
            },
        }
    }
}

/// Exact-lookup building store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreSettings {
    /// GeoJSON file of known buildings to seed the store with
    pub buildings_file: Option<PathBuf>,
}

/// Log output location.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: super::file::config_directory().join("logs"),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl LoggingSettings {
    /// Full path of the log file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file)
    }
}
