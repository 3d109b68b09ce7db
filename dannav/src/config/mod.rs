//! User configuration stored in `~/.dannav/config.ini`.
//!
//! # Example
//!
//! ```no_run
//! use dannav::config::ConfigFile;
//!
//! let config = ConfigFile::load()?;
//! let tracker_config = config.navigation.to_tracker_config();
//! # Ok::<(), dannav::config::ConfigFileError>(())
//! ```

mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    ConfigFile, LoggingSettings, NavigationSettings, StoreSettings, DEFAULT_ARRIVAL_THRESHOLD_M,
    DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_LOG_FILE, DEFAULT_UPDATE_DISTANCE_M,
    DEFAULT_UPDATE_INTERVAL_MS,
};
