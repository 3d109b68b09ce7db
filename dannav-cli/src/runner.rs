//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and codec creation
//! to reduce duplication across command handlers.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use dannav::config::ConfigFile;
use dannav::dan::DanCodec;
use dannav::logging::{init_logging, LoggingGuard};
use dannav::store::MemoryBuildingStore;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new() -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&config.logging.directory, &config.logging.file)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("DAN Navigator v{}", dannav::VERSION);
        info!("DAN Navigator CLI: {} command", command);
    }

    /// Build a codec, backed by a building store when a buildings file is
    /// given on the command line or in config.ini.
    pub fn codec(&self, buildings: Option<&Path>) -> Result<DanCodec, CliError> {
        let path = buildings.or(self.config.store.buildings_file.as_deref());
        match path {
            Some(path) => codec_with_buildings(path),
            None => Ok(DanCodec::new()),
        }
    }
}

/// Seed an in-memory store from `path` and attach it to a new codec.
pub fn codec_with_buildings(path: &Path) -> Result<DanCodec, CliError> {
    let codec = DanCodec::new();
    let store = Arc::new(MemoryBuildingStore::new());

    let report = store
        .seed_from_file(&codec, path)
        .map_err(|error| CliError::Seed {
            path: path.display().to_string(),
            error,
        })?;
    info!(
        path = %path.display(),
        inserted = report.inserted,
        skipped = report.skipped(),
        "Loaded buildings"
    );

    Ok(codec.with_lookup(store))
}
