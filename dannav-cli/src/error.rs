//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use dannav::config::ConfigFileError;
use dannav::dan::DanError;
use dannav::store::SeedError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Config file could not be read or written
    ConfigFile(ConfigFileError),
    /// Invalid DAN, state or footprint
    Address(DanError),
    /// Failed to load the buildings file
    Seed { path: String, error: SeedError },
    /// Failed to read an input file
    FileRead { path: String, error: std::io::Error },
    /// Input file has the wrong shape
    InvalidInput { path: String, reason: String },
    /// Invalid command-line argument
    InvalidArgument(String),
    /// Position updates could not be started
    Navigation(String),
    /// Failed to serialize output
    Output(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Address(DanError::Format(_)) => {
                eprintln!();
                eprintln!("A DAN has 12 digits: 234-SS-LLLLLLL");
                eprintln!("  234      country code");
                eprintln!("  SS       two-digit state code (see 'dannav states')");
                eprintln!("  LLLLLLL  seven-digit location code");
            }
            CliError::Address(DanError::UnknownState(_)) => {
                eprintln!();
                eprintln!("Run 'dannav states' to list valid state names and abbreviations.");
            }
            CliError::ConfigFile(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!("Fix the value with 'dannav config set <key> <value>'");
                eprintln!("or edit the file shown by 'dannav config path'.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Address(e) => write!(f, "{}", e),
            CliError::Seed { path, error } => {
                write!(f, "Failed to load buildings from '{}': {}", path, error)
            }
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
            CliError::InvalidInput { path, reason } => {
                write!(f, "Invalid input in '{}': {}", path, reason)
            }
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Navigation(msg) => write!(f, "Navigation failed: {}", msg),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Address(e) => Some(e),
            CliError::Seed { error, .. } => Some(error),
            CliError::FileRead { error, .. } => Some(error),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}

impl From<DanError> for CliError {
    fn from(e: DanError) -> Self {
        CliError::Address(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_address_error_message() {
        let err = CliError::from(DanError::UnknownState("Atlantis".to_string()));
        assert_eq!(err.to_string(), "Unknown state: 'Atlantis'");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_file_read_message() {
        let err = CliError::FileRead {
            path: "track.json".to_string(),
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("track.json"));
    }
}
