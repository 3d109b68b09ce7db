//! Configuration management CLI commands.
//!
//! `config get`, `config set`, `config list` and `config path` read and edit
//! `~/.dannav/config.ini` one key at a time.

use clap::Subcommand;
use console::style;

use dannav::config::{config_file_path, ConfigFile, ConfigKey, ConfigKeyError};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print a configuration value
    Get {
        /// Key in section.key form (e.g., navigation.arrival_threshold_m)
        key: String,
    },

    /// Change a configuration value
    Set {
        /// Key in section.key form (e.g., navigation.arrival_threshold_m)
        key: String,

        /// New value; an empty string clears optional paths
        value: String,
    },

    /// List every key with its current value
    List,

    /// Print the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(&key),
        ConfigCommands::Set { key, value } => run_set(&key, &value),
        ConfigCommands::List => run_list(),
        ConfigCommands::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|e: ConfigKeyError| {
        CliError::Config(format!(
            "{}. Use 'dannav config list' to see available keys.",
            e
        ))
    })
}

fn run_get(key: &str) -> Result<(), CliError> {
    let key = parse_key(key)?;
    let config = ConfigFile::load()?;

    let value = key.get(&config);
    if value.is_empty() {
        println!("(not set)");
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn run_set(key: &str, value: &str) -> Result<(), CliError> {
    let key = parse_key(key)?;
    let mut config = ConfigFile::load()?;

    key.set(&mut config, value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    config.save()?;

    println!("Set {} = {}", key.name(), key.get(&config));
    Ok(())
}

fn run_list() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let defaults = ConfigFile::default();

    println!("Configuration ({})", config_file_path().display());

    let mut current_section = "";
    for key in ConfigKey::all() {
        if key.section() != current_section {
            current_section = key.section();
            println!();
            println!("{}", style(format!("[{}]", current_section)).bold());
        }

        let value = key.get(&config);
        let shown = if value.is_empty() {
            style("(not set)".to_string()).dim()
        } else if value == key.get(&defaults) {
            style(format!("{} (default)", value)).dim()
        } else {
            style(value)
        };
        println!("  {} = {}", key.key_name(), shown);
    }
    Ok(())
}
