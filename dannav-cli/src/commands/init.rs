//! Init command - initialize configuration file.

use dannav::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
pub fn run() -> Result<(), CliError> {
    let path = config_file_path();
    let created = ConfigFile::ensure_exists_at(&path)?;

    if created {
        println!("Created configuration file: {}", path.display());
    } else {
        println!("Configuration file already exists: {}", path.display());
    }
    println!();
    println!("Edit this file to tune arrival detection, the buildings file and logging.");
    println!("CLI arguments override config file values when specified.");
    Ok(())
}
