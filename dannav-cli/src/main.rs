//! DAN Navigator CLI - Command-line interface
//!
//! Encodes buildings into Digital Access Numbers, decodes them back to
//! coordinates, and replays recorded tracks through the progress tracker.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::decode::DecodeArgs;
use commands::encode::EncodeArgs;
use commands::format::FormatArgs;
use commands::navigate::NavigateArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "dannav")]
#[command(version = dannav::VERSION)]
#[command(about = "Digital Access Numbers for Nigerian buildings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Assign a DAN to a building footprint or a point
    Encode(EncodeArgs),

    /// Resolve a DAN to a coordinate
    Decode(DecodeArgs),

    /// Print a DAN in canonical 234-SS-LLLLLLL form
    Format(FormatArgs),

    /// List state codes and abbreviations
    States,

    /// Replay a recorded track against a route and report progress
    Navigate(NavigateArgs),

    /// Create the configuration file with defaults
    Init,

    /// View or change configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        e.exit();
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Encode(args) => commands::encode::run(args),
        Commands::Decode(args) => commands::decode::run(args),
        Commands::Format(args) => commands::format::run(args),
        Commands::States => commands::states::run(),
        Commands::Navigate(args) => commands::navigate::run(args),
        Commands::Init => commands::init::run(),
        Commands::Config { command } => commands::config::run(command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_encode_with_point() {
        let cli = Cli::try_parse_from([
            "dannav", "encode", "--state", "Lagos", "--lat", "6.5244", "--lon", "3.3792",
        ])
        .unwrap();
        match cli.command {
            Commands::Encode(args) => {
                assert_eq!(args.state, "Lagos");
                assert_eq!(args.lat, Some(6.5244));
                assert!(args.footprint.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_encode_requires_a_location() {
        assert!(Cli::try_parse_from(["dannav", "encode", "--state", "Lagos"]).is_err());
        assert!(
            Cli::try_parse_from(["dannav", "encode", "--state", "Lagos", "--lat", "6.5"]).is_err()
        );
    }

    #[test]
    fn test_encode_footprint_conflicts_with_point() {
        let result = Cli::try_parse_from([
            "dannav",
            "encode",
            "--state",
            "Lagos",
            "--footprint",
            "house.json",
            "--lat",
            "6.5",
            "--lon",
            "3.3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_args() {
        let cli = Cli::try_parse_from(["dannav", "decode", "234-24-2396056", "--json"]).unwrap();
        match cli.command {
            Commands::Decode(args) => {
                assert_eq!(args.dan, "234-24-2396056");
                assert!(args.json);
                assert!(args.buildings.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_navigate_destination_options() {
        let cli = Cli::try_parse_from([
            "dannav",
            "navigate",
            "--route",
            "route.json",
            "--track",
            "track.json",
            "--to-dan",
            "234-24-2396056",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Navigate(ref a) if a.to_dan.is_some()));

        let conflicting = Cli::try_parse_from([
            "dannav",
            "navigate",
            "--route",
            "route.json",
            "--track",
            "track.json",
            "--to-dan",
            "234-24-2396056",
            "--to-lat",
            "6.5",
            "--to-lon",
            "3.3",
        ]);
        assert!(conflicting.is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from([
            "dannav",
            "config",
            "set",
            "navigation.arrival_threshold_m",
            "25",
        ])
        .unwrap();
        match cli.command {
            Commands::Config {
                command: ConfigCommands::Set { key, value },
            } => {
                assert_eq!(key, "navigation.arrival_threshold_m");
                assert_eq!(value, "25");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
