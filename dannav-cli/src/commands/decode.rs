//! Decode command - resolve a DAN to a coordinate.

use std::path::PathBuf;

use clap::Args;
use console::style;

use dannav::coord::{haversine_km, Coordinate};
use dannav::dan::{DanCodec, DecodedDan, Precision};
use dannav::navigation::format_distance;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the decode command.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// DAN to decode, with or without separators (e.g., 234-24-2396056)
    pub dan: String,

    /// GeoJSON file of known buildings for exact lookups (overrides config)
    #[arg(long)]
    pub buildings: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the decode command.
pub fn run(args: DecodeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("decode");

    let codec = runner.codec(args.buildings.as_deref())?;
    let decoded = codec.decode(&args.dan)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
    } else {
        print_decoded(&codec, &decoded);
    }
    Ok(())
}

fn print_decoded(codec: &DanCodec, decoded: &DecodedDan) {
    println!("DAN:         {}", style(&decoded.formatted).bold());
    println!("State:       {} ({})", decoded.state, decoded.state_code);
    println!("Location:    {}", decoded.location_code);
    println!("Coordinate:  {}", style(decoded.coordinate).green());

    match decoded.precision {
        Precision::Exact => println!("Precision:   exact (recorded building)"),
        Precision::Approximate => {
            println!(
                "Precision:   {} (south-west corner of a {} cell)",
                style("approximate").yellow(),
                cell_description(codec, decoded)
            );
        }
    }
}

/// Human-readable size of the grid cell behind a decoded DAN, e.g. "108m x 13m".
fn cell_description(codec: &DanCodec, decoded: &DecodedDan) -> String {
    let cell = codec.cell_bounds(&decoded.dan);
    let south_west = Coordinate::new(cell.min_lat, cell.min_lon);
    let height = haversine_km(&south_west, &Coordinate::new(cell.max_lat, cell.min_lon));
    let width = haversine_km(&south_west, &Coordinate::new(cell.min_lat, cell.max_lon));
    format!("{} x {}", format_distance(height), format_distance(width))
}
