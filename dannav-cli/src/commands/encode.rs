//! Encode command - assign a DAN to a building footprint or point.

use std::path::PathBuf;

use clap::Args;
use console::style;

use dannav::dan::{EncodedDan, Footprint};

use super::common::{coordinate_arg, load_footprint_ring};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the encode command.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// State name or two-letter abbreviation (e.g., "Lagos", "LA", "FCT - Abuja")
    #[arg(long)]
    pub state: String,

    /// Footprint file: a ring of [lon, lat] positions or a GeoJSON Polygon
    #[arg(long, conflicts_with_all = ["lat", "lon"], required_unless_present_all = ["lat", "lon"])]
    pub footprint: Option<PathBuf>,

    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the encode command.
pub fn run(args: EncodeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("encode");

    let footprint = match (&args.footprint, args.lat, args.lon) {
        (Some(path), _, _) => Footprint::new(load_footprint_ring(path)?, args.state.as_str()),
        (None, Some(lat), Some(lon)) => {
            Footprint::from_point(coordinate_arg(lat, lon)?, args.state.as_str())
        }
        _ => {
            return Err(CliError::InvalidArgument(
                "either --footprint or both --lat and --lon are required".to_string(),
            ))
        }
    };

    let encoded = runner.codec(None)?.encode(&footprint)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&encoded)?);
    } else {
        print_encoded(&encoded);
    }
    Ok(())
}

fn print_encoded(encoded: &EncodedDan) {
    println!("DAN:        {}", style(&encoded.formatted).bold().green());
    println!("State:      {} ({})", encoded.state, encoded.state_code);
    println!("Centroid:   {}", encoded.centroid);
    println!(
        "Grid cell:  row {}, column {}",
        encoded.cell.lat_index, encoded.cell.lon_index
    );
    if encoded.cell.is_edge() {
        println!();
        println!(
            "{}",
            style("Note: the centroid lies on the edge of the national grid.").yellow()
        );
    }
}
