//! Navigate command - replay a recorded track against a route.
//!
//! Positions from the track file are pushed one by one through a
//! [`ManualPositionSource`] into a [`ProgressTracker`], printing each event
//! as it is emitted. Replay stops at the first arrival.

use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use clap::Args;
use console::style;

use dannav::coord::Coordinate;
use dannav::navigation::{
    format_distance, format_duration, ManualPositionSource, NavigationEvent, ProgressTracker,
    RouteSummary, TrackerConfig,
};

use super::common::{coordinate_arg, load_route, load_track};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the navigate command.
#[derive(Debug, Args)]
pub struct NavigateArgs {
    /// Directions route summary (JSON with distance, duration, geometry, steps)
    #[arg(long)]
    pub route: PathBuf,

    /// Recorded positions: JSON array of {"latitude": .., "longitude": ..}
    #[arg(long)]
    pub track: PathBuf,

    /// Destination DAN (defaults to the last point of the route geometry)
    #[arg(long, conflicts_with_all = ["to_lat", "to_lon"])]
    pub to_dan: Option<String>,

    /// Destination latitude
    #[arg(long, requires = "to_lon", allow_negative_numbers = true)]
    pub to_lat: Option<f64>,

    /// Destination longitude
    #[arg(long, requires = "to_lat", allow_negative_numbers = true)]
    pub to_lon: Option<f64>,

    /// GeoJSON file of known buildings for resolving --to-dan exactly
    #[arg(long)]
    pub buildings: Option<PathBuf>,

    /// Print one JSON event per line
    #[arg(long)]
    pub json: bool,
}

/// What a replay ended with.
#[derive(Debug)]
struct Replay {
    events: Vec<NavigationEvent>,
    samples_used: usize,
    arrived: bool,
}

/// Run the navigate command.
pub fn run(args: NavigateArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("navigate");

    let route = load_route(&args.route)?;
    let track = load_track(&args.track)?;

    let destination = match (&args.to_dan, args.to_lat, args.to_lon) {
        (Some(dan), _, _) => {
            runner
                .codec(args.buildings.as_deref())?
                .decode(dan)?
                .coordinate
        }
        (None, Some(lat), Some(lon)) => coordinate_arg(lat, lon)?,
        _ => route.end().ok_or_else(|| {
            CliError::InvalidArgument(
                "route has no geometry; give the destination with --to-dan or --to-lat/--to-lon"
                    .to_string(),
            )
        })?,
    };

    if !args.json {
        println!("Destination:  {}", destination);
        println!(
            "Route:        {} ({})",
            format_distance(route.distance_km()),
            format_duration(route.duration)
        );
        println!();
    }

    let config = runner.config().navigation.to_tracker_config();
    let replay = replay_track(config, destination, route, &track, |event| {
        print_event(event, args.json)
    })?;

    if !replay.arrived && !args.json {
        println!();
        match replay.events.last().and_then(NavigationEvent::progress) {
            Some(progress) => println!(
                "Track ended {} from the destination ({} of {} positions used).",
                style(format_distance(progress.distance_remaining)).yellow(),
                replay.samples_used,
                track.len()
            ),
            None => println!("Track ended without any positions."),
        }
    }
    Ok(())
}

/// Push every track position through a fresh tracker, handing each emitted
/// event to `on_event` in order.
fn replay_track<F>(
    config: TrackerConfig,
    destination: Coordinate,
    route: RouteSummary,
    track: &[Coordinate],
    mut on_event: F,
) -> Result<Replay, CliError>
where
    F: FnMut(&NavigationEvent) -> Result<(), CliError>,
{
    let source = ManualPositionSource::new();
    let tracker = ProgressTracker::with_config(Arc::new(source.clone()), config);

    let (tx, rx) = mpsc::channel();
    let started = tracker.start(destination, route, move |event| {
        // Receiver outlives the replay loop
        let _ = tx.send(event);
    });
    if !started {
        return Err(CliError::Navigation(
            "position updates could not be started".to_string(),
        ));
    }

    let mut replay = Replay {
        events: Vec::new(),
        samples_used: 0,
        arrived: false,
    };

    for position in track {
        source.push_position(position.latitude, position.longitude);
        replay.samples_used += 1;

        for event in rx.try_iter() {
            on_event(&event)?;
            replay.arrived |= event.is_arrival();
            replay.events.push(event);
        }
        if replay.arrived {
            break;
        }
    }

    tracker.stop();
    Ok(replay)
}

fn print_event(event: &NavigationEvent, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }

    match event {
        NavigationEvent::Progress(progress) => println!(
            "{:>8} remaining, about {:<8} {}",
            format_distance(progress.distance_remaining),
            format_duration(progress.duration_remaining),
            progress.next_instruction.as_deref().unwrap_or("")
        ),
        NavigationEvent::Arrived(arrival) => println!(
            "{} ({} from {})",
            style("Arrived").bold().green(),
            format_distance(arrival.distance_km),
            arrival.destination
        ),
    }
    Ok(())
}
