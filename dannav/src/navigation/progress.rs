//! Events emitted by the progress tracker.

use serde::Serialize;

use crate::coord::Coordinate;

/// Point-in-time summary of remaining distance and time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Kilometers to the destination (great-circle).
    pub distance_remaining: f64,
    /// Seconds to the destination at the configured average speed.
    pub duration_remaining: f64,
    /// Index of the current route step. Always 0 until steps are matched against the geometry.
    pub current_step_index: usize,
    pub next_instruction: Option<String>,
}

/// Emitted once when a position falls inside the arrival radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arrival {
    pub destination: Coordinate,
    pub position: Coordinate,
    /// Distance left when arrival was detected, in kilometers.
    pub distance_km: f64,
}

/// Everything a tracker sink receives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum NavigationEvent {
    Progress(Progress),
    Arrived(Arrival),
}

impl NavigationEvent {
    pub fn is_arrival(&self) -> bool {
        matches!(self, NavigationEvent::Arrived(_))
    }

    pub fn progress(&self) -> Option<&Progress> {
        match self {
            NavigationEvent::Progress(p) => Some(p),
            NavigationEvent::Arrived(_) => None,
        }
    }
}
