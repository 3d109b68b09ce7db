//! Route summaries produced by an external directions provider.
//!
//! The shape follows the Directions API response trimmed by the backend:
//! `{ distance, duration, geometry, steps }` with distance in meters and
//! duration in seconds.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// A maneuver at the start of a route step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// Maneuver type, e.g. "turn", "depart", "arrive".
    #[serde(rename = "type")]
    pub kind: String,
    /// Direction modifier, e.g. "left", "slight right".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// One leg of turn-by-turn guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    pub maneuver: Maneuver,
}

impl RouteStep {
    /// Spoken instruction, falling back to the maneuver's own text.
    pub fn instruction(&self) -> Option<&str> {
        self.instruction
            .as_deref()
            .or(self.maneuver.instruction.as_deref())
    }
}

/// GeoJSON LineString geometry of the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[lon, lat, ...]` positions.
    pub coordinates: Vec<Vec<f64>>,
}

/// A planned route. Owned by the caller; the tracker only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Total distance in meters.
    pub distance: f64,
    /// Total duration in seconds.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<RouteGeometry>,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// A route with totals only.
    pub fn new(distance_m: f64, duration_s: f64) -> Self {
        Self {
            distance: distance_m,
            duration: duration_s,
            geometry: None,
            steps: Vec::new(),
        }
    }

    /// Parses a route summary from the directions JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }

    /// Route geometry as coordinates, skipping malformed positions.
    pub fn path(&self) -> Vec<Coordinate> {
        self.geometry
            .as_ref()
            .map(|g| {
                g.coordinates
                    .iter()
                    .filter(|p| p.len() >= 2)
                    .map(|p| Coordinate::from_lon_lat(p[0], p[1]))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Last point of the geometry, if any.
    pub fn end(&self) -> Option<Coordinate> {
        self.path().last().copied()
    }
}
