//! Seeding the store from a GeoJSON FeatureCollection.
//!
//! Each feature needs a `state` property and a Point or Polygon geometry.
//! `name` and `category` properties are copied onto the record.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use super::memory::{MemoryBuildingStore, StoreError};
use super::record::{BuildingKind, BuildingRecord};
use crate::dan::{DanCodec, DanError, Footprint};

/// Seeding errors. Per-feature problems are counted, not raised.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Features whose state is missing or not in the state table.
    pub unknown_state: usize,
    /// Features whose DAN was already taken.
    pub duplicates: usize,
    /// Features with no usable geometry.
    pub invalid_geometry: usize,
}

impl SeedReport {
    pub fn skipped(&self) -> usize {
        self.unknown_state + self.duplicates + self.invalid_geometry
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    #[serde(default)]
    properties: FeatureProperties,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    name: Option<String>,
    category: Option<String>,
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: Vec<f64> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// The outer ring (or single point) as a footprint ring.
    fn ring(self) -> Vec<Vec<f64>> {
        match self {
            Geometry::Point { coordinates } => vec![coordinates],
            Geometry::Polygon { coordinates } => coordinates.into_iter().next().unwrap_or_default(),
            Geometry::Unsupported => Vec::new(),
        }
    }
}

impl MemoryBuildingStore {
    /// Encodes and inserts every feature of a GeoJSON FeatureCollection as a
    /// public building.
    pub fn seed_from_geojson(&self, codec: &DanCodec, json: &str) -> Result<SeedReport, SeedError> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        let mut report = SeedReport::default();

        for feature in collection.features {
            let FeatureProperties {
                name,
                category,
                state,
            } = feature.properties;

            let Some(state) = state else {
                warn!(name = ?name, "Seed feature has no state, skipping");
                report.unknown_state += 1;
                continue;
            };

            let ring = feature.geometry.map(Geometry::ring).unwrap_or_default();
            let footprint = Footprint::new(ring, state);

            let encoded = match codec.encode(&footprint) {
                Ok(encoded) => encoded,
                Err(DanError::UnknownState(state)) => {
                    warn!(state = %state, name = ?name, "State code not found, skipping");
                    report.unknown_state += 1;
                    continue;
                }
                Err(e) => {
                    warn!(error = %e, name = ?name, "Unusable seed geometry, skipping");
                    report.invalid_geometry += 1;
                    continue;
                }
            };

            let mut record =
                BuildingRecord::new(encoded.dan, encoded.centroid, BuildingKind::Public);
            record.name = name;
            record.category = category;

            match self.insert(record) {
                Ok(()) => report.inserted += 1,
                Err(StoreError::Duplicate(dan)) => {
                    warn!(dan = %dan, "DAN already recorded, skipping");
                    report.duplicates += 1;
                }
            }
        }

        info!(
            inserted = report.inserted,
            skipped = report.skipped(),
            "Seeded public buildings"
        );

        Ok(report)
    }

    /// Reads a GeoJSON file and seeds the store from it.
    pub fn seed_from_file(&self, codec: &DanCodec, path: &Path) -> Result<SeedReport, SeedError> {
        let json = std::fs::read_to_string(path)?;
        self.seed_from_geojson(codec, &json)
    }
}
