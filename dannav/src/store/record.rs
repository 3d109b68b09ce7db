//! Building records held by the exact-lookup store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::dan::Dan;

/// Provenance of a building record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildingKind {
    /// Seeded from the public buildings dataset (hospitals, schools, ...).
    Public,
    /// Registered by an owner.
    Private,
    /// Added by a user from the map.
    UserSubmitted,
}

/// A building with its authoritative coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub dan: Dan,
    pub coordinate: Coordinate,
    pub state_code: String,
    pub kind: BuildingKind,
    pub name: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BuildingRecord {
    /// Creates a record stamped with the current time.
    pub fn new(dan: Dan, coordinate: Coordinate, kind: BuildingKind) -> Self {
        Self {
            state_code: dan.state_code().to_string(),
            dan,
            coordinate,
            kind,
            name: None,
            category: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
