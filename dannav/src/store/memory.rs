//! Concurrent in-memory building store.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use thiserror::Error;

use super::record::{BuildingKind, BuildingRecord};
use crate::coord::Coordinate;
use crate::dan::{CoordinateLookup, Dan, LookupError};

/// Store mutation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// DANs are unique; a second building in the same cell is rejected.
    #[error("A building is already recorded for DAN {0}")]
    Duplicate(Dan),
}

/// Building records keyed by DAN.
///
/// Safe to share across threads; readers never block each other.
#[derive(Debug, Default)]
pub struct MemoryBuildingStore {
    records: DashMap<Dan, BuildingRecord>,
}

impl MemoryBuildingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, failing if its DAN is already taken.
    pub fn insert(&self, record: BuildingRecord) -> Result<(), StoreError> {
        match self.records.entry(record.dan.clone()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(record.dan)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Inserts or replaces a record, returning the previous one.
    pub fn upsert(&self, record: BuildingRecord) -> Option<BuildingRecord> {
        self.records.insert(record.dan.clone(), record)
    }

    pub fn get(&self, dan: &Dan) -> Option<BuildingRecord> {
        self.records.get(dan).map(|r| r.value().clone())
    }

    pub fn remove(&self, dan: &Dan) -> Option<BuildingRecord> {
        self.records.remove(dan).map(|(_, record)| record)
    }

    pub fn contains(&self, dan: &Dan) -> bool {
        self.records.contains_key(dan)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records of one kind, in no particular order.
    pub fn by_kind(&self, kind: BuildingKind) -> Vec<BuildingRecord> {
        self.records
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.value().clone())
            .collect()
    }

    /// Number of records of one kind.
    pub fn count_kind(&self, kind: BuildingKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}

impl CoordinateLookup for MemoryBuildingStore {
    fn lookup(&self, dan: &Dan) -> Result<Option<Coordinate>, LookupError> {
        Ok(self.records.get(dan).map(|r| r.coordinate))
    }
}
