//! Exact-coordinate store for recorded buildings.
//!
//! The store is the collaborator the DAN codec asks before falling back to
//! approximate decoding. This in-memory implementation can be seeded from the
//! public buildings GeoJSON dataset.

mod memory;
mod record;
mod seed;

pub use memory::{MemoryBuildingStore, StoreError};
pub use record::{BuildingKind, BuildingRecord};
pub use seed::{SeedError, SeedReport};
