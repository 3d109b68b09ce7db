//! DAN Navigator - Digital Access Numbers and navigation progress
//!
//! This library assigns compact 12-digit addresses (Digital Access Numbers)
//! to buildings in Nigeria, decodes them back to coordinates, and tracks a
//! user's progress along a route to a decoded destination.
//!
//! # High-Level API
//!
//! ```ignore
//! use dannav::dan::{DanCodec, Footprint};
//! use dannav::navigation::{ProgressTracker, RouteSummary};
//!
//! let codec = DanCodec::new();
//! let destination = codec.decode("234-24-0182052")?.coordinate;
//!
//! let tracker = ProgressTracker::new(position_source);
//! tracker.start(destination, route, |event| render(event));
//! ```

pub mod config;
pub mod coord;
pub mod dan;
pub mod logging;
pub mod navigation;
pub mod state;
pub mod store;

/// Version of the DAN Navigator library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
