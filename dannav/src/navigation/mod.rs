//! Navigation progress against a precomputed route.
//!
//! The [`ProgressTracker`] consumes positions pushed by a [`PositionSource`]
//! and reports remaining distance and time until the destination is reached.
//! Routes come from an external directions provider as a [`RouteSummary`].
//!
//! Two sources are provided: [`ManualPositionSource`] for replaying recorded
//! tracks, and [`BroadcastPositionSource`] for bridging a tokio broadcast feed.

mod broadcast;
mod format;
mod manual;
mod position;
mod progress;
mod route;
mod tracker;

pub use broadcast::{BroadcastPositionSource, DEFAULT_CHANNEL_CAPACITY};
pub use format::{format_distance, format_duration};
pub use manual::ManualPositionSource;
pub use position::{
    Accuracy, Authorization, CadenceFilter, PositionCallback, PositionError, PositionSample,
    PositionSource, PositionSubscription, WatchOptions, DEFAULT_DISTANCE_INTERVAL_M,
    DEFAULT_TIME_INTERVAL,
};
pub use progress::{Arrival, NavigationEvent, Progress};
pub use route::{Maneuver, RouteGeometry, RouteStep, RouteSummary};
pub use tracker::{
    ProgressTracker, TrackerConfig, TrackerState, ARRIVAL_THRESHOLD_KM, AVERAGE_SPEED_KMH,
    PLACEHOLDER_INSTRUCTION,
};
