//! Push-based position delivery.
//!
//! A [`PositionSource`] grants or denies positioning authorization and pushes
//! samples to a registered callback until the returned
//! [`PositionSubscription`] is removed. The tracker never polls.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::coord::{haversine_km, Coordinate};

/// Default minimum time between delivered samples.
pub const DEFAULT_TIME_INTERVAL: Duration = Duration::from_secs(1);

/// Default minimum movement between delivered samples, in meters.
pub const DEFAULT_DISTANCE_INTERVAL_M: f64 = 5.0;

/// A single device position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// When this sample was taken.
    pub timestamp: Instant,
}

impl PositionSample {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self::with_timestamp(latitude, longitude, Instant::now())
    }

    pub fn with_timestamp(latitude: f64, longitude: f64, timestamp: Instant) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl From<Coordinate> for PositionSample {
    fn from(c: Coordinate) -> Self {
        Self::new(c.latitude, c.longitude)
    }
}

/// Requested fix quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accuracy {
    Low,
    Balanced,
    #[default]
    High,
}

/// Cadence requested from a position source.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchOptions {
    pub accuracy: Accuracy,
    /// Minimum time between samples.
    pub time_interval: Duration,
    /// Minimum movement between samples, in meters.
    pub distance_interval_m: f64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            accuracy: Accuracy::High,
            time_interval: DEFAULT_TIME_INTERVAL,
            distance_interval_m: DEFAULT_DISTANCE_INTERVAL_M,
        }
    }
}

impl WatchOptions {
    /// Deliver every sample as it arrives.
    pub fn unthrottled() -> Self {
        Self {
            accuracy: Accuracy::High,
            time_interval: Duration::ZERO,
            distance_interval_m: 0.0,
        }
    }
}

/// Result of an authorization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Granted,
    Denied,
}

/// Position provider failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("Positioning authorization denied")]
    AuthorizationDenied,

    #[error("Failed to start position updates: {0}")]
    SubscriptionFailed(String),
}

/// Receives pushed samples. May be called from any thread.
pub type PositionCallback = Box<dyn Fn(PositionSample) + Send + Sync + 'static>;

/// Handle to an active position feed.
///
/// `remove` is idempotent. Implementations also release on drop.
pub trait PositionSubscription: Send {
    fn remove(&mut self);
}

/// A device positioning capability.
pub trait PositionSource: Send + Sync {
    /// Ask for permission to read the device position.
    fn request_authorization(&self) -> Authorization;

    /// Start pushing samples to `callback` at roughly the requested cadence.
    ///
    /// Samples from one subscription are delivered sequentially.
    fn watch(
        &self,
        options: &WatchOptions,
        callback: PositionCallback,
    ) -> Result<Box<dyn PositionSubscription>, PositionError>;
}

/// Drops samples that arrive faster or closer than the requested cadence.
#[derive(Debug, Clone)]
pub struct CadenceFilter {
    time_interval: Duration,
    distance_interval_km: f64,
    last: Option<PositionSample>,
}

impl CadenceFilter {
    pub fn new(options: &WatchOptions) -> Self {
        Self {
            time_interval: options.time_interval,
            distance_interval_km: options.distance_interval_m / 1000.0,
            last: None,
        }
    }

    /// Returns true if the sample should be delivered, and records it if so.
    pub fn accept(&mut self, sample: &PositionSample) -> bool {
        if let Some(last) = &self.last {
            let elapsed = sample.timestamp.saturating_duration_since(last.timestamp);
            if elapsed < self.time_interval {
                return false;
            }
            let moved = haversine_km(&last.coordinate(), &sample.coordinate());
            if moved < self.distance_interval_km {
                return false;
            }
        }

        self.last = Some(*sample);
        true
    }
}
