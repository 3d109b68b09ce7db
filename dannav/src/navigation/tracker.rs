//! Navigation progress tracking.
//!
//! A [`ProgressTracker`] owns at most one navigation session. While a session
//! is active, every position pushed by the [`PositionSource`] is turned into a
//! [`NavigationEvent`] for the caller's sink: a [`Progress`] snapshot, or a
//! single [`Arrival`] once the position comes within the arrival radius.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dannav::coord::Coordinate;
//! use dannav::navigation::{ManualPositionSource, ProgressTracker, RouteSummary, TrackerState};
//!
//! let source = ManualPositionSource::new();
//! let tracker = ProgressTracker::new(Arc::new(source.clone()));
//!
//! let destination = Coordinate::new(9.0579, 7.4951);
//! assert!(tracker.start(destination, RouteSummary::new(1200.0, 180.0), |event| {
//!     println!("{:?}", event);
//! }));
//!
//! source.push_position(9.0579, 7.4951);
//! assert_eq!(tracker.state(), TrackerState::Arrived);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::coord::{haversine_km, Coordinate};

use super::position::{
    Authorization, PositionCallback, PositionSample, PositionSource, PositionSubscription,
    WatchOptions,
};
use super::progress::{Arrival, NavigationEvent, Progress};
use super::route::RouteSummary;

/// Distance below which the destination counts as reached, in kilometers.
pub const ARRIVAL_THRESHOLD_KM: f64 = 0.02;

/// Speed used to estimate remaining time, in km/h.
pub const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Instruction reported until route steps are matched against the position.
pub const PLACEHOLDER_INSTRUCTION: &str = "Continue straight";

/// Tuning for a [`ProgressTracker`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub arrival_threshold_km: f64,
    pub average_speed_kmh: f64,
    /// Cadence requested from the position source.
    pub watch: WatchOptions,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            arrival_threshold_km: ARRIVAL_THRESHOLD_KM,
            average_speed_kmh: AVERAGE_SPEED_KMH,
            watch: WatchOptions::default(),
        }
    }
}

impl TrackerConfig {
    /// Estimated seconds to cover `distance_km` at the average speed.
    pub fn duration_for(&self, distance_km: f64) -> f64 {
        if self.average_speed_kmh <= 0.0 {
            return 0.0;
        }
        distance_km / self.average_speed_kmh * 3600.0
    }
}

/// Lifecycle of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Navigating,
    Arrived,
    Stopped,
}

impl fmt::Display for TrackerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrackerState::Idle => "idle",
            TrackerState::Navigating => "navigating",
            TrackerState::Arrived => "arrived",
            TrackerState::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

type EventSink = Box<dyn FnMut(NavigationEvent) + Send + 'static>;
type SharedSink = Arc<Mutex<SinkSlot>>;

/// A session's sink plus events waiting for it.
///
/// The sink is taken out of the slot while it runs, so events raised from
/// inside the sink (or from another thread meanwhile) are queued and
/// delivered in order by whoever is already delivering.
struct SinkSlot {
    sink: Option<EventSink>,
    pending: VecDeque<NavigationEvent>,
}

impl SinkSlot {
    fn shared(sink: EventSink) -> SharedSink {
        Arc::new(Mutex::new(Self {
            sink: Some(sink),
            pending: VecDeque::new(),
        }))
    }
}

struct Session {
    id: u64,
    destination: Coordinate,
    route: RouteSummary,
    sink: SharedSink,
    last_progress: Option<Progress>,
    subscription: Option<Box<dyn PositionSubscription>>,
}

#[derive(Default)]
struct TrackerInner {
    state: TrackerState,
    session: Option<Session>,
    next_session_id: u64,
}

/// Turns pushed positions into progress and arrival events.
///
/// Subscriptions are always released outside the internal lock, and the sink
/// is never called while it is held, so a sink may call [`stop`](Self::stop)
/// or feed the source another position. Events raised from inside the sink
/// are delivered after it returns.
pub struct ProgressTracker {
    source: Arc<dyn PositionSource>,
    config: TrackerConfig,
    inner: Arc<Mutex<TrackerInner>>,
}

impl fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ProgressTracker")
            .field("config", &self.config)
            .field("state", &inner.state)
            .field(
                "destination",
                &inner.session.as_ref().map(|s| s.destination),
            )
            .finish()
    }
}

impl ProgressTracker {
    pub fn new(source: Arc<dyn PositionSource>) -> Self {
        Self::with_config(source, TrackerConfig::default())
    }

    pub fn with_config(source: Arc<dyn PositionSource>, config: TrackerConfig) -> Self {
        Self {
            source,
            config,
            inner: Arc::new(Mutex::new(TrackerInner::default())),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Begins navigating to `destination`.
    ///
    /// Any previous session is torn down first. Returns `false` if
    /// authorization is denied or the position subscription cannot be
    /// established; the tracker then has no session.
    pub fn start<F>(&self, destination: Coordinate, route: RouteSummary, sink: F) -> bool
    where
        F: FnMut(NavigationEvent) + Send + 'static,
    {
        if self.teardown() {
            debug!("Replaced previous navigation session");
        }

        if self.source.request_authorization() == Authorization::Denied {
            warn!("Position authorization denied, navigation not started");
            return false;
        }

        let (session_id, previous_state) = {
            let mut inner = self.inner.lock();
            inner.next_session_id += 1;
            let id = inner.next_session_id;
            let previous = inner.state;
            inner.session = Some(Session {
                id,
                destination,
                route,
                sink: SinkSlot::shared(Box::new(sink)),
                last_progress: None,
                subscription: None,
            });
            inner.state = TrackerState::Navigating;
            (id, previous)
        };

        let weak: Weak<Mutex<TrackerInner>> = Arc::downgrade(&self.inner);
        let config = self.config.clone();
        let callback: PositionCallback = Box::new(move |sample| {
            if let Some(inner) = weak.upgrade() {
                handle_sample(&inner, session_id, &config, sample);
            }
        });

        match self.source.watch(&self.config.watch, callback) {
            Ok(subscription) => {
                let orphan = {
                    let mut inner = self.inner.lock();
                    match inner.session.as_mut() {
                        Some(session) if session.id == session_id => {
                            session.subscription = Some(subscription);
                            None
                        }
                        // Arrived or stopped before the handle came back
                        _ => Some(subscription),
                    }
                };
                if let Some(mut subscription) = orphan {
                    subscription.remove();
                }

                info!(
                    session = session_id,
                    latitude = destination.latitude,
                    longitude = destination.longitude,
                    "Navigation started"
                );
                true
            }
            Err(e) => {
                {
                    let mut inner = self.inner.lock();
                    if matches!(inner.session.as_ref(), Some(s) if s.id == session_id) {
                        inner.session = None;
                        inner.state = previous_state;
                    }
                }
                warn!(error = %e, "Failed to start position updates");
                false
            }
        }
    }

    /// Ends the current session. Does nothing if there is none.
    pub fn stop(&self) {
        if self.teardown() {
            info!("Navigation stopped");
        }
    }

    pub fn state(&self) -> TrackerState {
        self.inner.lock().state
    }

    pub fn is_navigating(&self) -> bool {
        self.state() == TrackerState::Navigating
    }

    /// Most recent snapshot of the active session.
    pub fn last_progress(&self) -> Option<Progress> {
        self.inner
            .lock()
            .session
            .as_ref()
            .and_then(|s| s.last_progress.clone())
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.inner.lock().session.as_ref().map(|s| s.destination)
    }

    pub fn route(&self) -> Option<RouteSummary> {
        self.inner.lock().session.as_ref().map(|s| s.route.clone())
    }

    /// Clears the session and releases its subscription. Returns whether a
    /// session existed.
    fn teardown(&self) -> bool {
        let subscription = {
            let mut inner = self.inner.lock();
            match inner.session.take() {
                Some(session) => {
                    inner.state = TrackerState::Stopped;
                    session.subscription
                }
                None => return false,
            }
        };

        if let Some(mut subscription) = subscription {
            subscription.remove();
        }
        true
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn handle_sample(
    inner: &Mutex<TrackerInner>,
    session_id: u64,
    config: &TrackerConfig,
    sample: PositionSample,
) {
    let position = sample.coordinate();
    let mut guard = inner.lock();

    if guard.state != TrackerState::Navigating {
        return;
    }
    let (destination, sink) = match guard.session.as_ref() {
        Some(session) if session.id == session_id => {
            (session.destination, Arc::clone(&session.sink))
        }
        _ => return,
    };

    let distance_km = haversine_km(&position, &destination);

    if distance_km < config.arrival_threshold_km {
        guard.state = TrackerState::Arrived;
        let subscription = guard.session.take().and_then(|s| s.subscription);
        drop(guard);

        info!(session = session_id, distance_km, "Arrived at destination");
        emit(
            &sink,
            NavigationEvent::Arrived(Arrival {
                destination,
                position,
                distance_km,
            }),
        );

        if let Some(mut subscription) = subscription {
            subscription.remove();
        }
        return;
    }

    let progress = Progress {
        distance_remaining: distance_km,
        duration_remaining: config.duration_for(distance_km),
        current_step_index: 0,
        next_instruction: Some(PLACEHOLDER_INSTRUCTION.to_string()),
    };
    if let Some(session) = guard.session.as_mut() {
        session.last_progress = Some(progress.clone());
    }
    drop(guard);

    debug!(
        session = session_id,
        distance_km,
        duration_s = progress.duration_remaining,
        "Navigation progress"
    );
    emit(&sink, NavigationEvent::Progress(progress));
}

fn emit(slot: &SharedSink, event: NavigationEvent) {
    let mut sink = {
        let mut guard = slot.lock();
        guard.pending.push_back(event);
        match guard.sink.take() {
            Some(sink) => sink,
            // Already delivering further up the stack or on another thread
            None => return,
        }
    };

    loop {
        let next = {
            let mut guard = slot.lock();
            match guard.pending.pop_front() {
                Some(event) => event,
                None => {
                    guard.sink = Some(sink);
                    return;
                }
            }
        };
        sink(next);
    }
}
