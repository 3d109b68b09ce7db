//! In-process position source driven by explicit pushes.
//!
//! Used to replay recorded tracks and to script authorization and failure
//! cases. Samples are delivered immediately, without cadence filtering.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

use super::position::{
    Authorization, PositionCallback, PositionError, PositionSample, PositionSource,
    PositionSubscription, WatchOptions,
};

type SharedCallback = Arc<dyn Fn(PositionSample) + Send + Sync + 'static>;

#[derive(Default)]
struct ManualInner {
    denied: bool,
    fail_watch: bool,
    next_id: u64,
    watchers: BTreeMap<u64, SharedCallback>,
    last_options: Option<WatchOptions>,
    total_watches: usize,
}

/// A [`PositionSource`] that delivers whatever is pushed into it.
///
/// Clones share the same state, so a test can keep one handle while the
/// tracker owns another.
#[derive(Clone, Default)]
pub struct ManualPositionSource {
    inner: Arc<Mutex<ManualInner>>,
}

impl std::fmt::Debug for ManualPositionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ManualPositionSource")
            .field("denied", &inner.denied)
            .field("fail_watch", &inner.fail_watch)
            .field("watchers", &inner.watchers.len())
            .finish()
    }
}

impl ManualPositionSource {
    /// A source that grants authorization.
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that refuses authorization.
    pub fn denied() -> Self {
        let source = Self::new();
        source.set_denied(true);
        source
    }

    pub fn set_denied(&self, denied: bool) {
        self.inner.lock().denied = denied;
    }

    /// Make subsequent `watch` calls fail.
    pub fn set_fail_watch(&self, fail: bool) {
        self.inner.lock().fail_watch = fail;
    }

    /// Delivers a sample to every active subscriber. Returns how many received it.
    pub fn push(&self, sample: PositionSample) -> usize {
        // Callbacks may remove their own subscription, so call them unlocked.
        let watchers: Vec<SharedCallback> = self.inner.lock().watchers.values().cloned().collect();
        for callback in &watchers {
            callback(sample);
        }
        watchers.len()
    }

    pub fn push_position(&self, latitude: f64, longitude: f64) -> usize {
        self.push(PositionSample::new(latitude, longitude))
    }

    pub fn active_subscriptions(&self) -> usize {
        self.inner.lock().watchers.len()
    }

    /// Number of successful `watch` calls so far.
    pub fn total_subscriptions(&self) -> usize {
        self.inner.lock().total_watches
    }

    /// Options passed to the most recent successful `watch`.
    pub fn last_options(&self) -> Option<WatchOptions> {
        self.inner.lock().last_options.clone()
    }
}

impl PositionSource for ManualPositionSource {
    fn request_authorization(&self) -> Authorization {
        if self.inner.lock().denied {
            Authorization::Denied
        } else {
            Authorization::Granted
        }
    }

    fn watch(
        &self,
        options: &WatchOptions,
        callback: PositionCallback,
    ) -> Result<Box<dyn PositionSubscription>, PositionError> {
        let mut inner = self.inner.lock();
        if inner.denied {
            return Err(PositionError::AuthorizationDenied);
        }
        if inner.fail_watch {
            return Err(PositionError::SubscriptionFailed(
                "manual source configured to fail".to_string(),
            ));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        inner.watchers.insert(id, Arc::from(callback));
        inner.last_options = Some(options.clone());
        inner.total_watches += 1;
        debug!(id, "Manual position subscription added");

        Ok(Box::new(ManualSubscription {
            id,
            source: Some(Arc::downgrade(&self.inner)),
        }))
    }
}

struct ManualSubscription {
    id: u64,
    source: Option<Weak<Mutex<ManualInner>>>,
}

impl PositionSubscription for ManualSubscription {
    fn remove(&mut self) {
        if let Some(inner) = self.source.take().and_then(|w| w.upgrade()) {
            inner.lock().watchers.remove(&self.id);
            debug!(id = self.id, "Manual position subscription removed");
        }
    }
}

impl Drop for ManualSubscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_callback(counter: &Arc<AtomicUsize>) -> PositionCallback {
        let counter = Arc::clone(counter);
        Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_push_reaches_subscriber() {
        let source = ManualPositionSource::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let _sub = source
            .watch(&WatchOptions::default(), counting_callback(&counter))
            .unwrap();

        assert_eq!(source.push_position(6.5, 3.4), 1);
        assert_eq!(source.push_position(6.6, 3.4), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let source = ManualPositionSource::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let mut sub = source
            .watch(&WatchOptions::default(), counting_callback(&counter))
            .unwrap();
        assert_eq!(source.active_subscriptions(), 1);

        sub.remove();
        sub.remove();
        assert_eq!(source.active_subscriptions(), 0);
        assert_eq!(source.push_position(6.5, 3.4), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let source = ManualPositionSource::new();
        let counter = Arc::new(AtomicUsize::new(0));

        {
            let _sub = source
                .watch(&WatchOptions::default(), counting_callback(&counter))
                .unwrap();
            assert_eq!(source.active_subscriptions(), 1);
        }

        assert_eq!(source.active_subscriptions(), 0);
    }

    #[test]
    fn test_denied_source() {
        let source = ManualPositionSource::denied();
        assert_eq!(source.request_authorization(), Authorization::Denied);

        let counter = Arc::new(AtomicUsize::new(0));
        let result = source.watch(&WatchOptions::default(), counting_callback(&counter));
        assert!(matches!(result, Err(PositionError::AuthorizationDenied)));
    }

    #[test]
    fn test_failing_watch() {
        let source = ManualPositionSource::new();
        source.set_fail_watch(true);

        let counter = Arc::new(AtomicUsize::new(0));
        let result = source.watch(&WatchOptions::default(), counting_callback(&counter));
        assert!(matches!(result, Err(PositionError::SubscriptionFailed(_))));
        assert_eq!(source.total_subscriptions(), 0);
    }

    #[test]
    fn test_records_watch_options() {
        let source = ManualPositionSource::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let _sub = source
            .watch(&WatchOptions::unthrottled(), counting_callback(&counter))
            .unwrap();

        assert_eq!(source.last_options(), Some(WatchOptions::unthrottled()));
    }

    #[test]
    fn test_callback_can_remove_own_subscription() {
        let source = ManualPositionSource::new();
        let slot: Arc<Mutex<Option<Box<dyn PositionSubscription>>>> = Arc::new(Mutex::new(None));

        let slot_in_callback = Arc::clone(&slot);
        let sub = source
            .watch(
                &WatchOptions::default(),
                Box::new(move |_| {
                    if let Some(mut sub) = slot_in_callback.lock().take() {
                        sub.remove();
                    }
                }),
            )
            .unwrap();
        *slot.lock() = Some(sub);

        assert_eq!(source.push_position(6.5, 3.4), 1);
        assert_eq!(source.active_subscriptions(), 0);
    }
}
