//! Bridge from a tokio broadcast feed onto the push-based position interface.

use tokio::runtime::Handle;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::position::{
    Authorization, CadenceFilter, PositionCallback, PositionError, PositionSample,
    PositionSource, PositionSubscription, WatchOptions,
};

/// Default channel capacity for [`BroadcastPositionSource::default`].
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// A [`PositionSource`] fed by a `tokio::sync::broadcast` channel.
///
/// Each `watch` spawns a forwarding task on the current runtime that applies
/// the requested cadence and invokes the callback. Removing the subscription
/// cancels the task. Calling `watch` outside a runtime fails.
///
/// # Example
///
/// ```ignore
/// let source = BroadcastPositionSource::new(16);
/// let publisher = source.sender();
/// publisher.send(PositionSample::new(6.5244, 3.3792))?;
/// ```
#[derive(Debug, Clone)]
pub struct BroadcastPositionSource {
    tx: broadcast::Sender<PositionSample>,
}

impl Default for BroadcastPositionSource {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl BroadcastPositionSource {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Wrap an existing sender.
    pub fn from_sender(tx: broadcast::Sender<PositionSample>) -> Self {
        Self { tx }
    }

    /// Sender for publishing samples into this source.
    pub fn sender(&self) -> broadcast::Sender<PositionSample> {
        self.tx.clone()
    }

    /// Publish a sample. Returns the number of live receivers.
    pub fn publish(&self, sample: PositionSample) -> usize {
        self.tx.send(sample).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl PositionSource for BroadcastPositionSource {
    fn request_authorization(&self) -> Authorization {
        Authorization::Granted
    }

    fn watch(
        &self,
        options: &WatchOptions,
        callback: PositionCallback,
    ) -> Result<Box<dyn PositionSubscription>, PositionError> {
        let handle = Handle::try_current()
            .map_err(|e| PositionError::SubscriptionFailed(e.to_string()))?;

        let mut rx = self.tx.subscribe();
        let mut cadence = CadenceFilter::new(options);
        let token = CancellationToken::new();
        let task_token = token.clone();

        handle.spawn(async move {
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => {
                        debug!("Position forwarding cancelled");
                        break;
                    }
                    result = rx.recv() => {
                        match result {
                            Ok(sample) => {
                                if cadence.accept(&sample) {
                                    callback(sample);
                                }
                            }
                            Err(RecvError::Lagged(n)) => {
                                warn!(skipped = n, "Position feed lagged");
                            }
                            Err(RecvError::Closed) => {
                                debug!("Position feed closed");
                                break;
                            }
                        }
                    }
                }
            }
        });

        debug!("Position forwarding task started");
        Ok(Box::new(BroadcastSubscription { token }))
    }
}

struct BroadcastSubscription {
    token: CancellationToken,
}

impl PositionSubscription for BroadcastSubscription {
    fn remove(&mut self) {
        self.token.cancel();
    }
}

impl Drop for BroadcastSubscription {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
