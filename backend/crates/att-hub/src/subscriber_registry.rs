use crate::{
    BroadcastReport, HubError, HubStats, Metrics, Result as HubErrorResult, SubscriberId,
    Subscription,
};

use att_config::StreamConfig;
use att_core::AttendanceEvent;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{RwLock, mpsc};

/// Registry of live stream subscribers.
///
/// Each subscriber owns a bounded channel. Broadcasting never waits: an event
/// that does not fit in a subscriber's buffer is dropped for that subscriber.
pub struct SubscriberRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    buffer: usize,
    metrics: Metrics,
}

struct RegistryInner {
    subscribers: HashMap<SubscriberId, Subscriber>,
    /// Set by close_all; no new subscribers after that
    closed: bool,
}

struct Subscriber {
    sender: mpsc::Sender<AttendanceEvent>,
    active: Arc<AtomicBool>,
    connected_at: DateTime<Utc>,
}

impl Subscriber {
    fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire) && !self.sender.is_closed()
    }
}

impl SubscriberRegistry {
    /// `buffer` is the per-subscriber channel capacity (at least 1)
    pub fn new(buffer: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                subscribers: HashMap::new(),
                closed: false,
            })),
            buffer: buffer.max(1),
            metrics: Metrics::new(),
        }
    }

    pub fn from_config(config: &StreamConfig) -> Self {
        Self::new(config.subscriber_buffer)
    }

    pub fn buffer(&self) -> usize {
        self.buffer
    }

    /// Register a new subscriber. Fails once the registry has been closed.
    pub async fn subscribe(&self) -> HubErrorResult<Subscription> {
        let mut inner = self.inner.write().await;
        if inner.closed {
            return Err(HubError::closed());
        }

        let (sender, receiver) = mpsc::channel(self.buffer);
        let active = Arc::new(AtomicBool::new(true));
        let id = vacant_id(&inner.subscribers, SubscriberId::new);

        inner.subscribers.insert(
            id.clone(),
            Subscriber {
                sender,
                active: Arc::clone(&active),
                connected_at: Utc::now(),
            },
        );
        self.metrics.subscriber_connected();
        info!(
            "Subscriber {} connected (total: {})",
            id,
            inner.subscribers.len()
        );

        Ok(Subscription::new(id, receiver, active, self.clone()))
    }

    /// Remove a subscriber, closing its channel. Returns false if it was not registered.
    pub async fn unsubscribe(&self, id: &SubscriberId) -> bool {
        let mut inner = self.inner.write().await;

        match inner.subscribers.remove(id) {
            Some(subscriber) => {
                subscriber.active.store(false, Ordering::Release);
                self.metrics.subscriber_disconnected();
                info!(
                    "Subscriber {} disconnected after {}s (remaining: {})",
                    id,
                    (Utc::now() - subscriber.connected_at).num_seconds(),
                    inner.subscribers.len()
                );
                true
            }
            None => {
                debug!("Unsubscribe for unknown subscriber {}", id);
                false
            }
        }
    }

    /// Offer `event` to every active subscriber without waiting.
    pub async fn broadcast(&self, event: &AttendanceEvent) -> BroadcastReport {
        let inner = self.inner.read().await;
        let mut report = BroadcastReport {
            total: inner.subscribers.len(),
            ..Default::default()
        };

        for (id, subscriber) in inner.subscribers.iter() {
            if !subscriber.active.load(Ordering::Acquire) {
                report.dropped += 1;
                continue;
            }

            match subscriber.sender.try_send(event.clone()) {
                Ok(()) => report.delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!("Subscriber {} buffer full, event dropped", id);
                    report.dropped += 1;
                }
                Err(TrySendError::Closed(_)) => {
                    // Receiver went away; the sweep removes it.
                    subscriber.active.store(false, Ordering::Release);
                    debug!("Subscriber {} receiver closed, marked inactive", id);
                    report.dropped += 1;
                }
            }
        }

        if report.total > 0 {
            info!(
                "Broadcast to {}/{} subscribers",
                report.delivered, report.total
            );
        }
        self.metrics
            .broadcast_published(report.delivered, report.dropped);

        report
    }

    /// Remove subscribers that are inactive or whose receiver is gone.
    /// Returns how many were removed.
    pub async fn sweep(&self) -> usize {
        let mut inner = self.inner.write().await;
        let before = inner.subscribers.len();

        inner.subscribers.retain(|id, subscriber| {
            let keep = subscriber.is_active();
            if !keep {
                debug!("Sweeping inactive subscriber {}", id);
            }
            keep
        });

        let removed = before - inner.subscribers.len();
        if removed > 0 {
            for _ in 0..removed {
                self.metrics.subscriber_disconnected();
            }
            self.metrics.sweep_removed(removed);
            info!(
                "Sweep removed {} stale subscriber(s) ({} -> {})",
                removed,
                before,
                inner.subscribers.len()
            );
        }

        removed
    }

    pub async fn stats(&self) -> HubStats {
        let inner = self.inner.read().await;

        HubStats {
            total_clients: inner.subscribers.len(),
            active_clients: inner
                .subscribers
                .values()
                .filter(|subscriber| subscriber.is_active())
                .count(),
        }
    }

    /// Close every channel and refuse new subscribers. Returns how many were closed.
    pub async fn close_all(&self) -> usize {
        let mut inner = self.inner.write().await;
        inner.closed = true;

        let closed = inner.subscribers.len();
        for (_, subscriber) in inner.subscribers.drain() {
            subscriber.active.store(false, Ordering::Release);
            self.metrics.subscriber_disconnected();
        }

        info!("Closed {} subscriber(s) for shutdown", closed);
        closed
    }

    pub async fn is_closed(&self) -> bool {
        self.inner.read().await.closed
    }

    pub async fn total_count(&self) -> usize {
        self.inner.read().await.subscribers.len()
    }
}

impl Clone for SubscriberRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            buffer: self.buffer,
            metrics: self.metrics.clone(),
        }
    }
}

/// Draw ids from `next` until one is not already registered.
pub(crate) fn vacant_id<V>(
    subscribers: &HashMap<SubscriberId, V>,
    mut next: impl FnMut() -> SubscriberId,
) -> SubscriberId {
    loop {
        let id = next();
        if !subscribers.contains_key(&id) {
            return id;
        }
        warn!("Subscriber id {} already registered, drawing another", id);
    }
}
