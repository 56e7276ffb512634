use crate::{SubscriberId, SubscriberRegistry};

use att_core::AttendanceEvent;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;

/// Receiving end of a subscriber channel.
///
/// Dropping it marks the subscriber inactive and removes it from the
/// registry, so a disconnected stream never lingers.
pub struct Subscription {
    id: SubscriberId,
    receiver: mpsc::Receiver<AttendanceEvent>,
    active: Arc<AtomicBool>,
    registry: SubscriberRegistry,
}

impl Subscription {
    pub(crate) fn new(
        id: SubscriberId,
        receiver: mpsc::Receiver<AttendanceEvent>,
        active: Arc<AtomicBool>,
        registry: SubscriberRegistry,
    ) -> Self {
        Self {
            id,
            receiver,
            active,
            registry,
        }
    }

    pub fn id(&self) -> &SubscriberId {
        &self.id
    }

    /// Next event, or None once the channel was closed by the registry
    pub async fn recv(&mut self) -> Option<AttendanceEvent> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<AttendanceEvent> {
        self.receiver.try_recv().ok()
    }

    #[cfg(test)]
    pub(crate) fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);

        // Without a runtime the sweep picks it up instead.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let registry = self.registry.clone();
            let id = self.id.clone();
            handle.spawn(async move {
                registry.unsubscribe(&id).await;
            });
        }
    }
}
