use metrics::{counter, gauge};

/// Metrics collector for the subscriber hub
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "att_hub" }
    }

    pub fn subscriber_connected(&self) {
        counter!(format!("{}.subscribers.connected", self.prefix)).increment(1);
        gauge!(format!("{}.subscribers.active", self.prefix)).increment(1.0);
    }

    pub fn subscriber_disconnected(&self) {
        counter!(format!("{}.subscribers.disconnected", self.prefix)).increment(1);
        gauge!(format!("{}.subscribers.active", self.prefix)).decrement(1.0);
    }

    pub fn broadcast_published(&self, delivered: usize, dropped: usize) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
        counter!(format!("{}.events.delivered", self.prefix)).increment(delivered as u64);
        counter!(format!("{}.events.dropped", self.prefix)).increment(dropped as u64);
    }

    pub fn sweep_removed(&self, removed: usize) {
        counter!(format!("{}.sweep.removed", self.prefix)).increment(removed as u64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
