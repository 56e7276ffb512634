pub mod broadcast_report;
pub mod error;
pub mod hub_stats;
pub mod metrics;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod subscriber_id;
pub mod subscriber_registry;
pub mod subscription;
pub mod sweeper;

pub use broadcast_report::BroadcastReport;
pub use error::{HubError, Result};
pub use hub_stats::HubStats;
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use subscriber_id::SubscriberId;
pub use subscriber_registry::SubscriberRegistry;
pub use subscription::Subscription;
pub use sweeper::spawn_sweeper;

#[cfg(test)]
mod tests;
