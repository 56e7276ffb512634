use crate::{ShutdownGuard, SubscriberRegistry};

use std::time::Duration;

use log::info;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Periodically sweep inactive subscribers until shutdown.
pub fn spawn_sweeper(
    registry: SubscriberRegistry,
    period: Duration,
    mut shutdown: ShutdownGuard,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);

        loop {
            tokio::select! {
                _ = shutdown.wait() => {
                    info!("Subscriber sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    registry.sweep().await;
                }
            }
        }
    })
}
