use crate::tests::event_for;
use crate::{SubscriberId, SubscriberRegistry};

use std::collections::HashSet;

use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

// =========================================================================
// Property-Based Tests - Broadcast accounting
// =========================================================================

proptest! {
    #[test]
    fn given_any_buffer_and_burst_when_broadcast_then_delivered_plus_dropped_is_total(
        buffer in 1usize..8,
        subscribers in 0usize..6,
        events in 1usize..20,
    ) {
        let rt = runtime();
        rt.block_on(async {
            let registry = SubscriberRegistry::new(buffer);
            let mut subs = Vec::new();
            for _ in 0..subscribers {
                subs.push(registry.subscribe().await.unwrap());
            }

            for i in 0..events {
                let report = registry.broadcast(&event_for(&format!("p{}", i))).await;
                prop_assert_eq!(report.delivered + report.dropped, report.total);
                prop_assert_eq!(report.total, subscribers);
            }

            // Nobody reads, so each subscriber holds exactly min(buffer, events)
            for sub in subs.iter_mut() {
                let mut received = 0;
                while sub.try_recv().is_some() {
                    received += 1;
                }
                prop_assert_eq!(received, buffer.min(events));
            }
            Ok(())
        })?;
    }

    #[test]
    fn given_events_within_buffer_when_broadcast_then_order_preserved(
        names in proptest::collection::vec("[a-z]{1,8}", 1..10),
    ) {
        let rt = runtime();
        rt.block_on(async {
            let registry = SubscriberRegistry::new(names.len());
            let mut sub = registry.subscribe().await.unwrap();

            for name in &names {
                registry.broadcast(&event_for(name)).await;
            }

            for name in &names {
                let event = sub.try_recv();
                prop_assert_eq!(event.map(|e| e.data.name), Some(name.clone()));
            }
            Ok(())
        })?;
    }

    #[test]
    fn given_subscribe_unsubscribe_sequence_when_done_then_count_matches(
        ops in proptest::collection::vec(any::<bool>(), 1..40),
    ) {
        let rt = runtime();
        rt.block_on(async {
            let registry = SubscriberRegistry::new(4);
            let mut held = Vec::new();

            for subscribe in ops {
                if subscribe || held.is_empty() {
                    held.push(registry.subscribe().await.unwrap());
                } else {
                    let sub = held.remove(0);
                    prop_assert!(registry.unsubscribe(sub.id()).await);
                    // Drop after explicit unsubscribe must be a no-op
                    drop(sub);
                }
            }

            // Let spawned drop cleanups run
            tokio::task::yield_now().await;
            prop_assert_eq!(registry.total_count().await, held.len());
            Ok(())
        })?;
    }
}

// =========================================================================
// Unit Tests - Subscriber ids
// =========================================================================

#[test]
fn given_many_ids_when_generated_then_short_hex_and_unique() {
    let ids: HashSet<SubscriberId> = (0..200).map(|_| SubscriberId::new()).collect();

    assert_eq!(ids.len(), 200);
    for id in &ids {
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
