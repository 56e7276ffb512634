mod property_tests;

use crate::SubscriberRegistry;

use att_core::{AttendanceEvent, AttendanceRecord, AttendanceStatus};

use std::time::Duration;

pub(crate) fn event_for(name: &str) -> AttendanceEvent {
    AttendanceEvent::attendance(AttendanceRecord::new(
        name.to_string(),
        0.9,
        AttendanceStatus::Authorized,
    ))
}

/// Poll until the registry holds `expected` subscribers (drop cleanup is spawned)
pub(crate) async fn wait_for_total(registry: &SubscriberRegistry, expected: usize) -> bool {
    for _ in 0..100 {
        if registry.total_count().await == expected {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    false
}
