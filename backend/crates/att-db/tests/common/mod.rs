#![allow(dead_code)]

use att_core::{AttendanceRecord, AttendanceStatus};

use chrono::{Duration, Utc};
use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    att_db::open_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Record stamped `seconds_offset` seconds from now
pub fn record_at(name: &str, status: AttendanceStatus, seconds_offset: i64) -> AttendanceRecord {
    let mut record = AttendanceRecord::new(name.to_string(), 0.9, status);
    record.timestamp = Utc::now() + Duration::seconds(seconds_offset);
    record
}

pub fn authorized_at(name: &str, seconds_offset: i64) -> AttendanceRecord {
    record_at(name, AttendanceStatus::Authorized, seconds_offset)
}

pub fn unknown_at(seconds_offset: i64) -> AttendanceRecord {
    record_at(att_core::UNKNOWN_PERSON, AttendanceStatus::Unauthorized, seconds_offset)
}
