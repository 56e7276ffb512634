use crate::AttendanceStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single attendance entry, persisted and streamed to subscribers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub name: String,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(name: String, confidence: f64, status: AttendanceStatus) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            confidence,
            timestamp: Utc::now(),
            status,
        }
    }
}
