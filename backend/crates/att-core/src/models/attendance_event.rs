use crate::AttendanceRecord;

use serde::{Deserialize, Serialize};

/// SSE event name used for attendance records
pub const ATTENDANCE_EVENT: &str = "attendance";

/// A message pushed to stream subscribers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    pub event: String,
    pub data: AttendanceRecord,
}

impl AttendanceEvent {
    pub fn attendance(record: AttendanceRecord) -> Self {
        Self {
            event: String::from(ATTENDANCE_EVENT),
            data: record,
        }
    }
}
