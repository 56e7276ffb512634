use att_core::AttendanceRecord;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub success: bool,
    pub count: usize,
    pub records: Vec<AttendanceRecord>,
}

impl From<Vec<AttendanceRecord>> for RecordsResponse {
    fn from(records: Vec<AttendanceRecord>) -> Self {
        Self {
            success: true,
            count: records.len(),
            records,
        }
    }
}
