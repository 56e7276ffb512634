use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    pub total: i64,
    pub authorized: i64,
    pub unauthorized: i64,
    /// Distinct names among authorized records
    pub unique_people: i64,
}
