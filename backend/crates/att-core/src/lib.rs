pub mod decision;
pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use decision::{Decision, decide};
pub use error::{CoreError, Result as CoreResult};
pub use models::attendance_event::{ATTENDANCE_EVENT, AttendanceEvent};
pub use models::attendance_record::AttendanceRecord;
pub use models::attendance_response::AttendanceResponse;
pub use models::attendance_stats::AttendanceStats;
pub use models::attendance_status::AttendanceStatus;
pub use models::door_action::DoorAction;
pub use models::face::{Face, FaceLocation, RecognitionResult, RecognizedFace, UNKNOWN_PERSON};
pub use validation::{MAX_PERSON_NAME_LENGTH, validate_person_name};
