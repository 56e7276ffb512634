pub mod attendance_event;
pub mod attendance_record;
pub mod attendance_response;
pub mod attendance_stats;
pub mod attendance_status;
pub mod door_action;
pub mod face;
