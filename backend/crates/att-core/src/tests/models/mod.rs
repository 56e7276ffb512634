mod attendance_response;
mod attendance_status;
mod door_action;
