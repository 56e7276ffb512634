use crate::{AttendanceStatus, CoreError};

use std::str::FromStr;

#[test]
fn test_attendance_status_as_str() {
    assert_eq!(AttendanceStatus::Authorized.as_str(), "authorized");
    assert_eq!(AttendanceStatus::Unauthorized.as_str(), "unauthorized");
}

#[test]
fn test_attendance_status_from_str() {
    assert_eq!(
        AttendanceStatus::from_str("authorized").unwrap(),
        AttendanceStatus::Authorized
    );
    assert_eq!(
        AttendanceStatus::from_str("unauthorized").unwrap(),
        AttendanceStatus::Unauthorized
    );
}

#[test]
fn test_attendance_status_from_str_rejects_unknown_value() {
    let result = AttendanceStatus::from_str("Authorized");

    assert!(matches!(
        result,
        Err(CoreError::InvalidAttendanceStatus { ref value, .. }) if value == "Authorized"
    ));
}

#[test]
fn test_attendance_status_serializes_lowercase() {
    let json = serde_json::to_string(&AttendanceStatus::Unauthorized).unwrap();
    assert_eq!(json, "\"unauthorized\"");
}
