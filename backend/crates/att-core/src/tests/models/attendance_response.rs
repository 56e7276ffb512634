use crate::{AttendanceResponse, DoorAction};

use googletest::prelude::*;

#[test]
fn given_recognition_failure_when_serialized_then_name_and_confidence_omitted() {
    // Given
    let response = AttendanceResponse::recognition_failed();

    // When
    let json = serde_json::to_value(&response).unwrap();

    // Then
    assert_that!(json["success"].as_bool(), some(eq(false)));
    assert_that!(json["action"].as_str(), some(eq("keep_closed")));
    assert_that!(json.get("name"), none());
    assert_that!(json.get("confidence"), none());
}

#[test]
fn given_no_face_response_then_success_but_not_authorized() {
    let response = AttendanceResponse::no_face();

    assert_that!(response.success, eq(true));
    assert_that!(response.authorized, eq(false));
    assert_that!(response.action, eq(DoorAction::KeepClosed));
    assert_that!(response.message.as_str(), eq("No face detected"));
}
