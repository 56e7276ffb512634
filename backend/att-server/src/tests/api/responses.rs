use crate::{FaceListResponse, RecordsResponse, UploadResponse};

use att_core::{AttendanceRecord, AttendanceStatus, Face};

use googletest::prelude::*;

#[gtest]
fn given_two_faces_when_building_list_response_then_count_matches() {
    let faces = vec![
        Face {
            name: "alice".into(),
            images: 3,
        },
        Face {
            name: "bob".into(),
            images: 1,
        },
    ];

    let response = FaceListResponse::from(faces);

    expect_that!(response.success, eq(true));
    expect_that!(response.count, eq(2));
    expect_that!(response.faces[1].name.as_str(), eq("bob"));
}

#[gtest]
fn given_no_records_when_building_records_response_then_count_is_zero() {
    let response = RecordsResponse::from(Vec::new());

    expect_that!(response.success, eq(true));
    expect_that!(response.count, eq(0));
    expect_that!(response.records, is_empty());
}

#[gtest]
fn given_records_when_serializing_then_shape_is_success_count_records() {
    let record = AttendanceRecord::new("alice".into(), 0.92, AttendanceStatus::Authorized);

    let json = serde_json::to_value(RecordsResponse::from(vec![record])).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 1);
    assert_eq!(json["records"][0]["name"], "alice");
    assert_eq!(json["records"][0]["status"], "authorized");
}

#[gtest]
fn given_upload_when_building_response_then_message_names_person() {
    let response = UploadResponse::new("alice".into(), 2);

    expect_that!(
        response.message.as_str(),
        eq("Successfully added 2 image(s) for alice")
    );
    expect_that!(response.images_added, eq(2));
}
