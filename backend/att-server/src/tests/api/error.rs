use crate::ApiError;

use att_core::CoreError;
use att_face::FaceClientError;
use att_hub::HubError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Person not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Person not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("Image is required", "image")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Image is required");
    assert_eq!(json["error"]["field"], "image");
}

#[tokio::test]
async fn test_payload_too_large_returns_413() {
    let error = ApiError::payload_too_large("File big.jpg exceeds maximum size of 5MB");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
    assert_eq!(
        json["error"]["message"],
        "File big.jpg exceeds maximum size of 5MB"
    );
}

#[tokio::test]
async fn test_face_status_error_maps_to_502_with_upstream_body() {
    let error: ApiError = FaceClientError::status(500, "model not loaded\n").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
    assert_eq!(
        json["error"]["message"],
        "Face service returned 500: model not loaded"
    );
}

#[tokio::test]
async fn test_core_validation_error_keeps_field() {
    let core = att_core::validate_person_name("   ").unwrap_err();
    assert!(matches!(core, CoreError::Validation { .. }));

    let (status, json) = body_json(core.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "Name is required");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_closed_registry_maps_to_503() {
    let (status, json) = body_json(HubError::closed().into()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error: ApiError = att_db::DbError::Corrupt {
        id: "0b5e".into(),
        message: "invalid status 'secret'".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}
