//! Integration tests for the attendance SSE stream

mod common;

use crate::common::{
    Part, Recognition, StubRecognizer, body_json, create_test_app_state,
    create_test_app_state_with, get, multipart_request, recognized,
};

use att_core::{AttendanceEvent, AttendanceRecord, AttendanceStatus};
use att_server::build_router;

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Next data frame of an SSE body as text
async fn next_chunk(body: &mut Body) -> Option<String> {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), body.frame())
            .await
            .expect("timed out waiting for SSE frame")?
            .unwrap();
        if let Ok(data) = frame.into_data() {
            return Some(String::from_utf8(data.to_vec()).unwrap());
        }
    }
}

#[tokio::test]
async fn test_stream_responds_with_event_stream_content_type() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(get("/api/attendance/stream"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/event-stream"));
}

#[tokio::test]
async fn test_broadcast_record_arrives_as_attendance_event() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(get("/api/attendance/stream"))
        .await
        .unwrap();
    let mut body = response.into_body();

    let record = AttendanceRecord::new("alice".into(), 0.91, AttendanceStatus::Authorized);
    let report = state
        .registry
        .broadcast(&AttendanceEvent::attendance(record.clone()))
        .await;
    assert_eq!(report.delivered, 1);

    let chunk = next_chunk(&mut body).await.unwrap();
    assert!(chunk.contains("event: attendance\n"));

    let data = chunk
        .lines()
        .find_map(|line| line.strip_prefix("data: "))
        .unwrap();
    let received: AttendanceRecord = serde_json::from_str(data).unwrap();
    assert_eq!(received, record);
}

#[tokio::test]
async fn test_recorded_attendance_is_pushed_to_stream() {
    let stub = Arc::new(StubRecognizer::recognizing(Recognition::Result(
        recognized("bob", 0.8),
    )));
    let state = create_test_app_state_with(stub).await;
    let app = build_router(state);

    let stream = app
        .clone()
        .oneshot(get("/api/attendance/stream"))
        .await
        .unwrap();
    let mut body = stream.into_body();

    let response = app
        .oneshot(multipart_request(
            "/api/attendance",
            &[Part::File("image", "frame.jpg", b"fake-jpeg-payload")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let chunk = next_chunk(&mut body).await.unwrap();
    assert!(chunk.contains("\"name\":\"bob\""));
    assert!(chunk.contains("\"status\":\"authorized\""));
}

#[tokio::test]
async fn test_stream_stats_counts_open_streams() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let first = app
        .clone()
        .oneshot(get("/api/attendance/stream"))
        .await
        .unwrap();
    let second = app
        .clone()
        .oneshot(get("/api/attendance/stream"))
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/attendance/stream/stats"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["stats"]["total_clients"], 2);
    assert_eq!(json["stats"]["active_clients"], 2);

    drop(first);
    drop(second);
}

#[tokio::test]
async fn test_disconnected_stream_is_unregistered() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(get("/api/attendance/stream"))
        .await
        .unwrap();
    assert_eq!(state.registry.total_count().await, 1);

    drop(response);

    let mut remaining = 1;
    for _ in 0..50 {
        remaining = state.registry.total_count().await;
        if remaining == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_close_all_ends_open_streams() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(get("/api/attendance/stream"))
        .await
        .unwrap();
    let mut body = response.into_body();

    assert_eq!(state.registry.close_all().await, 1);

    assert_eq!(next_chunk(&mut body).await, None);
}

#[tokio::test]
async fn test_stream_after_shutdown_returns_503() {
    let state = create_test_app_state().await;
    state.registry.close_all().await;
    let app = build_router(state);

    let response = app
        .oneshot(get("/api/attendance/stream"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
}
