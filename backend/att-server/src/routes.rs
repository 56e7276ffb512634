use crate::{
    AppState, attendance_stats, attendance_stream, health, list_faces, middleware,
    person_attendance, recent_attendance, record_attendance, stream_stats, upload_faces,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.upload.max_memory;

    Router::new()
        // Faces
        .route("/api/faces", get(list_faces))
        .route("/api/faces/upload", post(upload_faces))
        // Attendance
        .route("/api/attendance", post(record_attendance))
        .route("/api/attendance/stream", get(attendance_stream))
        .route("/api/attendance/stream/stats", get(stream_stats))
        .route("/api/attendance/recent", get(recent_attendance))
        .route("/api/attendance/person/{name}", get(person_attendance))
        .route("/api/attendance/stats", get(attendance_stats))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(health::metrics))
        // Add shared state
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(axum::middleware::from_fn(middleware::log_requests))
}
