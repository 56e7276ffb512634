use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Service identity and version
pub async fn health() -> Response {
    let health = json!({
        "status": "ok",
        "service": "Attendance API",
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe
///
/// Ready when the database answers and the recognition service reports
/// healthy.
pub async fn readiness(State(state): State<AppState>) -> Response {
    let database = sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .is_ok();
    let face_api = state.recognizer.health().await;

    let status = if database && face_api {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let readiness = if status == StatusCode::OK {
        "ready"
    } else {
        "not_ready"
    };

    let body = json!({
        "status": readiness,
        "components": {
            "database": component(database),
            "face_api": component(face_api),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(body)).into_response()
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics exporter not installed").into_response(),
    }
}

fn component(healthy: bool) -> &'static str {
    if healthy { "operational" } else { "unavailable" }
}
