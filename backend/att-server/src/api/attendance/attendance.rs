//! Attendance REST API handlers

use crate::api::multipart::read_image;
use crate::{ApiError, ApiResult, AppState, LimitQuery, RecordsResponse, StatsResponse};

use att_core::AttendanceResponse;
use att_db::AttendanceRepository;

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/attendance
///
/// A device submits one captured frame in the `image` field. Once the image
/// is read the answer is always 200; recognition problems are reported in
/// the body so the device keeps the door closed.
pub async fn record_attendance(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<AttendanceResponse>> {
    let label = state.upload.max_upload_size_label();
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            image = Some(read_image(field, state.upload.max_upload_size, &label).await?);
            break;
        }
    }

    let image = image
        .filter(|image| !image.is_empty())
        .ok_or_else(|| ApiError::validation("Image is required", "image"))?;

    let response = state.attendance_service().record(image).await;
    Ok(Json(response))
}

/// GET /api/attendance/recent?limit=N
pub async fn recent_attendance(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<RecordsResponse>> {
    let limit = state.attendance.resolve_limit(query.limit.as_deref());
    let records = AttendanceRepository::find_recent(&state.pool, limit).await?;

    Ok(Json(RecordsResponse::from(records)))
}

/// GET /api/attendance/person/{name}?limit=N
pub async fn person_attendance(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<RecordsResponse>> {
    let limit = state.attendance.resolve_limit(query.limit.as_deref());
    let records = AttendanceRepository::find_by_name(&state.pool, &name, limit).await?;

    Ok(Json(RecordsResponse::from(records)))
}

/// GET /api/attendance/stats
pub async fn attendance_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let stats = AttendanceRepository::stats(&state.pool).await?;

    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
