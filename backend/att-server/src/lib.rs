pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod service;

#[cfg(test)]
mod tests;

pub use api::{
    attendance::{
        attendance::{person_attendance, recent_attendance, record_attendance, attendance_stats},
        limit_query::LimitQuery,
        records_response::RecordsResponse,
        stats_response::StatsResponse,
    },
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
    faces::{
        face_list_response::FaceListResponse,
        faces::{list_faces, upload_faces},
        upload_response::UploadResponse,
    },
    stream::{
        stream::{attendance_stream, stream_stats},
        stream_stats_response::StreamStatsResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use service::attendance_service::AttendanceService;
