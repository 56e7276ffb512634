//! Face enrollment REST API handlers
//!
//! Thin proxies to the recognition service.

use crate::api::multipart::{read_image, read_text};
use crate::{ApiError, ApiResult, AppState, FaceListResponse, UploadResponse};

use att_core::validate_person_name;

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use log::info;

/// GET /api/faces
pub async fn list_faces(State(state): State<AppState>) -> ApiResult<Json<FaceListResponse>> {
    let faces = state.recognizer.list_faces().await?;
    Ok(Json(FaceListResponse::from(faces)))
}

/// POST /api/faces/upload
///
/// Multipart form with a `name` field and one or more `images` files.
/// Every file is checked against the upload limit before anything is sent
/// upstream.
pub async fn upload_faces(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    let label = state.upload.max_upload_size_label();
    let mut name: Option<String> = None;
    let mut images = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("name") => name = Some(read_text(field).await?),
            Some("images") => {
                images.push(read_image(field, state.upload.max_upload_size, &label).await?);
            }
            _ => {}
        }
    }

    let name = validate_person_name(name.as_deref().unwrap_or_default())?;

    if images.is_empty() {
        return Err(ApiError::validation(
            "At least one image is required",
            "images",
        ));
    }

    let images_added = images.len();
    state.recognizer.add_face(&name, images).await?;
    info!("Enrolled {} image(s) for {}", images_added, name);

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse::new(name, images_added)),
    ))
}
