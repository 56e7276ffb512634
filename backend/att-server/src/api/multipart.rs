//! Multipart helpers shared by the upload handlers

use crate::{ApiError, ApiResult};

use att_face::FaceImage;

use axum::extract::multipart::Field;
use bytes::BytesMut;

/// Filename used when a part carries none
const DEFAULT_FILENAME: &str = "image.jpg";

/// Read a file part into memory, rejecting it as soon as it grows past
/// `max_size` bytes.
pub async fn read_image(
    mut field: Field<'_>,
    max_size: usize,
    max_size_label: &str,
) -> ApiResult<FaceImage> {
    let filename = field
        .file_name()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FILENAME)
        .to_string();

    let mut data = BytesMut::new();
    while let Some(chunk) = field.chunk().await? {
        if data.len() + chunk.len() > max_size {
            return Err(ApiError::payload_too_large(format!(
                "File {} exceeds maximum size of {}",
                filename, max_size_label
            )));
        }
        data.extend_from_slice(&chunk);
    }

    Ok(FaceImage::new(data.freeze(), filename))
}

/// Read a text part, trimming surrounding whitespace
pub async fn read_text(field: Field<'_>) -> ApiResult<String> {
    Ok(field.text().await?.trim().to_string())
}
