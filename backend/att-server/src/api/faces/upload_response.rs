use serde::{Deserialize, Serialize};

/// Body of a successful enrollment
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub name: String,
    pub images_added: usize,
}

impl UploadResponse {
    pub fn new(name: String, images_added: usize) -> Self {
        Self {
            success: true,
            message: format!("Successfully added {} image(s) for {}", images_added, name),
            name,
            images_added,
        }
    }
}
