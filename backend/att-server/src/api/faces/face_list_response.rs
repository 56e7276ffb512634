use att_core::Face;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct FaceListResponse {
    pub success: bool,
    pub count: usize,
    pub faces: Vec<Face>,
}

impl From<Vec<Face>> for FaceListResponse {
    fn from(faces: Vec<Face>) -> Self {
        Self {
            success: true,
            count: faces.len(),
            faces,
        }
    }
}
