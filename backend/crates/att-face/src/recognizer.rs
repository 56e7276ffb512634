use crate::{FaceClientResult, FaceImage};

use att_core::{Face, RecognitionResult};

use async_trait::async_trait;

/// Operations the gateway needs from a face recognition backend.
///
/// [`crate::FaceRecognitionClient`] is the HTTP implementation.
#[async_trait]
pub trait FaceRecognizer: Send + Sync {
    /// Every enrolled person with their image count
    async fn list_faces(&self) -> FaceClientResult<Vec<Face>>;

    /// Identify the faces in a single image
    async fn recognize(&self, image: FaceImage) -> FaceClientResult<RecognitionResult>;

    /// Enroll `name` with one or more sample images
    async fn add_face(&self, name: &str, images: Vec<FaceImage>) -> FaceClientResult<()>;

    /// Whether the backend is reachable and healthy
    async fn health(&self) -> bool;
}
