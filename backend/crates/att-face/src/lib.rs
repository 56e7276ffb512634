mod client;
mod error;
mod face_image;
mod recognizer;

pub use client::FaceRecognitionClient;
pub use error::{FaceClientError, Result as FaceClientResult};
pub use face_image::FaceImage;
pub use recognizer::FaceRecognizer;
