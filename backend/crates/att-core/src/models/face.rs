use serde::{Deserialize, Serialize};

/// Name the recognition service reports for a face with no enrolled match.
pub const UNKNOWN_PERSON: &str = "Unknown";

/// A known person in the recognition service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub name: String,
    /// Number of enrollment images stored for this person
    pub images: u32,
}

/// Bounding box of a detected face, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceLocation {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedFace {
    pub name: String,
    pub confidence: f64,
    #[serde(default)]
    pub location: FaceLocation,
}

impl RecognizedFace {
    pub fn is_known(&self) -> bool {
        self.name != UNKNOWN_PERSON
    }
}

/// Response body of the recognition service's `/recognize` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub success: bool,
    #[serde(default)]
    pub faces_detected: usize,
    #[serde(default)]
    pub faces: Vec<RecognizedFace>,
}

impl RecognitionResult {
    /// The face that decides attendance. Only the first detection counts.
    pub fn primary_face(&self) -> Option<&RecognizedFace> {
        if self.faces_detected == 0 {
            return None;
        }
        self.faces.first()
    }
}
