use crate::DoorAction;

use serde::{Deserialize, Serialize};

/// Response returned to the capturing device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceResponse {
    pub success: bool,
    pub authorized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub message: String,
    pub action: DoorAction,
}

impl AttendanceResponse {
    /// The recognition service could not be reached or rejected the image.
    pub fn recognition_failed() -> Self {
        Self {
            success: false,
            authorized: false,
            name: None,
            confidence: None,
            message: String::from("Failed to recognize face"),
            action: DoorAction::KeepClosed,
        }
    }

    pub fn no_face() -> Self {
        Self {
            success: true,
            authorized: false,
            name: None,
            confidence: None,
            message: String::from("No face detected"),
            action: DoorAction::KeepClosed,
        }
    }
}
