//! Authorization decision for a recognition result.
//!
//! Only the first detected face is considered. A face whose name is anything
//! other than [`UNKNOWN_PERSON`](crate::UNKNOWN_PERSON) opens the door.

use crate::{
    AttendanceRecord, AttendanceResponse, AttendanceStatus, DoorAction, RecognitionResult,
};

/// Outcome of evaluating one recognition result
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Nothing to record; the device keeps the door closed.
    NoFace,
    /// A face was evaluated and must be recorded and broadcast.
    Recognized {
        record: AttendanceRecord,
        response: AttendanceResponse,
    },
}

impl Decision {
    pub fn response(&self) -> AttendanceResponse {
        match self {
            Decision::NoFace => AttendanceResponse::no_face(),
            Decision::Recognized { response, .. } => response.clone(),
        }
    }

    pub fn record(&self) -> Option<&AttendanceRecord> {
        match self {
            Decision::NoFace => None,
            Decision::Recognized { record, .. } => Some(record),
        }
    }
}

pub fn decide(result: &RecognitionResult) -> Decision {
    let Some(face) = result.primary_face() else {
        return Decision::NoFace;
    };

    let authorized = face.is_known();
    let (status, action, message) = if authorized {
        (
            AttendanceStatus::Authorized,
            DoorAction::OpenDoor,
            format!("Welcome, {}", face.name),
        )
    } else {
        (
            AttendanceStatus::Unauthorized,
            DoorAction::KeepClosed,
            String::from("Unknown person"),
        )
    };

    let record = AttendanceRecord::new(face.name.clone(), face.confidence, status);
    let response = AttendanceResponse {
        success: true,
        authorized,
        name: (!face.name.is_empty()).then(|| face.name.clone()),
        confidence: (face.confidence != 0.0).then_some(face.confidence),
        message,
        action,
    };

    Decision::Recognized { record, response }
}
