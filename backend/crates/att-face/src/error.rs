use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors talking to the face recognition service
#[derive(Error, Debug)]
pub enum FaceClientError {
    #[error("Face service request failed: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Face service returned {status}: {body} {location}")]
    Status {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Face service response could not be decoded: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl FaceClientError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        FaceClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        FaceClientError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Unexpected HTTP status from the face service
    #[track_caller]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        FaceClientError::Status {
            status,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for FaceClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        FaceClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for FaceClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        FaceClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, FaceClientError>;
