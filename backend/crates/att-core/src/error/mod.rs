use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid attendance status: {value} {location}")]
    InvalidAttendanceStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid door action: {value} {location}")]
    InvalidDoorAction {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
