use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_PERSON_NAME_LENGTH: usize = 100;

/// Trim and check a person name before it is sent for enrollment.
///
/// The face service stores enrollment images under the name, so path
/// separators and `..` are rejected.
#[track_caller]
pub fn validate_person_name(name: &str) -> CoreResult<String> {
    let trimmed = name.trim();

    let problem = if trimmed.is_empty() {
        Some(String::from("Name is required"))
    } else if trimmed.chars().count() > MAX_PERSON_NAME_LENGTH {
        Some(format!(
            "Name must be at most {} characters",
            MAX_PERSON_NAME_LENGTH
        ))
    } else if trimmed.contains(['/', '\\'])
        || trimmed.contains("..")
        || trimmed.chars().any(char::is_control)
    {
        Some(String::from("Name contains invalid characters"))
    } else {
        None
    };

    match problem {
        Some(message) => Err(CoreError::Validation {
            message,
            field: Some(String::from("name")),
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Ok(trimmed.to_string()),
    }
}
