use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid platform: {value} {location}")]
    InvalidPlatform {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid permission status: {value} {location}")]
    InvalidPermissionStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid user id '{value}': {reason} {location}")]
    InvalidUserId {
        value: String,
        reason: &'static str,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
