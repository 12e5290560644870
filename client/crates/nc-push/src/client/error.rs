use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from a single registration POST
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Registration endpoint returned HTTP {status} {location}")]
    Status { status: u16, location: ErrorLocation },
}

impl RegistrationError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        RegistrationError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(status: u16) -> Self {
        RegistrationError::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RegistrationError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RegistrationError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
