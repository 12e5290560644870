use nc_core::{CoreError, PermissionStatus};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Reasons push notifications could not be set up on this device
#[derive(Error, Debug)]
pub enum PushError {
    #[error("Push notifications require a physical device {location}")]
    NotPhysicalDevice { location: ErrorLocation },

    #[error("Push permission not granted (status: {status}) {location}")]
    PermissionNotGranted {
        status: PermissionStatus,
        location: ErrorLocation,
    },

    #[error("Push token acquisition failed: {message} {location}")]
    TokenAcquisition {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid push token: {source} {location}")]
    InvalidToken {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl PushError {
    #[track_caller]
    pub fn not_physical_device() -> Self {
        PushError::NotPhysicalDevice {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn permission_not_granted(status: PermissionStatus) -> Self {
        PushError::PermissionNotGranted {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn token_acquisition<S: Into<String>>(message: S) -> Self {
        PushError::TokenAcquisition {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for PushError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        PushError::InvalidToken {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PushError>;
