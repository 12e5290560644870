use crate::{CoreError, DeviceInfo, Platform, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Token issued by the platform push service, with the device it addresses.
///
/// Held in memory only. The registration endpoint is the sole durable copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushToken {
    pub value: String,
    pub platform: Platform,
    pub device: DeviceInfo,
}

impl PushToken {
    #[track_caller]
    pub fn new(
        value: impl Into<String>,
        platform: Platform,
        device: DeviceInfo,
    ) -> CoreErrorResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "push token cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            value,
            platform,
            device,
        })
    }
}
