use crate::{DeviceInfo, Platform, PushToken, TimezoneInfo, UserId};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// JSON body posted to the registration endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub user_id: String,
    pub push_token: String,
    pub platform: Platform,
    pub device_info: DeviceInfo,
    pub timezone: String,
    pub timezone_offset: i32,
    /// ISO 8601, UTC, millisecond precision
    pub registered_at: String,
}

impl RegistrationRecord {
    pub fn new(
        user_id: &UserId,
        token: &PushToken,
        timezone: &TimezoneInfo,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.as_str().to_string(),
            push_token: token.value.clone(),
            platform: token.platform,
            device_info: token.device.clone(),
            timezone: timezone.name.clone(),
            timezone_offset: timezone.offset_minutes,
            registered_at: registered_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
