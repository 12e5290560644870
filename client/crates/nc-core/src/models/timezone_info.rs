use chrono::Local;
use serde::{Deserialize, Serialize};

const FALLBACK_TIMEZONE: &str = "UTC";

/// Timezone reported alongside a registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneInfo {
    /// IANA name, e.g. `Europe/Berlin`
    pub name: String,
    /// Local time minus UTC, in minutes (east of Greenwich is positive)
    pub offset_minutes: i32,
}

impl TimezoneInfo {
    pub fn new(name: impl Into<String>, offset_minutes: i32) -> Self {
        Self {
            name: name.into(),
            offset_minutes,
        }
    }

    /// Read the host timezone.
    ///
    /// A non-empty `name_override` wins over the host zone database. The
    /// offset always comes from the local clock.
    pub fn current(name_override: Option<&str>) -> Self {
        let offset_minutes = Local::now().offset().local_minus_utc() / 60;

        let name = match name_override.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => iana_time_zone::get_timezone()
                .unwrap_or_else(|_| FALLBACK_TIMEZONE.to_string()),
        };

        Self {
            name,
            offset_minutes,
        }
    }
}
