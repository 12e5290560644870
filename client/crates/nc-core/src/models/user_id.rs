use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{Local, NaiveDateTime};
use error_location::ErrorLocation;
use rand::Rng;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const TIMESTAMP_DIGITS: usize = 14;
const SUFFIX_DIGITS: usize = 5;
const SUFFIX_MIN: u32 = 10_000;
const SUFFIX_MAX: u32 = 99_999;

/// Email-shaped identifier naming one installation to the registration backend.
///
/// Format: `<YYYYMMDDHHMMSS><5 random digits>@<domain>`, where the timestamp is
/// the local wall-clock time of generation. Identifiers therefore sort by
/// creation time, and two identifiers generated on one device in the same
/// second collide with probability 1 in 90 000.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a new identifier from the current local time.
    pub fn generate(domain: &str) -> Self {
        Self::generate_at(domain, Local::now().naive_local())
    }

    /// Generate a new identifier stamped with `now`.
    pub fn generate_at(domain: &str, now: NaiveDateTime) -> Self {
        let suffix = rand::rng().random_range(SUFFIX_MIN..=SUFFIX_MAX);
        Self(format!(
            "{}{}@{}",
            now.format(TIMESTAMP_FORMAT),
            suffix,
            domain
        ))
    }

    /// Wrap a value read back from storage without validating it.
    ///
    /// Installations that predate the current format keep whatever identifier
    /// the backend already knows them by.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse and validate an identifier issued for `domain`.
    #[track_caller]
    pub fn parse(value: &str, domain: &str) -> CoreErrorResult<Self> {
        let location = Location::caller();
        let invalid = |reason: &'static str| CoreError::InvalidUserId {
            value: value.to_string(),
            reason,
            location: ErrorLocation::from(location),
        };

        let (local, host) = value.rsplit_once('@').ok_or_else(|| invalid("missing '@'"))?;

        if host != domain {
            return Err(invalid("unexpected domain"));
        }

        if local.len() != TIMESTAMP_DIGITS + SUFFIX_DIGITS
            || !local.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("local part must be 19 digits"));
        }

        let (timestamp, suffix) = local.split_at(TIMESTAMP_DIGITS);

        NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .map_err(|_| invalid("timestamp is not a calendar date-time"))?;

        let suffix: u32 = suffix.parse().map_err(|_| invalid("suffix is not numeric"))?;
        if !(SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix) {
            return Err(invalid("suffix out of range"));
        }

        Ok(Self(value.to_string()))
    }

    /// Local time embedded in the identifier, if it is in the generated format.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let timestamp = self.0.get(..TIMESTAMP_DIGITS)?;
        NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
