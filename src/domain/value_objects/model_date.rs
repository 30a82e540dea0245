//! ModelDate value object - a date as written in the source model
//!
//! Dates are kept verbatim and only parsed when a metric needs them. A date
//! that does not parse is treated as missing by every consumer.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds in one day
pub const MILLIS_PER_DAY: u64 = 86_400_000;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A raw date string from the model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelDate(String);

impl ModelDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a UTC instant.
    ///
    /// Accepts RFC 3339 timestamps, naive date-times (read as UTC) and plain
    /// `YYYY-MM-DD` dates (UTC midnight).
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(&Utc));
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Utc.from_utc_datetime(&naive));
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// Four-digit year key ("2024") used by the time series
    pub fn year_key(&self) -> Option<String> {
        self.parse().map(|instant| format!("{:04}", instant.year()))
    }

    /// Whole days between two dates, rounded up; `None` if either fails to parse
    pub fn days_until(&self, other: &ModelDate) -> Option<u64> {
        let start = self.parse()?;
        let end = other.parse()?;
        Some(days_between(start, end))
    }
}

impl fmt::Display for ModelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// `ceil(|end - start| in ms / ms-per-day)`
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let millis = (end - start).num_milliseconds().unsigned_abs();
    millis.div_ceil(MILLIS_PER_DAY)
}
