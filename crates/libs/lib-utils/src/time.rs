//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current time as a Unix timestamp in seconds.
pub fn unix_now() -> i64 {
    now_utc().timestamp()
}

/// Format a Unix timestamp as an RFC3339 string.
pub fn format_unix(secs: i64) -> Result<String, Error> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339())
        .ok_or(Error::TimestampOutOfRange(secs))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    TimestampOutOfRange(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
