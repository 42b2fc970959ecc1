//! Error types for time conversions.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from Julian Date conversion or timezone resolution.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Timezone name is not in the IANA database.
    #[error("unknown timezone: {0}")]
    UnknownZone(String),
    /// No local time exists within two days of midnight on `date`.
    #[error("no local time near midnight of {date} in {zone}")]
    NonexistentMidnight { date: NaiveDate, zone: &'static str },
    /// Julian Date is not finite or beyond the range of a UTC instant.
    #[error("Julian date {0} cannot be represented as a UTC instant")]
    JulianOutOfRange(f64),
}
