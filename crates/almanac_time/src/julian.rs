//! Julian Date ↔ UTC instant conversions.
//!
//! Julian Dates here are on the UTC/UT axis. The ephemeris treats UT as
//! dynamical time; the ~70 s offset is below the accuracy of its model.

use chrono::{DateTime, Utc};

use crate::error::TimeError;

/// Julian Date of J2000.0 (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of 1999-Dec-31 00:00, day zero of the mean orbital elements.
pub const ELEMENT_EPOCH_JD: f64 = 2_451_543.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Largest |milliseconds| we hand to chrono (about ±285,000 years).
const MAX_ABS_MILLIS: f64 = 9.0e15;

/// Julian Date of a UTC instant.
pub fn datetime_to_jd(t: &DateTime<Utc>) -> f64 {
    let secs = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// UTC instant of a Julian Date, rounded to the millisecond.
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() || millis.abs() > MAX_ABS_MILLIS {
        return Err(TimeError::JulianOutOfRange(jd));
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64).ok_or(TimeError::JulianOutOfRange(jd))
}
