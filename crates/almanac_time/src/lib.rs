//! Time handling for the almanac.
//!
//! This crate provides:
//! - Julian Date ↔ UTC instant conversions
//! - Greenwich/local mean sidereal time and hour angles
//! - The display timezone, local-midnight resolution and 12-hour clock output

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod zone;

pub use error::TimeError;
pub use julian::{
    ELEMENT_EPOCH_JD, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, datetime_to_jd, jd_to_datetime,
};
pub use sidereal::{
    SIDEREAL_RATE_RAD_PER_DAY, gmst_rad, hour_angle_rad, local_sidereal_time_rad, wrap_pi,
};
pub use zone::{DisplayZone, MidnightBasis, NOT_AVAILABLE};
