//! Mean sidereal time and hour angles.
//!
//! GMST uses the IAU 1982 expression in degrees (Meeus, *Astronomical
//! Algorithms*, eq. 12.4), evaluated directly at any UT instant.

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

/// Rate at which hour angles advance, in radians per mean solar day.
pub const SIDEREAL_RATE_RAD_PER_DAY: f64 = TAU * 1.002_737_909_350_795;

/// Greenwich Mean Sidereal Time at a UT Julian Date.
///
/// Returns radians in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let t = du / 36_525.0;
    let deg = 280.460_618_37 + 360.985_647_366_29 * du + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    deg.rem_euclid(360.0).to_radians()
}

/// Local Sidereal Time from GMST and east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

/// Local hour angle of an object at right ascension `ra_rad`.
///
/// Negative east of the meridian (before transit), positive west of it.
/// Returns radians in [-π, π).
pub fn hour_angle_rad(lst_rad: f64, ra_rad: f64) -> f64 {
    wrap_pi(lst_rad - ra_rad)
}

/// Normalize an angle to [-π, π).
pub fn wrap_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}
