//! Lunar position and illuminated fraction.
//!
//! The mean lunar orbit is corrected by the twelve largest periodic terms in
//! longitude, five in latitude and two in distance (evection, variation,
//! yearly and parallactic equations and smaller terms).

use crate::EARTH_RADIUS_KM;
use crate::body::Body;
use crate::elements::OrbitalElements;
use crate::frames::{from_spherical, to_spherical};

/// Geocentric ecliptic rectangular position of the Moon in km at day `d`.
pub fn moon_ecliptic_km(d: f64) -> [f64; 3] {
    let moon = OrbitalElements::for_body(Body::Moon, d);
    let sun = OrbitalElements::for_body(Body::Sun, d);
    let (lon, lat, r) = to_spherical(&moon.position());

    let ms = sun.mean_anomaly_rad();
    let mm = moon.mean_anomaly_rad();
    let ls = (sun.mean_anomaly_deg + sun.perihelion_deg).to_radians();
    let lm = moon.mean_longitude_rad();
    // Mean elongation and argument of latitude.
    let dd = lm - ls;
    let f = lm - moon.node_deg.to_radians();

    let dlon_deg = -1.274 * (mm - 2.0 * dd).sin()
        + 0.658 * (2.0 * dd).sin()
        - 0.186 * ms.sin()
        - 0.059 * (2.0 * mm - 2.0 * dd).sin()
        - 0.057 * (mm - 2.0 * dd + ms).sin()
        + 0.053 * (mm + 2.0 * dd).sin()
        + 0.046 * (2.0 * dd - ms).sin()
        + 0.041 * (mm - ms).sin()
        - 0.035 * dd.sin()
        - 0.031 * (mm + ms).sin()
        - 0.015 * (2.0 * f - 2.0 * dd).sin()
        + 0.011 * (mm - 4.0 * dd).sin();

    let dlat_deg = -0.173 * (f - 2.0 * dd).sin()
        - 0.055 * (mm - f - 2.0 * dd).sin()
        - 0.046 * (mm + f - 2.0 * dd).sin()
        + 0.033 * (f + 2.0 * dd).sin()
        + 0.017 * (2.0 * mm + f).sin();

    let dr_earth_radii = -0.58 * (mm - 2.0 * dd).cos() - 0.46 * (2.0 * dd).cos();

    from_spherical(
        lon + dlon_deg.to_radians(),
        lat + dlat_deg.to_radians(),
        (r + dr_earth_radii) * EARTH_RADIUS_KM,
    )
}

/// Illuminated percentage of the lunar disk from geocentric Sun and Moon
/// vectors (same frame, km).
///
/// `100 · (1 + cos i) / 2`, where the phase angle `i` is the Sun–Moon–Earth
/// angle derived from the geocentric elongation.
pub fn illuminated_percent(sun_km: &[f64; 3], moon_km: &[f64; 3]) -> f64 {
    let r_sun = norm(sun_km);
    let r_moon = norm(moon_km);
    let dot = sun_km[0] * moon_km[0] + sun_km[1] * moon_km[1] + sun_km[2] * moon_km[2];
    let elongation = (dot / (r_sun * r_moon)).clamp(-1.0, 1.0).acos();
    let phase_angle = (r_sun * elongation.sin()).atan2(r_moon - r_sun * elongation.cos());
    100.0 * (1.0 + phase_angle.cos()) / 2.0
}

fn norm(v: &[f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}
