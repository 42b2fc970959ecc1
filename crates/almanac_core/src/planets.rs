//! Geocentric planet and Sun vectors.

use crate::AU_KM;
use crate::body::Body;
use crate::elements::OrbitalElements;
use crate::frames::{from_spherical, to_spherical};

/// Geocentric ecliptic position of the Sun in km.
pub fn sun_ecliptic_km(d: f64) -> [f64; 3] {
    scale(OrbitalElements::for_body(Body::Sun, d).position(), AU_KM)
}

/// Geocentric ecliptic position of a planet in km.
///
/// Heliocentric position from the mean elements, corrected for the
/// Jupiter–Saturn great inequality, then shifted by the Sun's geocentric
/// vector. Returns `None` for the Sun and Moon.
pub fn planet_ecliptic_km(body: Body, d: f64) -> Option<[f64; 3]> {
    if !body.is_planet() {
        return None;
    }
    let mut helio = OrbitalElements::for_body(body, d).position();
    if matches!(body, Body::Jupiter | Body::Saturn) {
        helio = apply_great_inequality(body, helio, d);
    }
    let sun = OrbitalElements::for_body(Body::Sun, d).position();
    Some(scale(
        [helio[0] + sun[0], helio[1] + sun[1], helio[2] + sun[2]],
        AU_KM,
    ))
}

fn apply_great_inequality(body: Body, helio: [f64; 3], d: f64) -> [f64; 3] {
    let mj = OrbitalElements::for_body(Body::Jupiter, d).mean_anomaly_rad();
    let ms = OrbitalElements::for_body(Body::Saturn, d).mean_anomaly_rad();
    let deg = f64::to_radians;

    let (dlon_deg, dlat_deg) = match body {
        Body::Jupiter => (
            -0.332 * (2.0 * mj - 5.0 * ms - deg(67.6)).sin()
                - 0.056 * (2.0 * mj - 2.0 * ms + deg(21.0)).sin()
                + 0.042 * (3.0 * mj - 5.0 * ms + deg(21.0)).sin()
                - 0.036 * (mj - 2.0 * ms).sin()
                + 0.022 * (mj - ms).cos()
                + 0.023 * (2.0 * mj - 3.0 * ms + deg(52.0)).sin()
                - 0.016 * (mj - 5.0 * ms - deg(69.0)).sin(),
            0.0,
        ),
        Body::Saturn => (
            0.812 * (2.0 * mj - 5.0 * ms - deg(67.6)).sin()
                - 0.229 * (2.0 * mj - 4.0 * ms - deg(2.0)).cos()
                + 0.119 * (mj - 2.0 * ms - deg(3.0)).sin()
                + 0.046 * (2.0 * mj - 6.0 * ms - deg(69.0)).sin()
                + 0.014 * (mj - 3.0 * ms + deg(32.0)).sin(),
            -0.020 * (2.0 * mj - 4.0 * ms - deg(2.0)).cos()
                + 0.018 * (2.0 * mj - 6.0 * ms - deg(49.0)).sin(),
        ),
        _ => return helio,
    };

    let (lon, lat, r) = to_spherical(&helio);
    from_spherical(lon + deg(dlon_deg), lat + deg(dlat_deg), r)
}

fn scale(v: [f64; 3], k: f64) -> [f64; 3] {
    [v[0] * k, v[1] * k, v[2] * k]
}
