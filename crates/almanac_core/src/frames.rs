//! Ecliptic → equatorial rotation and spherical conversion.

use std::f64::consts::TAU;

/// Geocentric apparent-place approximation: right ascension, declination,
/// distance, referred to the mean equator and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in radians, range [0, 2π).
    pub ra_rad: f64,
    /// Declination in radians, range [-π/2, π/2].
    pub dec_rad: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

impl EquatorialPosition {
    pub fn ra_hours(&self) -> f64 {
        self.ra_rad.to_degrees() / 15.0
    }

    pub fn dec_deg(&self) -> f64 {
        self.dec_rad.to_degrees()
    }

    /// Great-circle separation from another position, in degrees.
    pub fn separation_deg(&self, other: &Self) -> f64 {
        let cos_sep = self.dec_rad.sin() * other.dec_rad.sin()
            + self.dec_rad.cos() * other.dec_rad.cos() * (self.ra_rad - other.ra_rad).cos();
        cos_sep.clamp(-1.0, 1.0).acos().to_degrees()
    }
}

/// Mean obliquity of the ecliptic at day number `d`, radians.
pub fn mean_obliquity_rad(d: f64) -> f64 {
    (23.4393 - 3.563e-7 * d).to_radians()
}

/// Rotate ecliptic rectangular coordinates into the equatorial frame.
pub fn ecliptic_to_equatorial(xyz: &[f64; 3], obliquity_rad: f64) -> [f64; 3] {
    let (sin_e, cos_e) = obliquity_rad.sin_cos();
    [
        xyz[0],
        xyz[1] * cos_e - xyz[2] * sin_e,
        xyz[1] * sin_e + xyz[2] * cos_e,
    ]
}

/// `(longitude in [0, 2π), latitude, radius)` of a rectangular vector.
pub fn to_spherical(xyz: &[f64; 3]) -> (f64, f64, f64) {
    let [x, y, z] = *xyz;
    let rho = x.hypot(y);
    let r = (rho * rho + z * z).sqrt();
    if r == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (y.atan2(x).rem_euclid(TAU), z.atan2(rho), r)
}

/// Rectangular vector from `(longitude, latitude, radius)`.
pub fn from_spherical(lon_rad: f64, lat_rad: f64, r: f64) -> [f64; 3] {
    let (sin_b, cos_b) = lat_rad.sin_cos();
    let (sin_l, cos_l) = lon_rad.sin_cos();
    [r * cos_l * cos_b, r * sin_l * cos_b, r * sin_b]
}
