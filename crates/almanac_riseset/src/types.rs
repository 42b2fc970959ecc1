//! Types for rise/set/transit calculations.
//!
//! Provides the observer location, event kinds, horizon configuration and
//! result type used by the search module.

use almanac_core::{Body, EARTH_RADIUS_KM};

use crate::error::RiseSetError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn validate(&self) -> Result<(), RiseSetError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(RiseSetError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(RiseSetError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        if !self.altitude_m.is_finite() {
            return Err(RiseSetError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }
}

/// Kind of horizon or meridian event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb (Sun, Moon) or centre (planets) crosses the apparent
    /// horizon going up.
    Rising,
    Setting,
    /// Upper meridian crossing.
    Transit,
}

impl RiseSetEvent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Setting => "setting",
            Self::Transit => "transit",
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub sun_semidiameter_arcmin: f64,
    /// Whether to lower the horizon by the geometric dip for the observer's
    /// altitude, `sqrt(2h/R)` radians. Default: false, matching almanac
    /// tables which quote sea-level horizons.
    pub altitude_correction: bool,
    /// How far past the start instant the next-event search looks, in days.
    /// Default: 2.0.
    pub search_horizon_days: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            sun_semidiameter_arcmin: 16.0,
            altitude_correction: false,
            search_horizon_days: 2.0,
        }
    }
}

impl RiseSetConfig {
    pub fn validate(&self) -> Result<(), RiseSetError> {
        if !(0.0..=120.0).contains(&self.refraction_arcmin) {
            return Err(RiseSetError::InvalidConfig(
                "refraction_arcmin must be within [0, 120]",
            ));
        }
        if !(0.0..=60.0).contains(&self.sun_semidiameter_arcmin) {
            return Err(RiseSetError::InvalidConfig(
                "sun_semidiameter_arcmin must be within [0, 60]",
            ));
        }
        if !(self.search_horizon_days > 0.0 && self.search_horizon_days <= 30.0) {
            return Err(RiseSetError::InvalidConfig(
                "search_horizon_days must be within (0, 30]",
            ));
        }
        Ok(())
    }

    /// Geometric dip of the horizon in degrees for an observer at
    /// `altitude_m`, or zero when the correction is disabled.
    pub fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            0.0
        }
    }

    /// Geocentric altitude of the body's centre at the moment of rising or
    /// setting, in degrees.
    ///
    /// - Sun: `-(refraction + semidiameter) / 60`
    /// - Moon: `0.7275 * parallax - refraction / 60`, which folds in the
    ///   mean lunar semidiameter
    /// - planets: `-refraction / 60`
    pub fn target_altitude_deg(&self, body: Body, distance_km: f64, altitude_m: f64) -> f64 {
        let base = match body {
            Body::Sun => -(self.refraction_arcmin + self.sun_semidiameter_arcmin) / 60.0,
            Body::Moon => {
                let parallax_deg = (EARTH_RADIUS_KM / distance_km).asin().to_degrees();
                0.7275 * parallax_deg - self.refraction_arcmin / 60.0
            }
            _ => -self.refraction_arcmin / 60.0,
        };
        base - self.dip_deg(altitude_m)
    }
}

/// Result of an event search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UT).
    Event { jd_utc: f64, event: RiseSetEvent },
    /// Body stays below the horizon through the searched transits.
    NeverRises,
    /// Body stays above the horizon through the searched transits.
    NeverSets,
    /// The body does cross the horizon, but not within the search window.
    NoEventInWindow,
}

impl RiseSetResult {
    pub fn jd_utc(&self) -> Option<f64> {
        match self {
            Self::Event { jd_utc, .. } => Some(*jd_utc),
            _ => None,
        }
    }
}
