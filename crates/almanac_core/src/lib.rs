//! Geocentric ephemeris for the Sun, Moon and the five naked-eye planets.
//!
//! Positions come from mean Keplerian elements with secular rates, plus the
//! largest periodic terms for the Moon, Jupiter and Saturn. Accuracy is a
//! few arcminutes, enough for rise/set/transit times good to a minute or two.
//!
//! The primary entry point is [`Ephemeris`].

pub mod body;
pub mod elements;
pub mod engine;
pub mod error;
pub mod frames;
pub mod lunar;
pub mod planets;

pub use body::{ALL_BODIES, Body, PLANETS};
pub use engine::{Ephemeris, EphemerisConfig};
pub use error::EngineError;
pub use frames::EquatorialPosition;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Equatorial radius of the Earth in km, the unit of lunar distance.
pub const EARTH_RADIUS_KM: f64 = 6_378.14;
