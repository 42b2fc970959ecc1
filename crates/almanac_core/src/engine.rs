//! The ephemeris query surface.

use almanac_time::ELEMENT_EPOCH_JD;

use crate::body::Body;
use crate::error::EngineError;
use crate::frames::{EquatorialPosition, ecliptic_to_equatorial, mean_obliquity_rad, to_spherical};
use crate::lunar::{illuminated_percent, moon_ecliptic_km};
use crate::planets::{planet_ecliptic_km, sun_ecliptic_km};

/// JD of 1800-01-01 00:00 UT.
const DEFAULT_MIN_JD: f64 = 2_378_496.5;

/// JD of 2201-01-01 00:00 UT.
const DEFAULT_MAX_JD: f64 = 2_524_958.5;

/// Supported epoch window of an [`Ephemeris`].
///
/// The mean elements drift away from reality outside a few centuries of
/// J2000, so queries are refused rather than silently degraded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisConfig {
    /// Earliest accepted JD (UT).
    pub min_jd: f64,
    /// Latest accepted JD (UT).
    pub max_jd: f64,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            min_jd: DEFAULT_MIN_JD,
            max_jd: DEFAULT_MAX_JD,
        }
    }
}

impl EphemerisConfig {
    fn validate(&self) -> Result<(), EngineError> {
        if !self.min_jd.is_finite() || !self.max_jd.is_finite() {
            return Err(EngineError::InvalidConfig("epoch bounds must be finite"));
        }
        if self.min_jd >= self.max_jd {
            return Err(EngineError::InvalidConfig(
                "min_jd must be earlier than max_jd",
            ));
        }
        Ok(())
    }
}

/// Low-precision geocentric ephemeris.
///
/// Stateless apart from its configuration; cheap to copy and safe to share
/// between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeris {
    config: EphemerisConfig,
}

impl Ephemeris {
    pub fn new(config: EphemerisConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Geocentric equatorial position of `body` at `jd_ut`.
    pub fn position(&self, body: Body, jd_ut: f64) -> Result<EquatorialPosition, EngineError> {
        let d = self.day_number(jd_ut)?;
        let ecliptic = ecliptic_km(body, d)?;
        let equatorial = ecliptic_to_equatorial(&ecliptic, mean_obliquity_rad(d));
        let (ra_rad, dec_rad, distance_km) = to_spherical(&equatorial);
        Ok(EquatorialPosition {
            ra_rad,
            dec_rad,
            distance_km,
        })
    }

    /// Illuminated percentage of the lunar disk at `jd_ut`, in [0, 100].
    pub fn moon_illumination_percent(&self, jd_ut: f64) -> Result<f64, EngineError> {
        let d = self.day_number(jd_ut)?;
        Ok(illuminated_percent(&sun_ecliptic_km(d), &moon_ecliptic_km(d)))
    }

    /// Days since the element epoch, after checking the supported window.
    fn day_number(&self, jd_ut: f64) -> Result<f64, EngineError> {
        if !jd_ut.is_finite() {
            return Err(EngineError::NonFiniteEpoch);
        }
        if jd_ut < self.config.min_jd || jd_ut > self.config.max_jd {
            return Err(EngineError::EpochOutOfRange {
                jd: jd_ut,
                min: self.config.min_jd,
                max: self.config.max_jd,
            });
        }
        Ok(jd_ut - ELEMENT_EPOCH_JD)
    }
}

fn ecliptic_km(body: Body, d: f64) -> Result<[f64; 3], EngineError> {
    match body {
        Body::Sun => Ok(sun_ecliptic_km(d)),
        Body::Moon => Ok(moon_ecliptic_km(d)),
        Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
            planet_ecliptic_km(body, d).ok_or(EngineError::UnsupportedBody(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(Ephemeris::new(EphemerisConfig::default()).is_ok());
    }

    #[test]
    fn inverted_window_rejected() {
        let cfg = EphemerisConfig {
            min_jd: 2_460_000.0,
            max_jd: 2_450_000.0,
        };
        assert!(matches!(
            Ephemeris::new(cfg),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn infinite_bound_rejected() {
        let cfg = EphemerisConfig {
            min_jd: f64::NEG_INFINITY,
            max_jd: 2_450_000.0,
        };
        assert!(Ephemeris::new(cfg).is_err());
    }

    #[test]
    fn nan_epoch_rejected() {
        let eph = Ephemeris::default();
        assert_eq!(
            eph.position(Body::Sun, f64::NAN),
            Err(EngineError::NonFiniteEpoch)
        );
        assert_eq!(
            eph.moon_illumination_percent(f64::INFINITY),
            Err(EngineError::NonFiniteEpoch)
        );
    }

    #[test]
    fn epoch_window_enforced() {
        let eph = Ephemeris::default();
        let err = eph.position(Body::Mars, 2_000_000.0).unwrap_err();
        assert!(matches!(err, EngineError::EpochOutOfRange { .. }));
        assert!(eph.position(Body::Mars, DEFAULT_MIN_JD).is_ok());
        assert!(eph.position(Body::Mars, DEFAULT_MAX_JD).is_ok());
    }

    #[test]
    fn every_body_has_its_own_vector() {
        let d = 8_850.0;
        let sun = ecliptic_km(Body::Sun, d).unwrap();
        for body in crate::body::ALL_BODIES {
            let v = ecliptic_km(body, d).unwrap();
            if body != Body::Sun {
                assert_ne!(v, sun, "{body} fell back to the Sun");
            }
        }
    }

    #[test]
    fn unsupported_body_message() {
        assert_eq!(
            EngineError::UnsupportedBody(Body::Mars).to_string(),
            "no orbital elements for Mars"
        );
    }

    #[test]
    fn moon_distance_in_km() {
        let pos = Ephemeris::default()
            .position(Body::Moon, 2_460_390.0)
            .unwrap();
        assert!((356_000.0..407_000.0).contains(&pos.distance_km));
    }

    #[test]
    fn illumination_bounded() {
        let eph = Ephemeris::default();
        for k in 0..30 {
            let pct = eph.moon_illumination_percent(2_460_300.0 + k as f64).unwrap();
            assert!((0.0..=100.0).contains(&pct));
        }
    }
}
