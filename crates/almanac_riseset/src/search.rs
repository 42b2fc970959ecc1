//! Transit, rising and setting search.
//!
//! Each event is tied to a meridian transit: the transit is found where the
//! hour angle vanishes, rising and setting at `∓H₀` about it, where
//!
//! `cos H₀ = (sin h₀ − sin φ sin δ) / (cos φ cos δ)`
//!
//! Every estimate is refined against the body's position at the trial time,
//! so the Moon's fast motion is followed correctly.

use almanac_core::{Body, Ephemeris};
use almanac_time::{
    SIDEREAL_RATE_RAD_PER_DAY, gmst_rad, hour_angle_rad, local_sidereal_time_rad, wrap_pi,
};

use crate::error::RiseSetError;
use crate::types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};

/// Maximum iterations for the refinement loops.
const MAX_ITERATIONS: usize = 20;

/// Convergence threshold in days (~9 ms).
const CONVERGENCE_DAYS: f64 = 1.0e-7;

/// Hour angle, declination and distance of `body` at `jd_utc`.
fn local_coordinates(
    eph: &Ephemeris,
    body: Body,
    location: &GeoLocation,
    jd_utc: f64,
) -> Result<(f64, f64, f64), RiseSetError> {
    let pos = eph.position(body, jd_utc)?;
    let lst = local_sidereal_time_rad(gmst_rad(jd_utc), location.longitude_rad());
    Ok((hour_angle_rad(lst, pos.ra_rad), pos.dec_rad, pos.distance_km))
}

/// Cosine of the hour angle at which `body` reaches its rise/set altitude.
fn cos_semi_arc(
    body: Body,
    location: &GeoLocation,
    dec: f64,
    distance_km: f64,
    config: &RiseSetConfig,
) -> f64 {
    let phi = location.latitude_rad();
    let h0 = config
        .target_altitude_deg(body, distance_km, location.altitude_m)
        .to_radians();
    (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Upper transit of `body` nearest to `jd_guess` (UT).
pub fn transit_near(
    eph: &Ephemeris,
    body: Body,
    location: &GeoLocation,
    jd_guess: f64,
) -> Result<f64, RiseSetError> {
    let mut jd = jd_guess;
    for _ in 0..MAX_ITERATIONS {
        let (ha, _, _) = local_coordinates(eph, body, location, jd)?;
        let correction = -ha / SIDEREAL_RATE_RAD_PER_DAY;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    Ok(jd)
}

/// Rising (`rising == true`) or setting adjacent to the transit at
/// `jd_transit`.
///
/// Returns `NeverRises`/`NeverSets` when the body does not reach the
/// horizon on that passage.
pub fn event_about_transit(
    eph: &Ephemeris,
    body: Body,
    location: &GeoLocation,
    jd_transit: f64,
    rising: bool,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    let (_, dec, dist) = local_coordinates(eph, body, location, jd_transit)?;
    let cos_h0 = cos_semi_arc(body, location, dec, dist, config);
    if let Some(polar) = polar_status(cos_h0) {
        return Ok(polar);
    }

    let semi_arc_days = cos_h0.acos() / SIDEREAL_RATE_RAD_PER_DAY;
    let mut jd = if rising {
        jd_transit - semi_arc_days
    } else {
        jd_transit + semi_arc_days
    };

    for _ in 0..MAX_ITERATIONS {
        let (ha, dec_i, dist_i) = local_coordinates(eph, body, location, jd)?;
        let cos_h = cos_semi_arc(body, location, dec_i, dist_i, config);
        if let Some(polar) = polar_status(cos_h) {
            return Ok(polar);
        }
        let target = if rising { -cos_h.acos() } else { cos_h.acos() };
        let correction = wrap_pi(target - ha) / SIDEREAL_RATE_RAD_PER_DAY;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        jd_utc: jd,
        event: if rising {
            RiseSetEvent::Rising
        } else {
            RiseSetEvent::Setting
        },
    })
}

fn polar_status(cos_h0: f64) -> Option<RiseSetResult> {
    if cos_h0 > 1.0 {
        Some(RiseSetResult::NeverRises)
    } else if cos_h0 < -1.0 {
        Some(RiseSetResult::NeverSets)
    } else {
        None
    }
}

/// First `event` of `body` at or after `jd_start` (UT), looking at most
/// `config.search_horizon_days` ahead.
///
/// Successive transits are walked starting from the one nearest a day
/// before the start. If the body never crossed the horizon on any of them,
/// the last polar status seen is returned; if it did cross but only after
/// the window, `NoEventInWindow`.
pub fn next_event(
    eph: &Ephemeris,
    body: Body,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_start: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    location.validate()?;
    config.validate()?;

    let jd_end = jd_start + config.search_horizon_days;
    let mut status = RiseSetResult::NoEventInWindow;
    let mut transit = transit_near(eph, body, location, jd_start - 1.0)?;

    while transit <= jd_end + 1.0 {
        let candidate = match event {
            RiseSetEvent::Transit => RiseSetResult::Event {
                jd_utc: transit,
                event,
            },
            RiseSetEvent::Rising => {
                event_about_transit(eph, body, location, transit, true, config)?
            }
            RiseSetEvent::Setting => {
                event_about_transit(eph, body, location, transit, false, config)?
            }
        };

        match candidate {
            RiseSetResult::Event { jd_utc, .. } if jd_utc >= jd_start => {
                if jd_utc <= jd_end {
                    return Ok(candidate);
                }
                return Ok(RiseSetResult::NoEventInWindow);
            }
            RiseSetResult::Event { .. } => {}
            polar => status = polar,
        }

        let next = transit_near(eph, body, location, transit + 1.0)?;
        if next <= transit {
            break;
        }
        transit = next;
    }

    tracing::trace!(%body, event = event.name(), jd_start, ?status, "no event in window");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD_2024_03_20: f64 = 2_460_389.5;

    fn kodaikanal() -> GeoLocation {
        GeoLocation::new(10.2306, 77.4686, 2343.0)
    }

    #[test]
    fn transit_has_zero_hour_angle() {
        let eph = Ephemeris::default();
        let loc = kodaikanal();
        for body in [Body::Sun, Body::Moon, Body::Saturn] {
            let t = transit_near(&eph, body, &loc, JD_2024_03_20).unwrap();
            let (ha, _, _) = local_coordinates(&eph, body, &loc, t).unwrap();
            assert!(ha.abs() < 1e-5, "{body} HA at transit = {ha}");
        }
    }

    #[test]
    fn rising_precedes_transit_precedes_setting() {
        let eph = Ephemeris::default();
        let loc = kodaikanal();
        let cfg = RiseSetConfig::default();
        let t = transit_near(&eph, Body::Sun, &loc, JD_2024_03_20 + 0.25).unwrap();
        let rise = event_about_transit(&eph, Body::Sun, &loc, t, true, &cfg)
            .unwrap()
            .jd_utc()
            .unwrap();
        let set = event_about_transit(&eph, Body::Sun, &loc, t, false, &cfg)
            .unwrap()
            .jd_utc()
            .unwrap();
        assert!(rise < t && t < set);
        // Equinox day length near the equator is about 12 h 7 min.
        let hours = (set - rise) * 24.0;
        assert!((hours - 12.1).abs() < 0.1, "day length {hours} h");
    }

    #[test]
    fn next_event_is_not_before_start() {
        let eph = Ephemeris::default();
        let loc = kodaikanal();
        let cfg = RiseSetConfig::default();
        for kind in [RiseSetEvent::Rising, RiseSetEvent::Setting, RiseSetEvent::Transit] {
            for k in 0..8 {
                let start = JD_2024_03_20 + k as f64 * 0.3;
                let r = next_event(&eph, Body::Moon, &loc, kind, start, &cfg).unwrap();
                let jd = r.jd_utc().unwrap();
                assert!(jd >= start && jd <= start + 2.0, "{kind:?} at {jd} for {start}");
            }
        }
    }

    #[test]
    fn successive_searches_advance() {
        let eph = Ephemeris::default();
        let loc = kodaikanal();
        let cfg = RiseSetConfig::default();
        let first = next_event(&eph, Body::Sun, &loc, RiseSetEvent::Rising, JD_2024_03_20, &cfg)
            .unwrap()
            .jd_utc()
            .unwrap();
        let second = next_event(&eph, Body::Sun, &loc, RiseSetEvent::Rising, first + 0.01, &cfg)
            .unwrap()
            .jd_utc()
            .unwrap();
        assert!(((second - first) - 1.0).abs() < 0.01);
    }

    #[test]
    fn invalid_location_rejected() {
        let eph = Ephemeris::default();
        let loc = GeoLocation::new(95.0, 0.0, 0.0);
        let err = next_event(
            &eph,
            Body::Sun,
            &loc,
            RiseSetEvent::Rising,
            JD_2024_03_20,
            &RiseSetConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RiseSetError::InvalidLocation(_)));
    }

    #[test]
    fn engine_errors_propagate() {
        let eph = Ephemeris::default();
        let err = next_event(
            &eph,
            Body::Sun,
            &kodaikanal(),
            RiseSetEvent::Transit,
            1_000_000.0,
            &RiseSetConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RiseSetError::Engine(_)));
    }

    #[test]
    fn polar_status_thresholds() {
        assert_eq!(polar_status(1.01), Some(RiseSetResult::NeverRises));
        assert_eq!(polar_status(-1.01), Some(RiseSetResult::NeverSets));
        assert_eq!(polar_status(0.3), None);
    }
}
