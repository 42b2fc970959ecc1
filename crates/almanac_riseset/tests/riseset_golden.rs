//! Golden-value tests for rise/set/transit times.
//!
//! Reference times are almanac values for Kodaikanal Solar Observatory
//! (10.2306 N, 77.4686 E) in IST, and the polar-day/polar-night behaviour
//! at Tromsø. Tolerance is a few minutes, the accuracy of the mean-element
//! ephemeris.

use almanac_core::{Body, Ephemeris};
use almanac_riseset::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, next_event, sun_times,
};
use almanac_time::datetime_to_jd;
use chrono::{FixedOffset, TimeZone, Utc};

const TOLERANCE_MIN: f64 = 3.0;

fn kodaikanal() -> GeoLocation {
    GeoLocation::new(10.2306, 77.4686, 2343.0)
}

fn tromso() -> GeoLocation {
    GeoLocation::new(69.6496, 18.9560, 0.0)
}

/// JD of local midnight in IST.
fn ist_midnight_jd(y: i32, m: u32, d: u32) -> f64 {
    let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let local = ist.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
    datetime_to_jd(&local.with_timezone(&Utc))
}

fn minutes_after(jd: f64, jd_midnight: f64) -> f64 {
    (jd - jd_midnight) * 1440.0
}

fn assert_minutes(label: &str, result: RiseSetResult, midnight: f64, expected_min: f64) {
    let Some(jd) = result.jd_utc() else {
        panic!("{label}: expected an event, got {result:?}");
    };
    let got = minutes_after(jd, midnight);
    assert!(
        (got - expected_min).abs() < TOLERANCE_MIN,
        "{label}: {got:.1} min after midnight, expected {expected_min:.1}"
    );
}

#[test]
fn kodaikanal_equinox_sun() {
    let eph = Ephemeris::default();
    let midnight = ist_midnight_jd(2024, 3, 20);
    let st = sun_times(&eph, &kodaikanal(), midnight, &RiseSetConfig::default()).unwrap();

    // 06:24, 12:27, 18:31 IST
    assert_minutes("sunrise", st.sunrise, midnight, 6.0 * 60.0 + 24.2);
    assert!((minutes_after(st.solar_noon_jd, midnight) - (12.0 * 60.0 + 27.5)).abs() < TOLERANCE_MIN);
    assert_minutes("sunset", st.sunset, midnight, 18.0 * 60.0 + 31.0);
}

#[test]
fn kodaikanal_equinox_moon() {
    let eph = Ephemeris::default();
    let loc = kodaikanal();
    let cfg = RiseSetConfig::default();
    let midnight = ist_midnight_jd(2024, 3, 20);

    let set = next_event(&eph, Body::Moon, &loc, RiseSetEvent::Setting, midnight, &cfg).unwrap();
    let rise = next_event(&eph, Body::Moon, &loc, RiseSetEvent::Rising, midnight, &cfg).unwrap();
    let transit =
        next_event(&eph, Body::Moon, &loc, RiseSetEvent::Transit, midnight, &cfg).unwrap();

    // 03:05, 14:52, 21:22 IST
    assert_minutes("moonset", set, midnight, 185.2);
    assert_minutes("moonrise", rise, midnight, 892.0);
    assert_minutes("moon transit", transit, midnight, 1281.8);
}

#[test]
fn kodaikanal_equinox_planets() {
    let eph = Ephemeris::default();
    let loc = kodaikanal();
    let cfg = RiseSetConfig::default();
    let midnight = ist_midnight_jd(2024, 3, 20);

    // (body, rise, set, transit) in minutes after IST midnight.
    let expected = [
        (Body::Venus, 5 * 60 + 20, 17 * 60 + 12, 11 * 60 + 16),
        (Body::Jupiter, 9 * 60 + 4, 21 * 60 + 30, 15 * 60 + 17),
        (Body::Saturn, 5 * 60 + 28, 17 * 60 + 19, 11 * 60 + 24),
    ];
    for (body, rise, set, transit) in expected {
        for (kind, minutes) in [
            (RiseSetEvent::Rising, rise),
            (RiseSetEvent::Setting, set),
            (RiseSetEvent::Transit, transit),
        ] {
            let r = next_event(&eph, body, &loc, kind, midnight, &cfg).unwrap();
            assert_minutes(&format!("{body} {kind:?}"), r, midnight, minutes as f64);
        }
    }
}

#[test]
fn tromso_polar_night() {
    let eph = Ephemeris::default();
    let start = datetime_to_jd(&Utc.with_ymd_and_hms(2024, 12, 21, 0, 0, 0).unwrap());
    let r = next_event(
        &eph,
        Body::Sun,
        &tromso(),
        RiseSetEvent::Rising,
        start,
        &RiseSetConfig::default(),
    )
    .unwrap();
    assert_eq!(r, RiseSetResult::NeverRises);

    // The Sun still transits, below the horizon.
    let transit = next_event(
        &eph,
        Body::Sun,
        &tromso(),
        RiseSetEvent::Transit,
        start,
        &RiseSetConfig::default(),
    )
    .unwrap();
    assert!(transit.jd_utc().is_some());
}

#[test]
fn tromso_midnight_sun() {
    let eph = Ephemeris::default();
    let start = datetime_to_jd(&Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap());
    let r = next_event(
        &eph,
        Body::Sun,
        &tromso(),
        RiseSetEvent::Setting,
        start,
        &RiseSetConfig::default(),
    )
    .unwrap();
    assert_eq!(r, RiseSetResult::NeverSets);
}

#[test]
fn short_horizon_misses_next_sunrise() {
    let eph = Ephemeris::default();
    let cfg = RiseSetConfig {
        search_horizon_days: 0.05,
        ..Default::default()
    };
    let noon = ist_midnight_jd(2024, 3, 20) + 0.5;
    let r = next_event(&eph, Body::Sun, &kodaikanal(), RiseSetEvent::Rising, noon, &cfg).unwrap();
    assert_eq!(r, RiseSetResult::NoEventInWindow);
}

#[test]
fn dip_correction_moves_sunrise_earlier() {
    let eph = Ephemeris::default();
    let midnight = ist_midnight_jd(2024, 3, 20);
    let plain = sun_times(&eph, &kodaikanal(), midnight, &RiseSetConfig::default()).unwrap();
    let dipped = sun_times(
        &eph,
        &kodaikanal(),
        midnight,
        &RiseSetConfig {
            altitude_correction: true,
            ..Default::default()
        },
    )
    .unwrap();
    let gained = (plain.sunrise.jd_utc().unwrap() - dipped.sunrise.jd_utc().unwrap()) * 1440.0;
    // 2343 m gives a dip of about 1.55 deg, roughly 6 minutes near the equator.
    assert!(gained > 4.0 && gained < 9.0, "gained {gained} min");
}
