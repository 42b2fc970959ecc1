//! Sunrise, solar noon and sunset for a civil day.

use almanac_core::{Body, Ephemeris};

use crate::error::RiseSetError;
use crate::search::{event_about_transit, transit_near};
use crate::types::{GeoLocation, RiseSetConfig, RiseSetResult};

/// Solar events of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: RiseSetResult,
    /// Upper transit of the Sun, JD UT.
    pub solar_noon_jd: f64,
    pub sunset: RiseSetResult,
}

/// Sun times for the civil day beginning at `jd_day_start` (UT).
///
/// Uses the transit nearest the middle of the day, the rising before it and
/// the setting after it.
pub fn sun_times(
    eph: &Ephemeris,
    location: &GeoLocation,
    jd_day_start: f64,
    config: &RiseSetConfig,
) -> Result<SunTimes, RiseSetError> {
    location.validate()?;
    config.validate()?;

    let noon = transit_near(eph, Body::Sun, location, jd_day_start + 0.5)?;
    let sunrise = event_about_transit(eph, Body::Sun, location, noon, true, config)?;
    let sunset = event_about_transit(eph, Body::Sun, location, noon, false, config)?;
    Ok(SunTimes {
        sunrise,
        solar_noon_jd: noon,
        sunset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_equinox_day_is_symmetric() {
        let eph = Ephemeris::default();
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let st = sun_times(&eph, &loc, 2_460_389.5, &RiseSetConfig::default()).unwrap();
        let rise = st.sunrise.jd_utc().unwrap();
        let set = st.sunset.jd_utc().unwrap();
        let morning = st.solar_noon_jd - rise;
        let afternoon = set - st.solar_noon_jd;
        assert!((morning - afternoon).abs() < 1.0 / 1440.0);
        // Greenwich apparent noon on 20 March is about 12:07 UT.
        let noon_hours = (st.solar_noon_jd - 2_460_389.5) * 24.0;
        assert!((noon_hours - 12.12).abs() < 0.05, "noon at {noon_hours} h UT");
    }

    #[test]
    fn polar_night_reported() {
        let eph = Ephemeris::default();
        let loc = GeoLocation::new(78.22, 15.65, 0.0);
        let st = sun_times(&eph, &loc, 2_460_665.5, &RiseSetConfig::default()).unwrap();
        assert_eq!(st.sunrise, RiseSetResult::NeverRises);
        assert_eq!(st.sunset, RiseSetResult::NeverRises);
    }
}
