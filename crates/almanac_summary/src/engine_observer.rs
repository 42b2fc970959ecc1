//! Observer backed by the bundled ephemeris and event search.

use almanac_core::{Body, Ephemeris};
use almanac_riseset::{RiseSetConfig, RiseSetResult, next_event, sun_times};
use almanac_time::{datetime_to_jd, jd_to_datetime};
use chrono::{DateTime, Utc};

use crate::error::ObserverError;
use crate::observer::{EphemerisObserver, EventKind, ObserverContext, SunTimes, SunTimingProvider};

/// [`EphemerisObserver`] and [`SunTimingProvider`] over [`Ephemeris`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineObserver {
    ephemeris: Ephemeris,
    config: RiseSetConfig,
}

impl EngineObserver {
    pub fn new(ephemeris: Ephemeris, config: RiseSetConfig) -> Self {
        Self { ephemeris, config }
    }

    pub fn ephemeris(&self) -> &Ephemeris {
        &self.ephemeris
    }

    pub fn config(&self) -> &RiseSetConfig {
        &self.config
    }

    fn start_jd(ctx: &ObserverContext) -> Result<f64, ObserverError> {
        Ok(datetime_to_jd(&ctx.as_of_instant()?))
    }
}

impl EphemerisObserver for EngineObserver {
    fn next_event(
        &self,
        ctx: &ObserverContext,
        body: Body,
        kind: EventKind,
    ) -> Result<Option<DateTime<Utc>>, ObserverError> {
        let start = Self::start_jd(ctx)?;
        let result = next_event(
            &self.ephemeris,
            body,
            ctx.location(),
            kind,
            start,
            &self.config,
        )?;
        match result.jd_utc() {
            Some(jd) => Ok(Some(jd_to_datetime(jd)?)),
            None => Ok(None),
        }
    }

    fn moon_illumination(&self, ctx: &ObserverContext) -> Result<f64, ObserverError> {
        let jd = Self::start_jd(ctx)?;
        Ok(self.ephemeris.moon_illumination_percent(jd)?)
    }
}

impl SunTimingProvider for EngineObserver {
    fn sun_times(&self, ctx: &ObserverContext) -> Result<SunTimes, ObserverError> {
        let day_start = datetime_to_jd(&ctx.local_day_start()?);
        let st = sun_times(&self.ephemeris, ctx.location(), day_start, &self.config)?;
        Ok(SunTimes {
            sunrise: horizon_instant(st.sunrise)?,
            solar_noon: jd_to_datetime(st.solar_noon_jd)?,
            sunset: horizon_instant(st.sunset)?,
        })
    }
}

fn horizon_instant(result: RiseSetResult) -> Result<DateTime<Utc>, ObserverError> {
    match result {
        RiseSetResult::Event { jd_utc, .. } => Ok(jd_to_datetime(jd_utc)?),
        RiseSetResult::NeverRises => Err(ObserverError::SunEvent(
            "the sun stays below the horizon all day",
        )),
        RiseSetResult::NeverSets => Err(ObserverError::SunEvent(
            "the sun stays above the horizon all day",
        )),
        RiseSetResult::NoEventInWindow => {
            Err(ObserverError::SunEvent("no sun event on this day"))
        }
    }
}
