//! The daily astronomy report.

use almanac_core::{Body, PLANETS};
use almanac_time::NOT_AVAILABLE;
use chrono::NaiveDate;

use crate::error::ReportError;
use crate::moon_phase::{MoonPhase, classify_illumination};
use crate::observer::{EphemerisObserver, ObserverContext, SunTimingProvider};
use crate::timing::{BodyTimingResult, lookup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunSummary {
    pub sunrise: String,
    pub solar_noon: String,
    pub sunset: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoonSummary {
    pub illumination_pct: f64,
    pub phase: MoonPhase,
    pub timing: BodyTimingResult,
}

impl MoonSummary {
    /// e.g. `74.9% (Waxing Gibbous)`.
    pub fn illumination_text(&self) -> String {
        format!("{:.1}% ({})", self.illumination_pct, self.phase)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetRow {
    pub body: Body,
    pub timing: BodyTimingResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub date: NaiveDate,
    /// Abbreviation of the display zone on this date, e.g. `IST`.
    pub zone_abbreviation: String,
    pub sun: SunSummary,
    pub moon: MoonSummary,
    /// Mercury, Venus, Mars, Jupiter, Saturn.
    pub planets: Vec<PlanetRow>,
}

impl DayReport {
    pub fn planet_column_headers(&self) -> [String; 3] {
        let z = &self.zone_abbreviation;
        [format!("Rise ({z})"), format!("Set ({z})"), format!("Zenith ({z})")]
    }
}

/// Assemble the report for the context's date.
///
/// A failing sun provider leaves all three sun fields `"N/A"`; a failing
/// illumination query fails the report.
#[tracing::instrument(level = "debug", skip_all, fields(date = %ctx.date()))]
pub fn build_day_report<O, S>(
    observer: &O,
    sun_provider: &S,
    ctx: &ObserverContext,
) -> Result<DayReport, ReportError>
where
    O: EphemerisObserver + ?Sized,
    S: SunTimingProvider + ?Sized,
{
    let as_of = ctx.as_of_instant()?;
    let zone = ctx.zone();

    let sun = match sun_provider.sun_times(ctx) {
        Ok(times) => SunSummary {
            sunrise: zone.format_clock(&times.sunrise),
            solar_noon: zone.format_clock(&times.solar_noon),
            sunset: zone.format_clock(&times.sunset),
        },
        Err(err) => {
            tracing::warn!(error = %err, "sun times unavailable");
            SunSummary {
                sunrise: NOT_AVAILABLE.to_string(),
                solar_noon: NOT_AVAILABLE.to_string(),
                sunset: NOT_AVAILABLE.to_string(),
            }
        }
    };

    let illumination_pct = observer
        .moon_illumination(ctx)
        .map_err(ReportError::Illumination)?;
    let moon = MoonSummary {
        illumination_pct,
        phase: classify_illumination(illumination_pct),
        timing: lookup(observer, ctx, Body::Moon),
    };

    let planets = PLANETS
        .into_iter()
        .map(|body| PlanetRow {
            body,
            timing: lookup(observer, ctx, body),
        })
        .collect();

    Ok(DayReport {
        date: ctx.date(),
        zone_abbreviation: zone.abbreviation(&as_of),
        sun,
        moon,
        planets,
    })
}
