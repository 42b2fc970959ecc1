//! Observer context and the collaborator traits behind the summary.

use almanac_core::Body;
use almanac_riseset::{GeoLocation, RiseSetEvent};
use almanac_time::{DisplayZone, MidnightBasis, TimeError};
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ObserverError;

/// Which event an observer query asks for.
pub type EventKind = RiseSetEvent;

/// Where and when events are computed.
///
/// Immutable: asking about another date produces a new context, so one
/// observer can serve queries for different dates in any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverContext {
    location: GeoLocation,
    date: NaiveDate,
    zone: DisplayZone,
    basis: MidnightBasis,
}

impl ObserverContext {
    pub fn new(location: GeoLocation, date: NaiveDate, zone: DisplayZone) -> Self {
        Self {
            location,
            date,
            zone,
            basis: MidnightBasis::default(),
        }
    }

    pub fn with_midnight_basis(self, basis: MidnightBasis) -> Self {
        Self { basis, ..self }
    }

    /// Same site and zone, different as-of date.
    pub fn at_date(&self, date: NaiveDate) -> Self {
        Self { date, ..*self }
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn zone(&self) -> &DisplayZone {
        &self.zone
    }

    pub fn midnight_basis(&self) -> MidnightBasis {
        self.basis
    }

    /// Instant all "next event" queries start from: midnight of the as-of
    /// date on the configured basis.
    pub fn as_of_instant(&self) -> Result<DateTime<Utc>, TimeError> {
        self.zone.midnight(self.date, self.basis)
    }

    /// Start of the civil day in the display zone, whatever the basis.
    pub fn local_day_start(&self) -> Result<DateTime<Utc>, TimeError> {
        self.zone.midnight(self.date, MidnightBasis::Local)
    }
}

/// Next-event and illumination queries for a site.
///
/// `Ok(None)` means the body does not produce the event within the search
/// window (e.g. it is circumpolar); `Err` means the query itself failed.
pub trait EphemerisObserver {
    fn next_event(
        &self,
        ctx: &ObserverContext,
        body: Body,
        kind: EventKind,
    ) -> Result<Option<DateTime<Utc>>, ObserverError>;

    /// Illuminated percentage of the Moon at the as-of instant.
    fn moon_illumination(&self, ctx: &ObserverContext) -> Result<f64, ObserverError>;

    fn next_rising(
        &self,
        ctx: &ObserverContext,
        body: Body,
    ) -> Result<Option<DateTime<Utc>>, ObserverError> {
        self.next_event(ctx, body, EventKind::Rising)
    }

    fn next_setting(
        &self,
        ctx: &ObserverContext,
        body: Body,
    ) -> Result<Option<DateTime<Utc>>, ObserverError> {
        self.next_event(ctx, body, EventKind::Setting)
    }

    fn next_transit(
        &self,
        ctx: &ObserverContext,
        body: Body,
    ) -> Result<Option<DateTime<Utc>>, ObserverError> {
        self.next_event(ctx, body, EventKind::Transit)
    }
}

/// Sunrise, solar noon and sunset of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub solar_noon: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// Sun timing for the context's date as a civil day in the display zone.
///
/// Fails as a whole when any of the three events is missing.
pub trait SunTimingProvider {
    fn sun_times(&self, ctx: &ObserverContext) -> Result<SunTimes, ObserverError>;
}
