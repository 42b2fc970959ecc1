//! Rise, set and transit lookup for a single body.
//!
//! The three queries are independent: a failure in one leaves the other two
//! intact, and no error leaves [`lookup`].

use almanac_core::Body;
use almanac_time::{DisplayZone, NOT_AVAILABLE};
use chrono::{DateTime, Utc};

use crate::error::ObserverError;
use crate::observer::{EphemerisObserver, EventKind, ObserverContext};

/// Outcome of one event query.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Found(DateTime<Utc>),
    /// No such event within the search window.
    Absent,
    Failed(ObserverError),
}

impl EventOutcome {
    pub fn instant(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Found(t) => Some(t),
            Self::Absent | Self::Failed(_) => None,
        }
    }

    /// `hh:mm AM/PM` in `zone`, or `"N/A"` for absent and failed events.
    pub fn display(&self, zone: &DisplayZone) -> String {
        zone.format_event(self.instant())
    }
}

impl From<Result<Option<DateTime<Utc>>, ObserverError>> for EventOutcome {
    fn from(result: Result<Option<DateTime<Utc>>, ObserverError>) -> Self {
        match result {
            Ok(Some(t)) => Self::Found(t),
            Ok(None) => Self::Absent,
            Err(e) => Self::Failed(e),
        }
    }
}

/// Typed rise/set/transit outcomes for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTiming {
    pub body: Body,
    pub rise: EventOutcome,
    pub set: EventOutcome,
    pub transit: EventOutcome,
}

impl BodyTiming {
    pub fn display(&self, zone: &DisplayZone) -> BodyTimingResult {
        BodyTimingResult {
            rise: self.rise.display(zone),
            set: self.set.display(zone),
            transit: self.transit.display(zone),
        }
    }
}

/// Rendered `(rise, set, transit)` clock strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyTimingResult {
    pub rise: String,
    pub set: String,
    pub transit: String,
}

impl BodyTimingResult {
    pub fn all_unavailable() -> Self {
        Self {
            rise: NOT_AVAILABLE.to_string(),
            set: NOT_AVAILABLE.to_string(),
            transit: NOT_AVAILABLE.to_string(),
        }
    }

    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (&self.rise, &self.set, &self.transit)
    }
}

/// Query next rising, setting and transit of `body` after the as-of instant.
pub fn lookup_body_timing<O>(observer: &O, ctx: &ObserverContext, body: Body) -> BodyTiming
where
    O: EphemerisObserver + ?Sized,
{
    let query = |kind: EventKind| {
        let outcome = EventOutcome::from(observer.next_event(ctx, body, kind));
        if let EventOutcome::Failed(err) = &outcome {
            tracing::debug!(%body, event = kind.name(), date = %ctx.date(), error = %err, "event lookup failed");
        }
        outcome
    };
    BodyTiming {
        body,
        rise: query(EventKind::Rising),
        set: query(EventKind::Setting),
        transit: query(EventKind::Transit),
    }
}

/// Rise, set and transit of `body` rendered in the context's display zone.
pub fn lookup<O>(observer: &O, ctx: &ObserverContext, body: Body) -> BodyTimingResult
where
    O: EphemerisObserver + ?Sized,
{
    lookup_body_timing(observer, ctx, body).display(ctx.zone())
}
