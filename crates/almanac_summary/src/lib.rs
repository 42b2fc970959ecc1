//! Astronomy summary for an observing site.
//!
//! - [`classify_illumination`] turns a lunar illumination percentage into
//!   one of eight phase names.
//! - [`lookup`] gathers rise, set and transit times for one body, rendering
//!   any missing or failed event as `"N/A"`.
//! - [`build_day_report`] assembles both into a [`DayReport`].
//!
//! The lookups are written against the [`EphemerisObserver`] and
//! [`SunTimingProvider`] traits; [`EngineObserver`] implements them with the
//! bundled ephemeris.

pub mod engine_observer;
pub mod error;
pub mod moon_phase;
pub mod observer;
pub mod report;
pub mod timing;

pub use engine_observer::EngineObserver;
pub use error::{ObserverError, ReportError};
pub use moon_phase::{MoonPhase, classify_illumination};
pub use observer::{EphemerisObserver, EventKind, ObserverContext, SunTimes, SunTimingProvider};
pub use report::{DayReport, MoonSummary, PlanetRow, SunSummary, build_day_report};
pub use timing::{BodyTiming, BodyTimingResult, EventOutcome, lookup, lookup_body_timing};
