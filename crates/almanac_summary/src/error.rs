//! Error types for observer queries and report assembly.

use almanac_core::EngineError;
use almanac_riseset::RiseSetError;
use almanac_time::TimeError;
use thiserror::Error;

/// Failure of a single observer query.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ObserverError {
    #[error("time conversion: {0}")]
    Time(#[from] TimeError),
    #[error("ephemeris: {0}")]
    Ephemeris(#[from] EngineError),
    #[error("event search: {0}")]
    Search(#[from] RiseSetError),
    /// The Sun does not reach the horizon on the requested day.
    #[error("{0}")]
    SunEvent(&'static str),
    /// Failure reported by an external provider.
    #[error("provider: {0}")]
    Provider(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("moon illumination unavailable: {0}")]
    Illumination(#[source] ObserverError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
