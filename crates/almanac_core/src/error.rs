//! Ephemeris engine errors.

use thiserror::Error;

use crate::body::Body;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid ephemeris config: {0}")]
    InvalidConfig(&'static str),
    #[error("epoch is not a finite Julian date")]
    NonFiniteEpoch,
    #[error("JD {jd} outside supported range [{min}, {max}]")]
    EpochOutOfRange { jd: f64, min: f64, max: f64 },
    #[error("no orbital elements for {0}")]
    UnsupportedBody(Body),
}
