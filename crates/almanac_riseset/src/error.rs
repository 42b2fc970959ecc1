//! Error types for the event search.

use almanac_core::EngineError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RiseSetError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    #[error("invalid rise/set config: {0}")]
    InvalidConfig(&'static str),
}
