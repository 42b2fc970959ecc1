//! Configuration errors.

use almanac_riseset::RiseSetError;
use almanac_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file or environment could not be read or deserialized.
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] RiseSetError),
    #[error("invalid configuration: {0}")]
    Zone(#[from] TimeError),
}
