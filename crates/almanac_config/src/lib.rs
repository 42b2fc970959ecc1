//! Site, display-zone and search configuration.
//!
//! Values are layered: compiled defaults (Kodaikanal Solar Observatory),
//! then an optional TOML file, then `ALMANAC__`-prefixed environment
//! variables such as `ALMANAC__SITE__LATITUDE_DEG=28.61`.

pub mod error;

use std::path::Path;

use almanac_riseset::{GeoLocation, RiseSetConfig};
use almanac_time::{DisplayZone, MidnightBasis};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "almanac.toml";

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "ALMANAC";

/// Observing site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    /// IANA zone used for every displayed time.
    pub timezone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Kodaikanal Solar Observatory".to_string(),
            latitude_deg: 10.2306,
            longitude_deg: 77.4686,
            altitude_m: 2343.0,
            timezone: "Asia/Kolkata".to_string(),
        }
    }
}

/// Horizon model and search window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub refraction_arcmin: f64,
    pub sun_semidiameter_arcmin: f64,
    pub altitude_correction: bool,
    pub search_horizon_days: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let rs = RiseSetConfig::default();
        Self {
            refraction_arcmin: rs.refraction_arcmin,
            sun_semidiameter_arcmin: rs.sun_semidiameter_arcmin,
            altitude_correction: rs.altitude_correction,
            search_horizon_days: rs.search_horizon_days,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmanacConfig {
    pub site: SiteConfig,
    pub search: SearchConfig,
    /// Whether a selected date starts at UTC (default) or local midnight.
    pub midnight: MidnightBasis,
}

impl AlmanacConfig {
    /// Load defaults, then `path` (or `almanac.toml` if present), then the
    /// environment, and validate the result.
    ///
    /// An explicitly given file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config file");
                builder = builder.add_source(File::from(p).format(FileFormat::Toml).required(true));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                tracing::debug!(path = DEFAULT_CONFIG_FILE, "loading config file");
                builder = builder.add_source(
                    File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
                );
            }
            None => {}
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a TOML document on top of the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let cfg: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.location().validate()?;
        self.riseset_config().validate()?;
        self.zone()?;
        Ok(())
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(
            self.site.latitude_deg,
            self.site.longitude_deg,
            self.site.altitude_m,
        )
    }

    pub fn zone(&self) -> Result<DisplayZone, ConfigError> {
        Ok(DisplayZone::parse(&self.site.timezone)?)
    }

    pub fn riseset_config(&self) -> RiseSetConfig {
        RiseSetConfig {
            refraction_arcmin: self.search.refraction_arcmin,
            sun_semidiameter_arcmin: self.search.sun_semidiameter_arcmin,
            altitude_correction: self.search.altitude_correction,
            search_horizon_days: self.search.search_horizon_days,
        }
    }
}
