//! Rising, setting and transit times for the Sun, Moon and planets.
//!
//! Events are located about each meridian transit with the classical
//! hour-angle method and refined against the body's motion. All times are
//! Julian dates in UT.

pub mod error;
pub mod search;
pub mod sun;
pub mod types;

pub use error::RiseSetError;
pub use search::{event_about_transit, next_event, transit_near};
pub use sun::{SunTimes, sun_times};
pub use types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
