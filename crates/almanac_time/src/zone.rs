//! Display timezone, local midnight and 12-hour clock formatting.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Rendered in place of a time when an event does not occur or failed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Minutes of skipped local time searched past midnight. Whole calendar
/// days have been dropped (Pacific/Apia, 2011-12-30).
const MAX_GAP_MINUTES: i64 = 48 * 60;

/// Which midnight an as-of calendar date resolves to.
///
/// Defaults to UTC: a bare calendar date is read as 00:00 UTC, so Kodaikanal
/// queries start at 05:30 IST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MidnightBasis {
    /// 00:00 in the display zone.
    Local,
    /// 00:00 UTC of the same calendar date.
    #[default]
    Utc,
}

/// Timezone used for every rendered clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    tz: Tz,
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Kolkata)
    }
}

impl DisplayZone {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Look up an IANA zone name such as `Asia/Kolkata`.
    pub fn parse(name: &str) -> Result<Self, TimeError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| TimeError::UnknownZone(name.to_string()))
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// IANA name of the zone.
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    pub fn to_local(&self, t: &DateTime<Utc>) -> DateTime<Tz> {
        t.with_timezone(&self.tz)
    }

    pub fn now(&self) -> DateTime<Tz> {
        self.to_local(&Utc::now())
    }

    /// Today's calendar date in the zone.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// UTC instant of midnight on `date`.
    ///
    /// With [`MidnightBasis::Local`], an ambiguous midnight resolves to the
    /// earlier instant and a midnight skipped by DST to the first local
    /// minute after the gap (01:00 when clocks jump from 00:00).
    pub fn midnight(&self, date: NaiveDate, basis: MidnightBasis) -> Result<DateTime<Utc>, TimeError> {
        let naive = date.and_time(NaiveTime::MIN);
        match basis {
            MidnightBasis::Utc => Ok(Utc.from_utc_datetime(&naive)),
            MidnightBasis::Local => {
                for minutes in 0..MAX_GAP_MINUTES {
                    let local = naive + TimeDelta::minutes(minutes);
                    if let Some(t) = self.tz.from_local_datetime(&local).earliest() {
                        return Ok(t.with_timezone(&Utc));
                    }
                }
                Err(TimeError::NonexistentMidnight {
                    date,
                    zone: self.name(),
                })
            }
        }
    }

    /// `hh:mm AM/PM` in the zone.
    pub fn format_clock(&self, t: &DateTime<Utc>) -> String {
        self.to_local(t).format("%I:%M %p").to_string()
    }

    /// `hh:mm:ss AM/PM` in the zone.
    pub fn format_clock_seconds(&self, t: &DateTime<Utc>) -> String {
        self.to_local(t).format("%I:%M:%S %p").to_string()
    }

    /// Clock time of an optional event, or [`NOT_AVAILABLE`].
    pub fn format_event(&self, t: Option<&DateTime<Utc>>) -> String {
        match t {
            Some(t) => self.format_clock(t),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Zone abbreviation in effect at `t`, e.g. `IST`.
    pub fn abbreviation(&self, t: &DateTime<Utc>) -> String {
        self.to_local(t).format("%Z").to_string()
    }
}
