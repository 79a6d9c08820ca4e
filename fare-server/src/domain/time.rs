//! Time-of-day handling for fare lookups.
//!
//! Fare authorities take times as HHMM integers (e.g. `1600` for 4pm).
//! Peak status is derived from that integer and whether the day is a
//! weekday.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

/// Weekday morning peak window, inclusive at both ends.
pub const MORNING_PEAK: RangeInclusive<u16> = 630..=930;

/// Weekday evening peak window, inclusive at both ends.
pub const EVENING_PEAK: RangeInclusive<u16> = 1600..=1900;

/// Error returned when parsing an invalid time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day stored as an HHMM integer.
///
/// # Examples
///
/// ```
/// use fare_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse("0930").unwrap();
/// assert_eq!(t.hhmm(), 930);
/// assert_eq!(t.to_string(), "0930");
///
/// assert!(TimeOfDay::parse("2400").is_err());
/// assert!(TimeOfDay::parse("1260").is_err());
/// assert!(TimeOfDay::parse("9:30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from hour and minute. Panics if out of range, which is a
    /// compile error when used in a `const`.
    pub const fn hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "time of day out of range");
        Self(hour * 100 + minute)
    }

    /// Build from an HHMM integer, checking hour and minute ranges.
    pub fn from_hhmm(hhmm: u16) -> Result<Self, TimeError> {
        if hhmm / 100 > 23 {
            return Err(TimeError::new("hour must be 00-23"));
        }
        if hhmm % 100 > 59 {
            return Err(TimeError::new("minute must be 00-59"));
        }
        Ok(Self(hhmm))
    }

    /// Parse an HHMM string. Leading zeros are optional (`"900"` is 09:00).
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        if s.is_empty() || s.len() > 4 {
            return Err(TimeError::new("expected 1-4 digit HHMM"));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::new("expected digits only"));
        }
        let hhmm: u16 = s
            .parse()
            .map_err(|_| TimeError::new("expected 1-4 digit HHMM"))?;
        Self::from_hhmm(hhmm)
    }

    /// Truncate a wall-clock time to the minute.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        // hour() < 24 and minute() < 60, so this is always in range
        Self((time.hour() * 100 + time.minute()) as u16)
    }

    /// The HHMM integer.
    pub fn hhmm(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 100
    }

    pub fn minute(&self) -> u16 {
        self.0 % 100
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Whether a journey at `time` is charged at peak rates.
///
/// Peak applies on weekdays only, in either window. Both window ends are
/// peak.
///
/// # Examples
///
/// ```
/// use fare_server::domain::{TimeOfDay, is_peak};
///
/// let t = |s: &str| TimeOfDay::parse(s).unwrap();
/// assert!(is_peak(t("0630"), true));
/// assert!(!is_peak(t("0629"), true));
/// assert!(!is_peak(t("0800"), false));
/// ```
pub fn is_peak(time: TimeOfDay, weekday: bool) -> bool {
    weekday && (MORNING_PEAK.contains(&time.0) || EVENING_PEAK.contains(&time.0))
}
