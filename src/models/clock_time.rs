//! Naive wall-clock time of day.
//!
//! All check-in window arithmetic happens on times without dates. Any
//! computation that crosses midnight is represented purely by wraparound;
//! callers track which calendar day a wrapped time belongs to when that
//! matters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day in 24-hour `HH:MM` form.
///
/// Ordering is lexicographic on (hour, minute), which is the comparator used
/// for all window membership and clamping decisions in the engine.
///
/// # Example
///
/// ```
/// use checkin_engine::models::ClockTime;
///
/// let start = ClockTime::parse("09:30").unwrap();
/// assert_eq!(start.subtract_hours(4).to_string(), "05:30");
/// // Subtraction wraps across midnight rather than failing.
/// assert_eq!(ClockTime::new(2, 0).subtract_hours(4).to_string(), "22:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Creates a time from an hour (0-23) and minute (0-59).
    ///
    /// # Panics
    ///
    /// Panics if either component is out of range. Use [`ClockTime::parse`]
    /// for untrusted input; it fails fast with a validation error instead.
    pub const fn new(hour: u32, minute: u32) -> Self {
        assert!(hour < 24, "hour out of range");
        assert!(minute < 60, "minute out of range");
        Self { hour, minute }
    }

    /// Parses a strict 24-hour `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`] when the string is not two
    /// colon-separated numeric fields or either field is out of range.
    pub fn parse(s: &str) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidTime {
            value: s.to_string(),
            message: message.to_string(),
        };

        let (hour_part, minute_part) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;
        if minute_part.contains(':') {
            return Err(invalid("expected HH:MM"));
        }

        let hour: u32 = hour_part
            .parse()
            .map_err(|_| invalid("hour is not a number"))?;
        let minute: u32 = minute_part
            .parse()
            .map_err(|_| invalid("minute is not a number"))?;

        if hour >= 24 {
            return Err(invalid("hour out of range"));
        }
        if minute >= 60 {
            return Err(invalid("minute out of range"));
        }

        Ok(Self { hour, minute })
    }

    /// Returns the hour component (0-23).
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute component (0-59).
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the number of minutes since midnight.
    pub const fn total_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Builds a time from a minutes-since-midnight count, wrapping modulo
    /// one day.
    pub const fn from_minutes(minutes: u32) -> Self {
        let wrapped = minutes % MINUTES_PER_DAY;
        Self {
            hour: wrapped / 60,
            minute: wrapped % 60,
        }
    }

    /// Subtracts a whole number of hours, wrapping across midnight.
    ///
    /// Computes `(h*60 + m - n*60) mod 1440` and always returns a valid
    /// time; a result that lands on the previous calendar day is expressed
    /// purely by the wrapped value.
    pub const fn subtract_hours(self, hours: u32) -> Self {
        let offset = (hours % 24) * 60;
        Self::from_minutes(self.total_minutes() + MINUTES_PER_DAY - offset)
    }

    /// Adds a whole number of hours, wrapping across midnight.
    pub const fn add_hours(self, hours: u32) -> Self {
        let offset = (hours % 24) * 60;
        Self::from_minutes(self.total_minutes() + offset)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
