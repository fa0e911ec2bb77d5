//! Schedule entry model.
//!
//! A schedule entry is one row of a worker's assignable work pattern,
//! either bound to a single calendar date or recurring on a weekday.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::clock_time::ClockTime;

/// A day-of-week index, 0 = Sunday through 6 = Saturday.
///
/// The inner index is private; [`Weekday::new`] is the only way to build
/// one from a raw number, so an out-of-range index fails with
/// [`EngineError::InvalidWeekday`] at construction and deserialization
/// instead of silently never matching any date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
    /// Creates a weekday from an index, validating the 0 (Sunday) to
    /// 6 (Saturday) range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWeekday`] for indices above 6.
    pub fn new(index: u8) -> EngineResult<Self> {
        if index > 6 {
            return Err(EngineError::InvalidWeekday { value: index });
        }
        Ok(Self(index))
    }

    /// Returns the weekday of the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.weekday().num_days_from_sunday() as u8)
    }

    /// Returns the index, 0 = Sunday through 6 = Saturday.
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Weekday {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(value: Weekday) -> Self {
        value.0
    }
}

/// The scope of a schedule entry: a specific date or a recurring weekday.
///
/// A row is either date-scoped or weekday-scoped, never both; the enum
/// makes the mutual exclusion unrepresentable rather than checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleScope {
    /// Bound to one specific calendar date.
    Date {
        /// The calendar date the entry applies to.
        date: NaiveDate,
    },
    /// Recurring on a day of the week.
    Weekday {
        /// The day of the week the entry recurs on.
        weekday: Weekday,
    },
}

impl ScheduleScope {
    /// Creates a weekday scope, validating the 0 (Sunday) to 6 (Saturday)
    /// range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWeekday`] for indices above 6.
    pub fn weekday(index: u8) -> EngineResult<Self> {
        Ok(Self::Weekday {
            weekday: Weekday::new(index)?,
        })
    }

    /// Returns true if this scope matches the given calendar date.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Date { date: scoped } => scoped == date,
            Self::Weekday { weekday } => weekday == Weekday::from_date(date),
        }
    }
}

/// A custom check-in window attached to a schedule entry.
///
/// Override windows are applied verbatim; the engine never recomputes or
/// adjusts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOverride {
    /// Earliest allowed check-in time.
    pub start: ClockTime,
    /// Latest allowed check-in time.
    pub end: ClockTime,
}

/// One row of a worker's assignable work pattern.
///
/// The engine only reads active rows and never mutates them. Deactivation
/// (including the bulk deactivation a downstream collaborator performs when
/// an unfit-for-work check-in is recorded) happens in the record store and
/// becomes visible here on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The worker this entry belongs to.
    pub worker_id: String,
    /// Date-scoped or weekday-scoped applicability.
    pub scope: ScheduleScope,
    /// Shift start time.
    pub start_time: ClockTime,
    /// Shift end time. An end earlier than the start implies an overnight
    /// span.
    #[serde(default)]
    pub end_time: Option<ClockTime>,
    /// Whether the entry is currently assignable.
    pub active: bool,
    /// First date a recurring entry applies (unbounded if absent).
    #[serde(default)]
    pub effective_from: Option<NaiveDate>,
    /// Last date a recurring entry applies (unbounded if absent).
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
    /// Optional custom check-in window, used verbatim instead of the
    /// computed window.
    #[serde(default)]
    pub custom_window: Option<WindowOverride>,
    /// Optional strict daily check-in window. Takes precedence over
    /// `custom_window` and is used verbatim as both the allowed and the
    /// recommended window.
    #[serde(default)]
    pub strict_window: Option<WindowOverride>,
}

impl ScheduleEntry {
    /// Returns true if this entry applies on the given date.
    ///
    /// Active rows only. Effective/expiry bounds are checked for recurring
    /// entries; a date-scoped entry applies on its exact date regardless of
    /// bounds.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        if !self.active || !self.scope.matches(date) {
            return false;
        }
        match self.scope {
            ScheduleScope::Date { .. } => true,
            ScheduleScope::Weekday { .. } => self.bounds_contain(date),
        }
    }

    /// Returns true if the effective/expiry bounds admit the given date.
    pub fn bounds_contain(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.effective_from {
            if date < from {
                return false;
            }
        }
        if let Some(until) = self.expires_on {
            if date > until {
                return false;
            }
        }
        true
    }
}
