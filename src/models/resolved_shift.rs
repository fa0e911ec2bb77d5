//! Derived shift types.
//!
//! A [`ResolvedShift`] is the outcome of resolving a worker's schedule for
//! one calendar date: a shift category, the shift times, and the check-in
//! window positioned before shift start. It is derived, never persisted,
//! except as the snapshot embedded in a check-in record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock_time::ClockTime;
use super::schedule_entry::WindowOverride;

/// The category of a shift, derived from its start and end times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    /// Daytime shift starting in the morning.
    Morning,
    /// Shift starting around midday and ending in the evening.
    Afternoon,
    /// Evening, overnight, or small-hours shift.
    Night,
    /// No time information at all; the worker may check in during the
    /// wide default window.
    Flexible,
}

impl fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftCategory::Morning => write!(f, "morning"),
            ShiftCategory::Afternoon => write!(f, "afternoon"),
            ShiftCategory::Night => write!(f, "night"),
            ShiftCategory::Flexible => write!(f, "flexible"),
        }
    }
}

/// The clock-time interval during which a worker may submit a check-in,
/// with a narrower recommended sub-interval.
///
/// A window whose start compares greater than its end spans midnight;
/// membership testing handles the wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInWindow {
    /// Earliest allowed check-in time.
    pub start: ClockTime,
    /// Latest allowed check-in time.
    pub end: ClockTime,
    /// Start of the recommended sub-window.
    pub recommended_start: ClockTime,
    /// End of the recommended sub-window.
    pub recommended_end: ClockTime,
}

impl CheckInWindow {
    /// The fixed wide window used for flexible shifts and shifts without a
    /// start time: 05:00-23:00, recommended window identical.
    pub const fn flexible() -> Self {
        Self {
            start: ClockTime::new(5, 0),
            end: ClockTime::new(23, 0),
            recommended_start: ClockTime::new(5, 0),
            recommended_end: ClockTime::new(23, 0),
        }
    }

    /// Builds a window from a schedule entry override, verbatim, with the
    /// recommended window equal to the full window.
    pub const fn from_override(window: &WindowOverride) -> Self {
        Self {
            start: window.start,
            end: window.end,
            recommended_start: window.start,
            recommended_end: window.end,
        }
    }

    /// Returns true if the window wraps across midnight.
    pub fn spans_midnight(&self) -> bool {
        self.start > self.end
    }
}

/// A worker's shift for one calendar date, with its check-in window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedShift {
    /// The schedule entry the shift was resolved from.
    pub entry_id: Uuid,
    /// Derived shift category.
    pub category: ShiftCategory,
    /// Shift start time.
    pub start_time: ClockTime,
    /// Shift end time, if the entry declares one.
    pub end_time: Option<ClockTime>,
    /// The check-in window for the shift.
    pub window: CheckInWindow,
}

/// The provenance-tagged outcome of schedule resolution for one date.
///
/// Absence of an individual schedule entry always resolves to
/// [`ShiftResolution::NoScheduleAssigned`]; the engine never synthesizes a
/// default shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ShiftResolution {
    /// The worker has an individual schedule entry for the date.
    IndividualSchedule {
        /// The resolved shift.
        shift: ResolvedShift,
    },
    /// No schedule entry applies on the date.
    NoScheduleAssigned,
}

impl ShiftResolution {
    /// Returns the resolved shift, if one was assigned.
    pub fn shift(&self) -> Option<&ResolvedShift> {
        match self {
            ShiftResolution::IndividualSchedule { shift } => Some(shift),
            ShiftResolution::NoScheduleAssigned => None,
        }
    }

    /// Returns true if an individual schedule entry was resolved.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, ShiftResolution::IndividualSchedule { .. })
    }
}

/// The next date on which a schedule applies, with the resolved shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextShift {
    /// The concrete calendar date of the occurrence.
    pub date: NaiveDate,
    /// The shift resolved for that date.
    pub shift: ResolvedShift,
}
