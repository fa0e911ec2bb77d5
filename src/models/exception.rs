//! Exception period model.
//!
//! An exception period is a leave or incident interval during which a
//! worker's missed check-ins are excused. Excused days are transparent to
//! the streak engine: they neither extend nor break a streak.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A leave or incident period for a worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionPeriod {
    /// Unique identifier for the period.
    pub id: Uuid,
    /// The worker this period belongs to.
    pub worker_id: String,
    /// First date covered by the period.
    pub start_date: NaiveDate,
    /// Last date covered; the period is open-ended if absent.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether the period is active.
    pub active: bool,
    /// When set, retroactively closes the period: dates on or after the
    /// deactivation date are no longer covered.
    #[serde(default)]
    pub deactivated_at: Option<NaiveDateTime>,
}

impl ExceptionPeriod {
    /// Returns true if the period is in effect on the given date.
    ///
    /// In effect on date `d` iff the period is active, `d >= start_date`,
    /// `d <= end_date` (or no end date), and the deactivation date, if any,
    /// falls strictly after `d`.
    pub fn in_effect_on(&self, date: NaiveDate) -> bool {
        if !self.active {
            return false;
        }
        if date < self.start_date {
            return false;
        }
        if let Some(end) = self.end_date {
            if date > end {
                return false;
            }
        }
        if let Some(deactivated) = self.deactivated_at {
            if deactivated.date() <= date {
                return false;
            }
        }
        true
    }
}
