//! Next-occurrence search.
//!
//! Finds the next date on which a worker's schedule applies, from a single
//! bulk read of their entries. Date-scoped entries are checked first; the
//! recurring entries are grouped by weekday once, so the forward scan does
//! no per-day store work.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::config::EnginePolicy;
use crate::models::{NextShift, ScheduleEntry, ScheduleScope, Weekday};

use super::resolve::resolved_shift_for_entry;

/// Finds the next date on or after `from` with an applicable schedule.
///
/// Active date-scoped entries dated on or after `from` win outright: the
/// one with the smallest date (ties broken by earliest start time) is
/// returned without scanning. Otherwise recurring entries are grouped by
/// weekday and the search walks forward day by day, bounded by
/// `policy.next_occurrence_horizon_days`, filtering each candidate by its
/// effective/expiry bounds against the concrete date. Returns `None` when
/// the horizon is exhausted.
pub fn find_next_occurrence(
    entries: &[ScheduleEntry],
    from: NaiveDate,
    policy: &EnginePolicy,
) -> Option<NextShift> {
    let active: Vec<&ScheduleEntry> = entries.iter().filter(|entry| entry.active).collect();

    let upcoming_dated = active
        .iter()
        .filter_map(|entry| match entry.scope {
            ScheduleScope::Date { date } if date >= from => Some((date, *entry)),
            _ => None,
        })
        .min_by_key(|(date, entry)| (*date, entry.start_time));
    if let Some((date, entry)) = upcoming_dated {
        return Some(NextShift {
            date,
            shift: resolved_shift_for_entry(entry),
        });
    }

    let mut by_weekday: HashMap<Weekday, Vec<&ScheduleEntry>> = HashMap::new();
    for entry in &active {
        if let ScheduleScope::Weekday { weekday } = entry.scope {
            by_weekday.entry(weekday).or_default().push(entry);
        }
    }
    for candidates in by_weekday.values_mut() {
        candidates.sort_by_key(|entry| entry.start_time);
    }
    if by_weekday.is_empty() {
        return None;
    }

    for offset in 0..policy.next_occurrence_horizon_days {
        let day = from.checked_add_days(Days::new(u64::from(offset)))?;
        let Some(candidates) = by_weekday.get(&Weekday::from_date(day)) else {
            continue;
        };
        if let Some(entry) = candidates.iter().find(|entry| entry.bounds_contain(day)) {
            return Some(NextShift {
                date: day,
                shift: resolved_shift_for_entry(entry),
            });
        }
    }

    None
}
