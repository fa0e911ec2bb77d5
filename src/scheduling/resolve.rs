//! Schedule resolution for a single calendar date.
//!
//! Resolution is a pure function over a fetched slice of schedule entries.
//! Precedence: an active date-scoped entry matching the date exactly beats
//! any recurring entry; among competing entries the earliest start time
//! wins. Absence of an entry resolves to "no schedule assigned", never to a
//! synthesized default.

use chrono::NaiveDate;

use crate::models::{
    CheckInWindow, ResolvedShift, ScheduleEntry, ScheduleScope, ShiftResolution,
};

use super::classify::classify_shift;
use super::window::check_in_window;

/// Finds the single schedule entry that applies on the given date.
///
/// Applicability is [`ScheduleEntry::applies_on`]; date-scoped matches take
/// precedence over weekday-scoped matches, and ties within either group are
/// broken by earliest start time.
pub fn resolve_entry(entries: &[ScheduleEntry], date: NaiveDate) -> Option<&ScheduleEntry> {
    let date_scoped = entries
        .iter()
        .filter(|entry| matches!(entry.scope, ScheduleScope::Date { .. }))
        .filter(|entry| entry.applies_on(date))
        .min_by_key(|entry| entry.start_time);
    if date_scoped.is_some() {
        return date_scoped;
    }

    entries
        .iter()
        .filter(|entry| matches!(entry.scope, ScheduleScope::Weekday { .. }))
        .filter(|entry| entry.applies_on(date))
        .min_by_key(|entry| entry.start_time)
}

/// Resolves a worker's shift for the given date.
///
/// Returns the provenance-tagged resolution; see [`resolve_entry`] for the
/// precedence rules.
pub fn resolve_shift(entries: &[ScheduleEntry], date: NaiveDate) -> ShiftResolution {
    match resolve_entry(entries, date) {
        Some(entry) => ShiftResolution::IndividualSchedule {
            shift: resolved_shift_for_entry(entry),
        },
        None => ShiftResolution::NoScheduleAssigned,
    }
}

/// Builds the resolved shift for an entry: category, times, and check-in
/// window.
///
/// Window selection in priority order: the entry's strict daily window
/// verbatim (allowed and recommended alike), else its custom window
/// verbatim, else the window computed from the shift times.
pub fn resolved_shift_for_entry(entry: &ScheduleEntry) -> ResolvedShift {
    let category = classify_shift(Some(entry.start_time), entry.end_time);
    let window = if let Some(strict) = &entry.strict_window {
        CheckInWindow::from_override(strict)
    } else if let Some(custom) = &entry.custom_window {
        CheckInWindow::from_override(custom)
    } else {
        check_in_window(category, Some(entry.start_time))
    };

    ResolvedShift {
        entry_id: entry.id,
        category,
        start_time: entry.start_time,
        end_time: entry.end_time,
        window,
    }
}
