//! Check-in window computation and membership testing.
//!
//! The window always precedes shift start. The adjustment passes below are
//! intentionally heuristic and asymmetric, with multiple overlapping special
//! cases for early-morning and late-night shifts; their ordering is part of
//! the algorithm, since later passes override earlier ones. Do not reorder
//! or merge them.

use crate::models::{CheckInWindow, ClockTime, ShiftCategory};

/// Derives the check-in window for a shift.
///
/// Flexible shifts (and any shift without a start time) get the fixed wide
/// 05:00-23:00 window. Every other shift starts from the naive window
/// [start-4h, start-1h] with a recommended sub-window [start-3h, start-1h],
/// then runs three adjustment passes in order:
///
/// 1. Shifts starting before 06:00 whose naive window wrapped into the
///    previous evening are recomputed: from 04:00 the window becomes
///    [00:00, start-1h], earlier starts get the fixed previous-evening
///    21:00-23:59 block.
/// 2. A window end not strictly before shift start (by the wall-clock
///    comparator) is clamped to start-1h. For small-hours shifts this turns
///    the fixed evening block into a midnight-spanning window.
/// 3. Shifts starting at or after 22:00 get a shorter lead time: window
///    start moves to start-3h, recommended start to start-2h.
///
/// # Example
///
/// ```
/// use checkin_engine::models::{ClockTime, ShiftCategory};
/// use checkin_engine::scheduling::check_in_window;
///
/// let window = check_in_window(ShiftCategory::Morning, Some(ClockTime::new(9, 0)));
/// assert_eq!(window.start.to_string(), "05:00");
/// assert_eq!(window.end.to_string(), "08:00");
/// assert_eq!(window.recommended_start.to_string(), "06:00");
///
/// // A 02:00 shift ends up with a midnight-spanning window.
/// let window = check_in_window(ShiftCategory::Night, Some(ClockTime::new(2, 0)));
/// assert_eq!(window.start.to_string(), "21:00");
/// assert_eq!(window.end.to_string(), "01:00");
/// assert!(window.spans_midnight());
/// ```
pub fn check_in_window(category: ShiftCategory, start_time: Option<ClockTime>) -> CheckInWindow {
    let Some(start) = start_time else {
        return CheckInWindow::flexible();
    };
    if category == ShiftCategory::Flexible {
        return CheckInWindow::flexible();
    }

    let start_hour = start.hour();

    let mut window_start;
    let mut window_end;
    let mut recommended_start;
    let mut recommended_end;

    if start_hour >= 1 {
        window_start = start.subtract_hours(4);
        window_end = start.subtract_hours(1);
        recommended_start = start.subtract_hours(3);
        recommended_end = window_end;
    } else {
        // Midnight shift: previous-evening block.
        window_start = ClockTime::new(21, 0);
        window_end = ClockTime::new(23, 59);
        recommended_start = ClockTime::new(22, 0);
        recommended_end = ClockTime::new(23, 59);
    }

    // Pass 1: early-morning shifts whose naive window wrapped into the
    // previous evening.
    if start_hour < 6 && (window_start.hour() > 20 || window_start.hour() < start_hour) {
        if start_hour >= 4 {
            window_start = ClockTime::new(0, 0);
            window_end = start.subtract_hours(1);
            recommended_start = ClockTime::new(1, 0);
            recommended_end = window_end;
        } else {
            window_start = ClockTime::new(21, 0);
            window_end = ClockTime::new(23, 59);
            recommended_start = ClockTime::new(22, 0);
            recommended_end = ClockTime::new(23, 59);
        }
    }

    // Pass 2: the window must end strictly before shift start.
    if window_end >= start {
        window_end = start.subtract_hours(1);
        recommended_end = window_end;
    }

    // Pass 3: very late shifts get a shorter lead time.
    if start_hour >= 22 {
        window_start = start.subtract_hours(3);
        recommended_start = start.subtract_hours(2);
    }

    CheckInWindow {
        start: window_start,
        end: window_end,
        recommended_start,
        recommended_end,
    }
}

/// Tests whether a wall-clock time falls inside a check-in window.
///
/// A window whose start compares greater than its end spans midnight, and
/// membership becomes `now >= start or now <= end`. Both boundaries are
/// inclusive. The test only sees times of day; which calendar date `now`
/// belongs to is irrelevant here.
///
/// # Example
///
/// ```
/// use checkin_engine::models::{CheckInWindow, ClockTime};
/// use checkin_engine::scheduling::is_within_check_in_window;
///
/// let window = CheckInWindow {
///     start: ClockTime::new(21, 0),
///     end: ClockTime::new(3, 0),
///     recommended_start: ClockTime::new(22, 0),
///     recommended_end: ClockTime::new(3, 0),
/// };
/// assert!(is_within_check_in_window(ClockTime::new(22, 30), &window));
/// assert!(is_within_check_in_window(ClockTime::new(0, 15), &window));
/// assert!(!is_within_check_in_window(ClockTime::new(10, 0), &window));
/// ```
pub fn is_within_check_in_window(now: ClockTime, window: &CheckInWindow) -> bool {
    if window.start > window.end {
        now >= window.start || now <= window.end
    } else {
        window.start <= now && now <= window.end
    }
}
