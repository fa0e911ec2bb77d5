//! Shift classification logic.
//!
//! This module maps a (start, end) time pair to a [`ShiftCategory`]. The
//! branch precedence is a fixed algorithm with deliberately overlapping
//! conditions; downstream window computation depends on the exact order, so
//! the branches below must not be reordered or "simplified".

use crate::models::{ClockTime, ShiftCategory};

/// Classifies a shift by its start hour alone.
///
/// Used when no end time is known and as the final fallback when the
/// two-time rules below do not match: [6,12) is morning, [12,18) is
/// afternoon, everything else is night.
///
/// # Example
///
/// ```
/// use checkin_engine::models::{ClockTime, ShiftCategory};
/// use checkin_engine::scheduling::classify_by_start_hour;
///
/// assert_eq!(classify_by_start_hour(ClockTime::new(7, 30)), ShiftCategory::Morning);
/// assert_eq!(classify_by_start_hour(ClockTime::new(13, 0)), ShiftCategory::Afternoon);
/// assert_eq!(classify_by_start_hour(ClockTime::new(3, 0)), ShiftCategory::Night);
/// ```
pub fn classify_by_start_hour(start: ClockTime) -> ShiftCategory {
    match start.hour() {
        6..12 => ShiftCategory::Morning,
        12..18 => ShiftCategory::Afternoon,
        _ => ShiftCategory::Night,
    }
}

/// Determines the shift category from a start time and an optional end time.
///
/// `Flexible` is returned only when no time information exists at all.
/// With both times present, a shift whose start hour exceeds its end hour
/// spans midnight and is always night, as are shifts starting at or after
/// 18:00 and shifts lying entirely in the small hours. Daytime shifts are
/// split into morning and afternoon by the rules below, with the
/// start-hour rule as the fallback.
///
/// # Example
///
/// ```
/// use checkin_engine::models::{ClockTime, ShiftCategory};
/// use checkin_engine::scheduling::classify_shift;
///
/// let c = |s: &str, e: &str| {
///     classify_shift(
///         Some(ClockTime::parse(s).unwrap()),
///         Some(ClockTime::parse(e).unwrap()),
///     )
/// };
/// assert_eq!(c("09:00", "17:00"), ShiftCategory::Morning);
/// assert_eq!(c("14:00", "22:00"), ShiftCategory::Afternoon);
/// assert_eq!(c("22:00", "06:00"), ShiftCategory::Night);
/// // Small-hours start falls through to the night catch-all.
/// assert_eq!(c("02:00", "10:00"), ShiftCategory::Night);
/// ```
pub fn classify_shift(start: Option<ClockTime>, end: Option<ClockTime>) -> ShiftCategory {
    let Some(start) = start else {
        return ShiftCategory::Flexible;
    };
    let Some(end) = end else {
        return classify_by_start_hour(start);
    };

    let start_hour = start.hour();
    let end_hour = end.hour();
    let spans_midnight = start_hour > end_hour;

    if spans_midnight || start_hour >= 18 || (start_hour < 6 && end_hour < 6) {
        return ShiftCategory::Night;
    }

    // Non-spanning daytime shifts from here on.
    let ends_by_late_afternoon = end < ClockTime::new(18, 0) || (12..=18).contains(&end_hour);
    if (4..12).contains(&start_hour) && ends_by_late_afternoon {
        return ShiftCategory::Morning;
    }
    if start_hour >= 12 && end_hour < 22 {
        return ShiftCategory::Afternoon;
    }
    // Small-hours catch-all: e.g. 02:00-10:00 is a night shift even though
    // it does not span midnight.
    if start_hour < 6 {
        return ShiftCategory::Night;
    }

    classify_by_start_hour(start)
}
