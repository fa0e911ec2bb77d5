//! Attendance streak computation.
//!
//! Scans backward from today over the lookback window. Days without a
//! schedule and days covered by an in-effect exception period are
//! transparent: they never start, break, or extend a streak. A scheduled,
//! non-excepted day counts, and a countable miss freezes the current streak
//! while only resetting the run that feeds the longest streak.

use chrono::{Days, NaiveDate};

use crate::config::EnginePolicy;
use crate::models::{ExceptionPeriod, ScheduleEntry};

use super::resolve::resolve_entry;

/// The attendance summary produced by the streak engine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StreakSummary {
    /// Consecutive countable days with a check-in, anchored at the most
    /// recent one.
    pub current_streak: u32,
    /// The longest run of consecutive countable check-ins observed in the
    /// lookback window.
    pub longest_streak: u32,
    /// Countable days with a check-in inside the lookback window.
    pub completed_days: u32,
    /// Countable days without a check-in, most recent first. Today is never
    /// listed here; a pending day is not a missed day.
    pub missed_schedule_dates: Vec<NaiveDate>,
    /// Scheduled days in the lookback window plus scheduled days over the
    /// forward horizon.
    pub total_scheduled_days: u32,
    /// The smallest milestone strictly above the current streak, if any.
    pub next_milestone: Option<u32>,
    /// True when today has a schedule, is not excepted, and has no check-in
    /// yet.
    pub today_pending: bool,
}

/// Computes the attendance streak summary for one worker.
///
/// `check_in_dates` is the set of dates with a recorded check-in inside the
/// lookback window; `exceptions` are the worker's exception periods, applied
/// through their in-effect rule per date. Resolution of which days are
/// scheduled uses the same rules as single-date resolution, applied per day.
pub fn compute_streak(
    entries: &[ScheduleEntry],
    check_in_dates: &[NaiveDate],
    exceptions: &[ExceptionPeriod],
    today: NaiveDate,
    policy: &EnginePolicy,
) -> StreakSummary {
    let checked: std::collections::HashSet<NaiveDate> = check_in_dates.iter().copied().collect();

    let mut current_streak = 0u32;
    let mut longest_streak = 0u32;
    let mut run = 0u32;
    let mut streak_broken = false;
    let mut completed_days = 0u32;
    let mut missed_schedule_dates = Vec::new();
    let mut past_scheduled = 0u32;
    let mut today_pending = false;

    for offset in 0..policy.lookback_days {
        let Some(date) = today.checked_sub_days(Days::new(u64::from(offset))) else {
            break;
        };
        if resolve_entry(entries, date).is_none() {
            continue;
        }
        past_scheduled += 1;
        if exceptions.iter().any(|period| period.in_effect_on(date)) {
            continue;
        }
        if checked.contains(&date) {
            run += 1;
            if !streak_broken {
                current_streak += 1;
            }
            longest_streak = longest_streak.max(run);
            completed_days += 1;
        } else if offset == 0 {
            // Today is pending, not missed; it neither breaks nor extends
            // the streak.
            today_pending = true;
        } else {
            missed_schedule_dates.push(date);
            streak_broken = true;
            run = 0;
        }
    }

    let mut future_scheduled = 0u32;
    for offset in 1..=policy.forward_horizon_days {
        let Some(date) = today.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };
        if resolve_entry(entries, date).is_some() {
            future_scheduled += 1;
        }
    }

    let next_milestone = policy
        .streak_milestones
        .iter()
        .copied()
        .find(|milestone| *milestone > current_streak);

    StreakSummary {
        current_streak,
        longest_streak,
        completed_days,
        missed_schedule_dates,
        total_scheduled_days: past_scheduled + future_scheduled,
        next_milestone,
        today_pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, ScheduleScope};
    use chrono::Days;
    use uuid::Uuid;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn daily_entries() -> Vec<ScheduleEntry> {
        (0..7).map(recurring).collect()
    }

    fn recurring(weekday: u8) -> ScheduleEntry {
        ScheduleEntry {
            id: Uuid::new_v4(),
            worker_id: "worker_001".to_string(),
            scope: ScheduleScope::weekday(weekday).unwrap(),
            start_time: ClockTime::new(9, 0),
            end_time: Some(ClockTime::new(17, 0)),
            active: true,
            effective_from: None,
            expires_on: None,
            custom_window: None,
            strict_window: None,
        }
    }

    fn days_ago(today: NaiveDate, n: u64) -> NaiveDate {
        today.checked_sub_days(Days::new(n)).unwrap()
    }

    fn exception(start: NaiveDate, end: NaiveDate) -> ExceptionPeriod {
        ExceptionPeriod {
            id: Uuid::new_v4(),
            worker_id: "worker_001".to_string(),
            start_date: start,
            end_date: Some(end),
            active: true,
            deactivated_at: None,
        }
    }

    fn policy() -> EnginePolicy {
        EnginePolicy::default()
    }

    #[test]
    fn test_streak_with_recent_miss_freezes_current_streak() {
        // Check-ins on days -1, -2, -3; day -4 missed; day -5 checked in.
        let today = make_date("2025-06-15");
        let entries = daily_entries();
        let check_ins = vec![
            days_ago(today, 1),
            days_ago(today, 2),
            days_ago(today, 3),
            days_ago(today, 5),
        ];

        let summary = compute_streak(&entries, &check_ins, &[], today, &policy());

        assert_eq!(summary.current_streak, 3);
        assert!(summary.longest_streak >= 3);
        assert!(summary.missed_schedule_dates.contains(&days_ago(today, 4)));
        assert_eq!(summary.completed_days, 4);
        assert!(summary.today_pending);
    }

    #[test]
    fn test_longest_streak_can_exceed_current_streak() {
        // Days -1, -2 checked; -3 missed; -4 through -8 checked.
        let today = make_date("2025-06-15");
        let entries = daily_entries();
        let mut check_ins = vec![days_ago(today, 1), days_ago(today, 2)];
        for n in 4..=8 {
            check_ins.push(days_ago(today, n));
        }

        let summary = compute_streak(&entries, &check_ins, &[], today, &policy());

        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.longest_streak, 5);
    }

    #[test]
    fn test_today_check_in_anchors_current_streak() {
        let today = make_date("2025-06-15");
        let entries = daily_entries();
        let check_ins = vec![today, days_ago(today, 1)];

        let summary = compute_streak(&entries, &check_ins, &[], today, &policy());

        assert_eq!(summary.current_streak, 2);
        assert!(!summary.today_pending);
    }

    #[test]
    fn test_unscheduled_days_are_transparent() {
        // Only Mondays are scheduled; consecutive Mondays with check-ins
        // form an unbroken streak across the unscheduled gaps.
        // 2025-06-16 is a Monday.
        let today = make_date("2025-06-16");
        let entries = vec![recurring(1)];
        let check_ins = vec![
            today,
            days_ago(today, 7),
            days_ago(today, 14),
            days_ago(today, 21),
            days_ago(today, 28),
        ];

        let summary = compute_streak(&entries, &check_ins, &[], today, &policy());

        assert_eq!(summary.current_streak, 5);
        assert_eq!(summary.longest_streak, 5);
        assert!(summary.missed_schedule_dates.is_empty());
    }

    #[test]
    fn test_excepted_days_are_transparent_and_not_missed() {
        // Days -3 through -5 fall under an exception with no check-ins; the
        // streak spans across them.
        let today = make_date("2025-06-15");
        let entries = daily_entries();
        let check_ins = vec![
            days_ago(today, 1),
            days_ago(today, 2),
            days_ago(today, 6),
            days_ago(today, 7),
        ];
        let leave = exception(days_ago(today, 5), days_ago(today, 3));

        let summary = compute_streak(&entries, &check_ins, &[leave], today, &policy());

        assert_eq!(summary.current_streak, 4);
        for n in 3..=5 {
            assert!(!summary.missed_schedule_dates.contains(&days_ago(today, n)));
        }
    }

    #[test]
    fn test_missed_dates_are_most_recent_first() {
        let today = make_date("2025-06-15");
        let entries = daily_entries();
        let check_ins = vec![days_ago(today, 1)];

        let summary = compute_streak(&entries, &check_ins, &[], today, &policy());

        let missed = &summary.missed_schedule_dates;
        assert!(missed.len() > 2);
        assert_eq!(missed[0], days_ago(today, 2));
        assert!(missed.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_today_unchecked_is_pending_not_missed() {
        let today = make_date("2025-06-15");
        let entries = daily_entries();

        let summary = compute_streak(&entries, &[], &[], today, &policy());

        assert!(summary.today_pending);
        assert!(!summary.missed_schedule_dates.contains(&today));
        assert_eq!(summary.current_streak, 0);
    }

    #[test]
    fn test_today_under_exception_is_not_pending() {
        let today = make_date("2025-06-15");
        let entries = daily_entries();
        let leave = exception(today, today);

        let summary = compute_streak(&entries, &[], &[leave], today, &policy());

        assert!(!summary.today_pending);
    }

    #[test]
    fn test_total_scheduled_days_includes_forward_horizon() {
        // Daily schedule: 30 lookback days plus 90 forward days.
        let today = make_date("2025-06-15");
        let entries = daily_entries();

        let summary = compute_streak(&entries, &[], &[], today, &policy());

        assert_eq!(summary.total_scheduled_days, 30 + 90);
    }

    #[test]
    fn test_next_milestone_is_first_above_current_streak() {
        let today = make_date("2025-06-15");
        let entries = daily_entries();
        let check_ins: Vec<NaiveDate> = (1..=8).map(|n| days_ago(today, n)).collect();

        let summary = compute_streak(&entries, &check_ins, &[], today, &policy());

        assert_eq!(summary.current_streak, 8);
        assert_eq!(summary.next_milestone, Some(14));
    }

    #[test]
    fn test_no_milestone_beyond_the_largest() {
        let mut short = policy();
        short.streak_milestones = vec![1, 2];
        let today = make_date("2025-06-15");
        let entries = daily_entries();
        let check_ins: Vec<NaiveDate> = (1..=3).map(|n| days_ago(today, n)).collect();

        let summary = compute_streak(&entries, &check_ins, &[], today, &short);

        assert_eq!(summary.next_milestone, None);
    }

    #[test]
    fn test_empty_inputs_produce_zero_summary() {
        let summary = compute_streak(&[], &[], &[], make_date("2025-06-15"), &policy());

        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.longest_streak, 0);
        assert_eq!(summary.completed_days, 0);
        assert_eq!(summary.total_scheduled_days, 0);
        assert!(summary.missed_schedule_dates.is_empty());
        assert!(!summary.today_pending);
        assert_eq!(summary.next_milestone, Some(7));
    }
}
