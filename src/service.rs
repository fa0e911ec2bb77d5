//! Engine facade over injected record stores.
//!
//! [`CheckInService`] glues the pure scheduling functions to the store
//! traits: it fetches, delegates, and writes, holding no state of its own
//! beyond the injected stores and policy.

use chrono::{Days, Local, NaiveDate};
use tracing::warn;

use crate::config::EnginePolicy;
use crate::error::EngineResult;
use crate::models::{CheckInRecord, ClockTime, NextShift, ShiftResolution};
use crate::scheduling::{StreakSummary, compute_streak, find_next_occurrence, resolve_shift};
use crate::store::{CheckInStore, DateRange, ExceptionStore, ScheduleStore};

/// The engine's main entry point.
///
/// Generic over its three store seams so callers can mix implementations,
/// for example a database-backed schedule store with an in-memory check-in
/// store in tests.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use checkin_engine::config::EnginePolicy;
/// use checkin_engine::service::CheckInService;
/// use checkin_engine::store::MemoryStore;
///
/// let store = Arc::new(MemoryStore::new());
/// let service = CheckInService::new(
///     Arc::clone(&store),
///     Arc::clone(&store),
///     store,
///     EnginePolicy::default(),
/// );
/// let resolution = service
///     .shift_info("worker_001", "2025-06-02".parse().unwrap())
///     .unwrap();
/// assert!(!resolution.is_scheduled());
/// ```
pub struct CheckInService<S, C, E> {
    schedules: S,
    check_ins: C,
    exceptions: E,
    policy: EnginePolicy,
}

impl<S, C, E> CheckInService<S, C, E>
where
    S: ScheduleStore,
    C: CheckInStore,
    E: ExceptionStore,
{
    /// Creates a service over the given stores and policy.
    pub fn new(schedules: S, check_ins: C, exceptions: E, policy: EnginePolicy) -> Self {
        Self {
            schedules,
            check_ins,
            exceptions,
            policy,
        }
    }

    /// Resolves a worker's shift for the given date.
    ///
    /// # Errors
    ///
    /// Propagates schedule store failures. A worker with no applicable
    /// entry resolves to [`ShiftResolution::NoScheduleAssigned`], which is
    /// not an error.
    pub fn shift_info(&self, worker_id: &str, date: NaiveDate) -> EngineResult<ShiftResolution> {
        let entries = self.schedules.schedule_for_worker(worker_id)?;
        Ok(resolve_shift(&entries, date))
    }

    /// Resolves a worker's shift for the current local date.
    pub fn shift_info_today(&self, worker_id: &str) -> EngineResult<ShiftResolution> {
        self.shift_info(worker_id, Local::now().date_naive())
    }

    /// Finds the worker's next scheduled shift on or after `from`.
    ///
    /// Returns `None` when nothing is scheduled within the configured
    /// search horizon.
    pub fn next_shift_info(
        &self,
        worker_id: &str,
        from: NaiveDate,
    ) -> EngineResult<Option<NextShift>> {
        let entries = self.schedules.schedule_for_worker(worker_id)?;
        Ok(find_next_occurrence(&entries, from, &self.policy))
    }

    /// Computes the worker's attendance streak summary as of `today`.
    ///
    /// Schedule and check-in fetch failures are fatal. An exception fetch
    /// failure degrades gracefully: the streak is computed as if no
    /// exception periods exist, since under-reporting an exception can only
    /// make the summary stricter, never wrong about a check-in.
    pub fn streak(&self, worker_id: &str, today: NaiveDate) -> EngineResult<StreakSummary> {
        let entries = self.schedules.schedule_for_worker(worker_id)?;

        let lookback_start = today
            .checked_sub_days(Days::new(u64::from(self.policy.lookback_days.saturating_sub(1))))
            .unwrap_or(today);
        let check_in_dates = self
            .check_ins
            .check_in_dates(worker_id, DateRange::new(lookback_start, today))?;

        let exceptions = match self.exceptions.exceptions_for_worker(worker_id) {
            Ok(exceptions) => exceptions,
            Err(error) => {
                warn!(%worker_id, %error, "exception fetch failed, computing streak without exceptions");
                Vec::new()
            }
        };

        Ok(compute_streak(
            &entries,
            &check_in_dates,
            &exceptions,
            today,
            &self.policy,
        ))
    }

    /// Records a check-in for the worker on the given date.
    ///
    /// The shift resolution in force at submission time is captured in the
    /// record as a snapshot. A record already stored for the same worker
    /// and date is replaced. The returned record is the row the store
    /// persisted, not the one constructed here.
    pub fn record_check_in(
        &self,
        worker_id: &str,
        date: NaiveDate,
        submitted_at: ClockTime,
        payload: serde_json::Value,
    ) -> EngineResult<CheckInRecord> {
        let resolution = self.shift_info(worker_id, date)?;
        let record = CheckInRecord {
            worker_id: worker_id.to_string(),
            date,
            submitted_at,
            shift_snapshot: resolution.shift().cloned(),
            payload,
        };
        let stored = self.check_ins.upsert_check_in(record)?;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, StoreError};
    use crate::models::{ExceptionPeriod, ScheduleEntry, ScheduleScope, ShiftCategory};
    use crate::store::MemoryStore;
    use std::sync::Arc;
    use uuid::Uuid;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn recurring(weekday: u8, start: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: Uuid::new_v4(),
            worker_id: "worker_001".to_string(),
            scope: ScheduleScope::weekday(weekday).unwrap(),
            start_time: ClockTime::parse(start).unwrap(),
            end_time: Some(ClockTime::parse("17:00").unwrap()),
            active: true,
            effective_from: None,
            expires_on: None,
            custom_window: None,
            strict_window: None,
        }
    }

    fn service_over(
        store: &Arc<MemoryStore>,
    ) -> CheckInService<Arc<MemoryStore>, Arc<MemoryStore>, Arc<MemoryStore>> {
        CheckInService::new(
            Arc::clone(store),
            Arc::clone(store),
            Arc::clone(store),
            EnginePolicy::default(),
        )
    }

    struct FailingStore;

    impl ScheduleStore for FailingStore {
        fn schedule_for_worker(&self, _: &str) -> Result<Vec<ScheduleEntry>, StoreError> {
            Err(StoreError::Unavailable {
                message: "connection refused".to_string(),
            })
        }
    }

    impl CheckInStore for FailingStore {
        fn check_in_dates(&self, _: &str, _: DateRange) -> Result<Vec<NaiveDate>, StoreError> {
            Err(StoreError::QueryFailed {
                message: "timeout".to_string(),
            })
        }

        fn upsert_check_in(&self, _: CheckInRecord) -> Result<CheckInRecord, StoreError> {
            Err(StoreError::QueryFailed {
                message: "timeout".to_string(),
            })
        }
    }

    impl ExceptionStore for FailingStore {
        fn exceptions_for_worker(&self, _: &str) -> Result<Vec<ExceptionPeriod>, StoreError> {
            Err(StoreError::Unavailable {
                message: "connection refused".to_string(),
            })
        }
    }

    #[test]
    fn test_shift_info_resolves_recurring_entry() {
        let store = Arc::new(MemoryStore::new());
        // 2025-06-02 is a Monday (weekday 1)
        store.insert_schedule_entry(recurring(1, "09:00"));
        let service = service_over(&store);

        let resolution = service.shift_info("worker_001", make_date("2025-06-02")).unwrap();
        let shift = resolution.shift().expect("Monday should resolve");
        assert_eq!(shift.category, ShiftCategory::Morning);
        assert_eq!(shift.start_time, ClockTime::new(9, 0));
    }

    #[test]
    fn test_shift_info_absence_is_a_value_not_an_error() {
        let store = Arc::new(MemoryStore::new());
        let service = service_over(&store);

        let resolution = service.shift_info("worker_001", make_date("2025-06-02")).unwrap();
        assert_eq!(resolution, ShiftResolution::NoScheduleAssigned);
    }

    #[test]
    fn test_shift_info_propagates_store_failure() {
        let service = CheckInService::new(
            FailingStore,
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::new()),
            EnginePolicy::default(),
        );

        let result = service.shift_info("worker_001", make_date("2025-06-02"));
        assert!(matches!(result, Err(EngineError::Store(_))));
    }

    #[test]
    fn test_next_shift_info_scans_forward() {
        let store = Arc::new(MemoryStore::new());
        store.insert_schedule_entry(recurring(6, "09:00"));
        let service = service_over(&store);

        // 2025-06-01 is a Sunday; the next Saturday is 2025-06-07.
        let next = service
            .next_shift_info("worker_001", make_date("2025-06-01"))
            .unwrap()
            .expect("Saturday shift expected");
        assert_eq!(next.date, make_date("2025-06-07"));
    }

    #[test]
    fn test_record_check_in_captures_shift_snapshot() {
        let store = Arc::new(MemoryStore::new());
        store.insert_schedule_entry(recurring(1, "09:00"));
        let service = service_over(&store);

        let record = service
            .record_check_in(
                "worker_001",
                make_date("2025-06-02"),
                ClockTime::new(7, 30),
                serde_json::json!({ "feeling": "ready" }),
            )
            .unwrap();

        let snapshot = record.shift_snapshot.clone().expect("snapshot expected");
        assert_eq!(snapshot.category, ShiftCategory::Morning);

        let stored = store
            .check_in_on("worker_001", make_date("2025-06-02"))
            .expect("record should be persisted");
        assert_eq!(stored, record);
    }

    #[test]
    fn test_record_check_in_without_schedule_has_no_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let service = service_over(&store);

        let record = service
            .record_check_in(
                "worker_001",
                make_date("2025-06-02"),
                ClockTime::new(7, 30),
                serde_json::Value::Null,
            )
            .unwrap();
        assert!(record.shift_snapshot.is_none());
    }

    #[test]
    fn test_streak_counts_checked_days() {
        let store = Arc::new(MemoryStore::new());
        for weekday in 0..7 {
            store.insert_schedule_entry(recurring(weekday, "09:00"));
        }
        let today = make_date("2025-06-10");
        let service = service_over(&store);
        for n in 0..3u64 {
            let date = today.checked_sub_days(Days::new(n)).unwrap();
            service
                .record_check_in("worker_001", date, ClockTime::new(8, 0), serde_json::Value::Null)
                .unwrap();
        }

        let summary = service.streak("worker_001", today).unwrap();
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.completed_days, 3);
        assert!(!summary.today_pending);
    }

    #[test]
    fn test_streak_degrades_gracefully_on_exception_fetch_failure() {
        let schedules = Arc::new(MemoryStore::new());
        for weekday in 0..7 {
            schedules.insert_schedule_entry(recurring(weekday, "09:00"));
        }
        let service = CheckInService::new(
            Arc::clone(&schedules),
            Arc::clone(&schedules),
            FailingStore,
            EnginePolicy::default(),
        );

        let summary = service.streak("worker_001", make_date("2025-06-10")).unwrap();
        assert_eq!(summary.current_streak, 0);
        assert!(summary.today_pending);
    }

    #[test]
    fn test_streak_propagates_check_in_fetch_failure() {
        let schedules = Arc::new(MemoryStore::new());
        let service = CheckInService::new(
            Arc::clone(&schedules),
            FailingStore,
            Arc::clone(&schedules),
            EnginePolicy::default(),
        );

        let result = service.streak("worker_001", make_date("2025-06-10"));
        assert!(matches!(result, Err(EngineError::Store(_))));
    }
}
