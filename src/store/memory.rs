//! In-process record store.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::models::{CheckInRecord, ExceptionPeriod, ScheduleEntry};

use super::{CheckInStore, DateRange, ExceptionStore, ScheduleStore};

/// An in-memory record store backed by mutex-guarded collections.
///
/// Intended for tests and single-process deployments. Check-ins are keyed
/// by worker and date, so re-submission on the same date replaces the
/// earlier record.
///
/// # Example
///
/// ```
/// use checkin_engine::store::{MemoryStore, ScheduleStore};
///
/// let store = MemoryStore::new();
/// let entries = store.schedule_for_worker("worker_001").unwrap();
/// assert!(entries.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    schedules: Mutex<Vec<ScheduleEntry>>,
    check_ins: Mutex<HashMap<(String, NaiveDate), CheckInRecord>>,
    exceptions: Mutex<Vec<ExceptionPeriod>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schedule entry.
    pub fn insert_schedule_entry(&self, entry: ScheduleEntry) {
        lock(&self.schedules).push(entry);
    }

    /// Adds an exception period.
    pub fn insert_exception(&self, exception: ExceptionPeriod) {
        lock(&self.exceptions).push(exception);
    }

    /// Returns the stored check-in for the given worker and date, if any.
    pub fn check_in_on(&self, worker_id: &str, date: NaiveDate) -> Option<CheckInRecord> {
        lock(&self.check_ins)
            .get(&(worker_id.to_string(), date))
            .cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ScheduleStore for MemoryStore {
    fn schedule_for_worker(&self, worker_id: &str) -> Result<Vec<ScheduleEntry>, StoreError> {
        Ok(lock(&self.schedules)
            .iter()
            .filter(|e| e.worker_id == worker_id)
            .cloned()
            .collect())
    }
}

impl CheckInStore for MemoryStore {
    fn check_in_dates(
        &self,
        worker_id: &str,
        range: DateRange,
    ) -> Result<Vec<NaiveDate>, StoreError> {
        let mut dates: Vec<NaiveDate> = lock(&self.check_ins)
            .keys()
            .filter(|(worker, date)| worker == worker_id && range.contains(*date))
            .map(|(_, date)| *date)
            .collect();
        dates.sort_unstable();
        Ok(dates)
    }

    fn upsert_check_in(&self, record: CheckInRecord) -> Result<CheckInRecord, StoreError> {
        lock(&self.check_ins).insert((record.worker_id.clone(), record.date), record.clone());
        Ok(record)
    }
}

impl ExceptionStore for MemoryStore {
    fn exceptions_for_worker(&self, worker_id: &str) -> Result<Vec<ExceptionPeriod>, StoreError> {
        Ok(lock(&self.exceptions)
            .iter()
            .filter(|e| e.worker_id == worker_id)
            .cloned()
            .collect())
    }
}
