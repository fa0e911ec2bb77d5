//! Record store traits for the Check-In Scheduling Engine.
//!
//! The engine is storage-agnostic: all reads and writes go through the
//! traits in this module, and callers inject whichever implementation they
//! run against. [`MemoryStore`] is the bundled in-process implementation,
//! used in tests and for single-process deployments.
//!
//! Store failures surface as [`StoreError`] and are never collapsed into
//! "no schedule" results.

mod memory;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::models::{CheckInRecord, ExceptionPeriod, ScheduleEntry};

pub use memory::MemoryStore;

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First date in the range.
    pub start: NaiveDate,
    /// Last date in the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `start` through `end`, both inclusive.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the given date falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Read access to a worker's schedule entries.
pub trait ScheduleStore {
    /// Fetches every schedule entry for the given worker, active or not.
    fn schedule_for_worker(&self, worker_id: &str) -> Result<Vec<ScheduleEntry>, StoreError>;
}

/// Read and write access to daily check-in records.
pub trait CheckInStore {
    /// Fetches the dates within `range` on which the worker has a check-in.
    fn check_in_dates(
        &self,
        worker_id: &str,
        range: DateRange,
    ) -> Result<Vec<NaiveDate>, StoreError>;

    /// Writes a check-in record, replacing any existing record for the same
    /// worker and date, and returns the stored row.
    fn upsert_check_in(&self, record: CheckInRecord) -> Result<CheckInRecord, StoreError>;
}

/// Read access to a worker's exception periods.
pub trait ExceptionStore {
    /// Fetches every exception period recorded for the given worker.
    fn exceptions_for_worker(&self, worker_id: &str) -> Result<Vec<ExceptionPeriod>, StoreError>;
}

impl<T: ScheduleStore + ?Sized> ScheduleStore for Arc<T> {
    fn schedule_for_worker(&self, worker_id: &str) -> Result<Vec<ScheduleEntry>, StoreError> {
        (**self).schedule_for_worker(worker_id)
    }
}

impl<T: CheckInStore + ?Sized> CheckInStore for Arc<T> {
    fn check_in_dates(
        &self,
        worker_id: &str,
        range: DateRange,
    ) -> Result<Vec<NaiveDate>, StoreError> {
        (**self).check_in_dates(worker_id, range)
    }

    fn upsert_check_in(&self, record: CheckInRecord) -> Result<CheckInRecord, StoreError> {
        (**self).upsert_check_in(record)
    }
}

impl<T: ExceptionStore + ?Sized> ExceptionStore for Arc<T> {
    fn exceptions_for_worker(&self, worker_id: &str) -> Result<Vec<ExceptionPeriod>, StoreError> {
        (**self).exceptions_for_worker(worker_id)
    }
}
