//! Core data models for the Check-In Scheduling Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod check_in;
mod clock_time;
mod exception;
mod resolved_shift;
mod schedule_entry;

pub use check_in::CheckInRecord;
pub use clock_time::ClockTime;
pub use exception::ExceptionPeriod;
pub use resolved_shift::{CheckInWindow, NextShift, ResolvedShift, ShiftCategory, ShiftResolution};
pub use schedule_entry::{ScheduleEntry, ScheduleScope, Weekday, WindowOverride};
