//! Scheduling logic for the Check-In Scheduling Engine.
//!
//! This module contains the pure scheduling functions: shift classification
//! from start/end times, check-in window derivation with its ordered
//! adjustment passes, window membership testing, single-date schedule
//! resolution with date-over-weekday precedence, the bulk-then-scan
//! next-occurrence search, and attendance streak computation.

mod classify;
mod next_occurrence;
mod resolve;
mod streak;
mod window;

pub use classify::{classify_by_start_hour, classify_shift};
pub use next_occurrence::find_next_occurrence;
pub use resolve::{resolve_entry, resolve_shift, resolved_shift_for_entry};
pub use streak::{StreakSummary, compute_streak};
pub use window::{check_in_window, is_within_check_in_window};
