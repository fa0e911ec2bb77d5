//! Check-In Scheduling Engine for shift-based workforces
//!
//! This crate resolves a worker's shift for a calendar date, derives the
//! check-in window that precedes the shift, and computes attendance streaks
//! from schedule, check-in, and exception history. All persistence is behind
//! injected store traits; the engine itself is a set of pure functions.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
pub mod service;
pub mod store;
