//! Error types for the Check-In Scheduling Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule resolution and
//! streak computation.

use thiserror::Error;

/// The main error type for the Check-In Scheduling Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// "Not found" outcomes (no applicable schedule, no upcoming occurrence)
/// are valid terminal states and are expressed as values, never as errors.
///
/// # Example
///
/// ```
/// use checkin_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A wall-clock time string was malformed.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A weekday index was outside the 0 (Sunday) to 6 (Saturday) range.
    #[error("Invalid weekday index {value}: expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday {
        /// The out-of-range weekday index.
        value: u8,
    },

    /// An underlying record store fetch or write failed.
    ///
    /// Store failures are always propagated; they are never collapsed into
    /// a "no schedule" result.
    #[error("Record store failure: {0}")]
    Store(#[from] StoreError),
}

/// Errors raised by an injected record store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("record store unavailable: {message}")]
    Unavailable {
        /// A description of the connectivity failure.
        message: String,
    },

    /// The store was reachable but the query or write failed.
    #[error("record store query failed: {message}")]
    QueryFailed {
        /// A description of the query failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
