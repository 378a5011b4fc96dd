//! Error types for the Timesheet Engine.
//!
//! The accounting core itself never fails: a malformed clock entry is reported
//! as a per-day flag on [`DayResult`](crate::models::DayResult). The errors in
//! this module belong to the layers around it: configuration loading, the
//! calendar, and the per-day input holder.

use thiserror::Error;

/// The main error type for the Timesheet Engine.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
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

    /// A configuration value was outside its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The requested year/month does not exist in the calendar.
    #[error("Invalid date {year}-{month:02}")]
    InvalidDate {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },

    /// A day number outside the selected month.
    #[error("Day {day} is outside the month (1-{days_in_month})")]
    DayOutOfRange {
        /// The requested day.
        day: u32,
        /// Number of days in the selected month.
        days_in_month: u32,
    },

    /// Input was supplied for a day that does not accept input (Sunday).
    #[error("Day {day} does not accept time entries")]
    DayLocked {
        /// The locked day.
        day: u32,
    },

    /// A raw clock token was rejected by input acceptance.
    #[error("Invalid clock token '{token}': expected up to 4 digits")]
    InvalidToken {
        /// The rejected token.
        token: String,
    },

    /// A day-of-week name could not be classified.
    #[error("Unknown day name: {name}")]
    UnknownDayName {
        /// The name that was not recognised.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
