//! Error types for the pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a pay calculation.

use thiserror::Error;

/// The main error type for the pay engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pay_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "25:00".to_string(),
///     message: "hours must be between 0 and 24".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time '25:00': hours must be between 0 and 24"
/// );
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

    /// A time-of-day string was not a valid "HH:MM" value.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The offending input.
        value: String,
        /// A description of what made the time invalid.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Builds the [`EngineError::CalculationError`] for an overflowing amount.
    pub(crate) fn overflow(what: &str) -> Self {
        EngineError::CalculationError {
            message: format!("{} overflowed", what),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
