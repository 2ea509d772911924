//! Custom error types for paycycle
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for paycycle operations
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Event source retrieval failures (unreachable backend, unknown calendar)
    #[error("{0}")]
    Retrieval(String),

    /// Invalid user input (balance, cycle count)
    #[error("Validation error: {0}")]
    Validation(String),

    /// No payday events were found in the default calendar
    #[error("No payday events found in the default calendar.")]
    NoPaydayData,
}

impl ForecastError {
    /// Check if this is a retrieval error
    pub fn is_retrieval(&self) -> bool {
        matches!(self, Self::Retrieval(_))
    }
}

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for paycycle operations
pub type ForecastResult<T> = Result<T, ForecastError>;
