//! Custom error types for Penny
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Penny operations
#[derive(Error, Debug)]
pub enum PennyError {
    /// Amount was non-numeric, not strictly positive or too large
    #[error("Invalid amount: '{0}' (expected a number greater than 0 and at most 1000000000)")]
    InvalidAmount(String),

    /// Date was malformed or not a real calendar date
    #[error("Invalid date: '{0}' (expected DD-MM-YYYY, e.g. 15-02-2026)")]
    InvalidDate(String),

    /// Category was empty after trimming
    #[error("Invalid category: '{0}' (category cannot be empty)")]
    InvalidCategory(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A query matched no expenses
    #[error("No expenses found {0}")]
    NoExpenses(String),

    /// Generic validation errors (e.g. an edit with nothing to change)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PennyError {
    /// Create a "not found" error for an expense display index
    pub fn expense_not_found(display_index: usize) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: format!("#{}", display_index),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PennyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PennyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PennyError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for Penny operations
pub type PennyResult<T> = Result<T, PennyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PennyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_echoes_value() {
        let err = PennyError::InvalidAmount("-5".into());
        assert!(err.to_string().contains("'-5'"));
    }

    #[test]
    fn test_not_found_error() {
        let err = PennyError::expense_not_found(7);
        assert_eq!(err.to_string(), "Expense not found: #7");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let penny_err: PennyError = io_err.into();
        assert!(matches!(penny_err, PennyError::Io(_)));
    }
}
