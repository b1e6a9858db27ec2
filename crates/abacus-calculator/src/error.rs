//! Error handling for calculator operations
//!
//! Exactly two failure kinds exist. Both are returned to the caller and
//! never recovered inside the crate.

use thiserror::Error;

/// Error type for operation lookup and evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The requested key is not in the operation table
    #[error("Operation '{key}' not supported.")]
    UnknownOperation {
        /// The key as the caller supplied it, before case normalization
        key: String,
    },

    /// Division with a zero divisor
    #[error("Cannot divide by zero.")]
    DivideByZero,
}

impl CalculatorError {
    /// Create an unknown operation error
    pub fn unknown_operation(key: impl Into<String>) -> Self {
        Self::UnknownOperation { key: key.into() }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CalculatorError::UnknownOperation { .. } => "unknown_operation",
            CalculatorError::DivideByZero => "divide_by_zero",
        }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
