//! Error types for calculator operations.

use thiserror::Error;

/// Errors from arithmetic operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("division by zero")]
    DivisionByZero,
}
