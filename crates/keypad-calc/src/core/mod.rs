//! Arithmetic core shared by the expression engine
//!
//! Error prevention: operators are a closed enum, and every arithmetic step
//! reports division by zero and non-finite results instead of leaking them.

pub mod evaluator;
pub mod format;
mod operations;
pub mod parser;

pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Character that has no key binding
    #[error("Unknown key: '{0}'")]
    UnknownKey(char),
}

impl CalcError {
    /// Returns true for arithmetic failures that reset the engine
    /// (as opposed to malformed input, which leaves it untouched)
    #[must_use]
    pub const fn is_numeric_fault(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::Overflow | Self::InvalidResult(_)
        )
    }
}
