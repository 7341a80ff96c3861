//! Error types for the calculator's boundary layers
//!
//! The state machine itself never fails: invalid transitions are declined
//! without touching state. Errors only arise where outside input (button
//! text, configuration, the page markup) is turned into typed values.

use thiserror::Error;

/// Result type for calculator boundary operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while translating outside input into calculator actions
#[derive(Debug, Error)]
pub enum CalcError {
    /// Token is not one of `+ - * /`
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Token is not a single digit or decimal point
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(String),

    /// A required element was not found in the page
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Binding configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// A browser API call failed
    #[error("DOM error: {0}")]
    Dom(String),
}

impl CalcError {
    /// Create a missing element error
    #[must_use]
    pub fn missing_element(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }

    /// Create a DOM error
    #[must_use]
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}
