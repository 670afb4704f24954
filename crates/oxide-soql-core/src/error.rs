//! Error types for configuration parsing.
//!
//! Rendering a fragment tree never fails; only the parsers that turn
//! configuration strings into typed settings can.

use thiserror::Error;

/// Errors produced while parsing builder settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The whitespace setting was neither `space` nor `plus`.
    #[error("invalid whitespace setting: {0:?} (expected \"space\" or \"plus\")")]
    InvalidWhitespace(String),

    /// The text is not a known relative date literal token.
    #[error("invalid date literal: {0:?}")]
    InvalidDateLiteral(String),
}

/// Result type alias for fallible builder operations.
pub type Result<T> = std::result::Result<T, Error>;
