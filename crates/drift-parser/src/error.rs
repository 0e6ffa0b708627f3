//! Parse error type.
//!
//! Wording here is not pinned by any test; it exists so the parser is a
//! real, independently testable component rather than an
//! assume-valid-input stub.

use std::fmt;

use drift_common::Span;

/// A parse error with a human-readable message and the source location
/// where it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}
