// File: crates/lumen-core/src/error.rs
// Summary: Error types. Chart data never fails; only color parsing does.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    #[error("color '{0}' contains non-hex digits")]
    InvalidDigits(String),
    #[error("expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
}
