//! Error types for Contact Grid core.

use crate::value::{ValueKind, ValueType};

/// Errors raised while coercing a cell into a record field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoercionError {
    /// The cell is empty but the field is not optional.
    #[error("missing value for {expected} field")]
    Missing { expected: ValueType },

    /// The cell holds a kind the field cannot take.
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },

    /// Text could not be parsed into the field's kind.
    #[error("cannot parse '{input}' as {expected}")]
    Parse { expected: ValueKind, input: String },

    /// The value does not fit the field's integer width.
    #[error("value {value} is out of range for {expected}")]
    OutOfRange {
        expected: &'static str,
        value: i64,
    },
}

impl CoercionError {
    /// Create a parse error.
    pub fn parse(expected: ValueKind, input: impl Into<String>) -> Self {
        Self::Parse {
            expected,
            input: input.into(),
        }
    }
}

/// A specialized Result type for cell coercion.
pub type CoercionResult<T> = std::result::Result<T, CoercionError>;
