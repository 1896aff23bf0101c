//! Column error types.

use column_types::{FieldType, ValueKind};
use thiserror::Error;

/// Result alias for column operations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Column operation errors.
///
/// Every variant aborts the triggering operation before the value store is
/// touched, so a failed call never leaves a partial effect behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The declared type, keys and default cannot form a column
    #[error("Invalid schema: {reason}")]
    InvalidSchema { reason: String },

    /// Value kind does not match the column type
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: ValueKind, got: ValueKind },

    /// Float value is NaN or infinite and has no JSON representation
    #[error("Float {value} is not finite")]
    NonFiniteFloat { value: String },

    /// Value collides with a stored value under PRIMARY, UNIQUE or AUTO_INCREMENT
    #[error("Value {value} already exists")]
    Duplicate { value: String },

    /// Null supplied where PRIMARY or NOT NULL forbids it
    #[error("Field does not allow null values")]
    NullNotAllowed,

    /// Row index outside the valid bound
    #[error("Index {index} out of range for {rows} rows")]
    IndexOutOfRange { index: isize, rows: usize },

    /// Column type has no entry in the type registry
    #[error("Type '{ty}' is not registered")]
    UnknownType { ty: FieldType },

    /// Malformed serialized text
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Type registry lock poisoned
    #[error("Lock poisoned")]
    LockPoisoned,
}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        FieldError::Serialization(err.to_string())
    }
}

/// Error type for type registration and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Type '{ty}' already registered")]
    AlreadyRegistered { ty: FieldType },

    #[error("Type '{ty}' not found")]
    NotFound { ty: FieldType },

    #[error("Type registry lock poisoned")]
    LockPoisoned,
}

impl From<TypeError> for FieldError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::NotFound { ty } => FieldError::UnknownType { ty },
            TypeError::LockPoisoned => FieldError::LockPoisoned,
            TypeError::AlreadyRegistered { .. } => FieldError::InvalidSchema {
                reason: err.to_string(),
            },
        }
    }
}
