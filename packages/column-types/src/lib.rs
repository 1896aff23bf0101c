//! Shared vocabulary for column stores.
//!
//! This crate defines column types, row values, and constraint keys together
//! with their wire tags.

pub mod key;
pub mod types;

pub use key::{FieldKey, KeySet};
pub use types::{FieldType, Value, ValueKind};

use thiserror::Error;

/// Error returned when parsing a wire tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    /// The tag does not name a known column type.
    #[error("unknown field type tag '{0}'")]
    UnknownType(String),
    /// The tag does not name a known constraint key.
    #[error("unknown field key tag '{0}'")]
    UnknownKey(String),
}
