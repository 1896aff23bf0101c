//! Single-column storage engine for a minimal tabular store.
//!
//! Provides the type registry, constraint validation, an ordered value
//! store, and the JSON codec for one schema column.

pub mod config;
pub mod error;
pub mod field;
pub mod types;

pub use column_types::{FieldKey, FieldType, KeySet, Value, ValueKind};
pub use config::{DuplicateScope, FieldConfig, IncrementPolicy, IndexPolicy};
pub use error::{FieldError, Result, TypeError};
pub use field::{DataView, Field, FieldRecord};
pub use types::TypeRegistry;
