//! Serialized form of a column.

use column_types::{FieldType, KeySet, Value};
use serde::{Deserialize, Serialize};

/// Column state as written by [`Field::serialized`](super::Field::serialized).
#[derive(Debug, Serialize)]
pub(crate) struct FieldRecordRef<'a> {
    /// Declared constraint keys
    pub key: &'a KeySet,
    /// Column type tag
    pub r#type: FieldType,
    /// Rows in order
    pub values: &'a [Option<Value>],
    /// Default value
    pub default: Option<&'a Value>,
}

/// Column state as read back from text.
///
/// Values carried here are unchecked; they only become rows once they pass
/// through the validated insert path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Declared constraint keys
    pub key: KeySet,
    /// Column type tag
    pub r#type: FieldType,
    /// Rows in order
    #[serde(default)]
    pub values: Vec<Option<Value>>,
    /// Default value
    #[serde(default)]
    pub default: Option<Value>,
}
