//! Type definitions and utilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TagError;

/// Value representation for column rows.
///
/// A row that holds no data is represented as `None` by the column, so this
/// enum only carries concrete values. On the wire each variant is written as
/// its bare JSON counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    Str(String),
}

impl Value {
    /// Returns the native kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
        }
    }

    /// Returns the integer payload, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// Native kind a value belongs to.
///
/// A [`FieldType`] is mapped onto one of these by a type registry; a value is
/// accepted by a column only when its kind equals the mapped kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    /// Boolean
    Bool,
    /// Signed integer
    Int,
    /// Floating point number
    Float,
    /// UTF-8 string
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Str => write!(f, "str"),
        }
    }
}

/// Column types supported by the store.
///
/// The serde representation is the wire tag used by the column codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldType {
    /// Integer column
    #[serde(rename = "int")]
    Int,
    /// Floating point column
    #[serde(rename = "float")]
    Float,
    /// Variable length text column
    #[serde(rename = "str")]
    Varchar,
    /// Boolean column
    #[serde(rename = "bool")]
    Bool,
}

impl FieldType {
    /// All column types, in declaration order.
    pub const ALL: [FieldType; 4] = [
        FieldType::Int,
        FieldType::Float,
        FieldType::Varchar,
        FieldType::Bool,
    ];

    /// Returns the wire tag of this type.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Varchar => "str",
            FieldType::Bool => "bool",
        }
    }

    /// Returns `true` if this is the integer column type.
    pub fn is_integer(&self) -> bool {
        matches!(self, FieldType::Int)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldType {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.tag() == s)
            .ok_or_else(|| TagError::UnknownType(s.to_string()))
    }
}
