//! Column constraint keys.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TagError;

/// A column-level constraint.
///
/// `Null` means "no constraint" and is what an unconstrained column carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKey {
    /// No constraint.
    #[serde(rename = "NULL")]
    Null,
    /// Primary key: unique and never null.
    #[serde(rename = "PRIMARY KEY")]
    Primary,
    /// Values must be unique.
    #[serde(rename = "UNIQUE")]
    Unique,
    /// Values may not be null.
    #[serde(rename = "NOT NULL")]
    NotNull,
    /// Missing values are generated from a counter.
    #[serde(rename = "AUTO_INCREMENT")]
    Increment,
}

impl FieldKey {
    /// All constraint keys, in declaration order.
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Null,
        FieldKey::Primary,
        FieldKey::Unique,
        FieldKey::NotNull,
        FieldKey::Increment,
    ];

    /// Returns the wire tag of this key.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKey::Null => "NULL",
            FieldKey::Primary => "PRIMARY KEY",
            FieldKey::Unique => "UNIQUE",
            FieldKey::NotNull => "NOT NULL",
            FieldKey::Increment => "AUTO_INCREMENT",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldKey {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.tag() == s)
            .ok_or_else(|| TagError::UnknownKey(s.to_string()))
    }
}

/// Ordered set of constraint keys declared on a column.
///
/// # Invariants
///
/// - Never empty: building from an empty collection yields `{Null}`.
/// - Each key appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<FieldKey>", into = "Vec<FieldKey>")]
pub struct KeySet {
    keys: BTreeSet<FieldKey>,
}

impl KeySet {
    /// Creates a key set holding only [`FieldKey::Null`].
    pub fn none() -> Self {
        Self::from_iter([FieldKey::Null])
    }

    /// Returns `true` if `key` is declared.
    pub fn contains(&self, key: FieldKey) -> bool {
        self.keys.contains(&key)
    }

    /// Returns `true` if any of `keys` is declared.
    pub fn contains_any(&self, keys: &[FieldKey]) -> bool {
        keys.iter().any(|key| self.contains(*key))
    }

    /// Iterates over the declared keys in order.
    pub fn iter(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.keys.iter().copied()
    }

    /// Number of declared keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; a key set holds at least `Null`.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the keys as a vector, in order.
    pub fn to_vec(&self) -> Vec<FieldKey> {
        self.iter().collect()
    }
}

impl Default for KeySet {
    fn default() -> Self {
        Self::none()
    }
}

impl FromIterator<FieldKey> for KeySet {
    fn from_iter<I: IntoIterator<Item = FieldKey>>(iter: I) -> Self {
        let mut keys: BTreeSet<FieldKey> = iter.into_iter().collect();
        if keys.is_empty() {
            keys.insert(FieldKey::Null);
        }
        Self { keys }
    }
}

impl From<FieldKey> for KeySet {
    fn from(key: FieldKey) -> Self {
        Self::from_iter([key])
    }
}

impl From<Vec<FieldKey>> for KeySet {
    fn from(keys: Vec<FieldKey>) -> Self {
        Self::from_iter(keys)
    }
}

impl From<&[FieldKey]> for KeySet {
    fn from(keys: &[FieldKey]) -> Self {
        Self::from_iter(keys.iter().copied())
    }
}

impl<const N: usize> From<[FieldKey; N]> for KeySet {
    fn from(keys: [FieldKey; N]) -> Self {
        Self::from_iter(keys)
    }
}

impl From<KeySet> for Vec<FieldKey> {
    fn from(set: KeySet) -> Self {
        set.keys.into_iter().collect()
    }
}

impl fmt::Display for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
