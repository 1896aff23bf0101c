//! ValueStore - ordered, index-addressable row storage for one column.

use std::ops::Deref;

use column_types::Value;

use crate::config::IndexPolicy;
use crate::error::{FieldError, Result};

/// Ordered row storage wrapping `Vec<Option<Value>>`.
///
/// The position of a value is its row identity. Removing a row shifts every
/// later row down by one. The store performs no constraint checks; callers
/// validate before mutating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStore {
    values: Vec<Option<Value>>,
}

impl ValueStore {
    /// Creates a new empty ValueStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new ValueStore with room for `capacity` rows.
    pub fn new_with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of stored rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolves a possibly negative row index to an absolute position.
    ///
    /// # Returns
    /// The position, or `IndexOutOfRange` if `policy` rejects the index.
    pub fn position(&self, index: isize, policy: IndexPolicy) -> Result<usize> {
        policy
            .resolve(index, self.len())
            .ok_or(FieldError::IndexOutOfRange {
                index,
                rows: self.len(),
            })
    }

    /// Returns the row at `position`.
    pub fn get(&self, position: usize) -> Option<&Option<Value>> {
        self.values.get(position)
    }

    /// Returns a slice view of all rows in order.
    pub fn as_slice(&self) -> &[Option<Value>] {
        &self.values
    }

    /// Returns `true` if a row other than `skip` equals `value`.
    pub fn contains(&self, value: &Option<Value>, skip: Option<usize>) -> bool {
        self.values
            .iter()
            .enumerate()
            .any(|(position, stored)| Some(position) != skip && stored == value)
    }

    /// Largest stored integer, ignoring nulls and non-integer rows.
    pub fn max_int(&self) -> Option<i64> {
        self.values
            .iter()
            .filter_map(|stored| stored.as_ref().and_then(Value::as_int))
            .max()
    }

    /// Appends a row at the end.
    pub fn push(&mut self, value: Option<Value>) {
        self.values.push(value);
    }

    /// Removes and returns the row at `position`.
    ///
    /// # Panics
    /// Panics if `position >= len()`; resolve indices with [`ValueStore::position`].
    pub fn remove(&mut self, position: usize) -> Option<Value> {
        self.values.remove(position)
    }

    /// Replaces the row at `position`, returning the previous value.
    ///
    /// # Panics
    /// Panics if `position >= len()`; resolve indices with [`ValueStore::position`].
    pub fn replace(&mut self, position: usize, value: Option<Value>) -> Option<Value> {
        std::mem::replace(&mut self.values[position], value)
    }
}

impl Deref for ValueStore {
    type Target = [Option<Value>];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}
