//! Column storage: a typed, constrained, ordered sequence of values.

mod codec;
mod store;
mod validation;

use std::sync::Arc;

use column_types::{FieldType, KeySet, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use codec::FieldRecord;
pub use store::ValueStore;

use crate::config::{DuplicateScope, FieldConfig};
use crate::error::{FieldError, Result};
use crate::types::TypeRegistry;
use codec::FieldRecordRef;
use validation::{validate_schema, Constraints};

/// Result of [`Field::get_data`]: one row or every row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataView<'a> {
    /// A single row
    Row(Option<&'a Value>),
    /// All rows in order
    All(&'a [Option<Value>]),
}

impl<'a> DataView<'a> {
    /// Returns the row, if this view holds a single row.
    pub fn row(self) -> Option<Option<&'a Value>> {
        match self {
            DataView::Row(value) => Some(value),
            DataView::All(_) => None,
        }
    }

    /// Returns all rows, if this view holds the full sequence.
    pub fn all(self) -> Option<&'a [Option<Value>]> {
        match self {
            DataView::All(values) => Some(values),
            DataView::Row(_) => None,
        }
    }
}

/// A single table column.
///
/// # Invariants
///
/// - `ty`, `keys` and `default` are fixed at construction.
/// - AUTO_INCREMENT implies an int column with PRIMARY KEY.
/// - A UNIQUE column has no default.
/// - Every row is null or of the kind the registry maps `ty` to.
/// - Under PRIMARY KEY or UNIQUE no two rows are equal.
/// - Under PRIMARY KEY or NOT NULL no row is null.
#[derive(Debug, Clone)]
pub struct Field {
    ty: FieldType,
    keys: KeySet,
    default: Option<Value>,
    store: ValueStore,
    config: FieldConfig,
    registry: Arc<TypeRegistry>,
}

impl Field {
    /// Creates an empty column using the builtin type registry and default config.
    ///
    /// # Arguments
    /// * `ty` - Column type
    /// * `keys` - A single key or any collection of keys
    /// * `default` - Value substituted when an insert supplies null
    ///
    /// # Returns
    /// `InvalidSchema` if the keys and default contradict each other.
    pub fn new(ty: FieldType, keys: impl Into<KeySet>, default: Option<Value>) -> Result<Self> {
        Self::with_config(ty, keys, default, FieldConfig::default())
    }

    /// Creates an empty column with an explicit config.
    pub fn with_config(
        ty: FieldType,
        keys: impl Into<KeySet>,
        default: Option<Value>,
        config: FieldConfig,
    ) -> Result<Self> {
        Self::with_registry(ty, keys, default, config, TypeRegistry::builtin())
    }

    /// Creates an empty column checked against a caller-supplied type registry.
    pub fn with_registry(
        ty: FieldType,
        keys: impl Into<KeySet>,
        default: Option<Value>,
        config: FieldConfig,
        registry: Arc<TypeRegistry>,
    ) -> Result<Self> {
        let keys = keys.into();
        validate_schema(ty, &keys, default.as_ref(), &registry)?;

        Ok(Self {
            ty,
            keys,
            default,
            store: ValueStore::new_with_capacity(config.initial_capacity),
            config,
            registry,
        })
    }

    /// Returns the declared constraint keys.
    pub fn get_keys(&self) -> &KeySet {
        &self.keys
    }

    /// Returns the column type.
    pub fn get_type(&self) -> FieldType {
        self.ty
    }

    /// Returns the default value.
    pub fn get_default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the column config.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Returns the number of rows.
    pub fn length(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the column holds no rows.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns every row in order.
    pub fn values(&self) -> &[Option<Value>] {
        self.store.as_slice()
    }

    /// Returns the row at `index`; negative indices count from the end.
    pub fn get(&self, index: isize) -> Result<Option<&Value>> {
        let position = self.store.position(index, self.config.index_policy)?;
        Ok(self.store.get(position).and_then(Option::as_ref))
    }

    /// Returns the row at `index`, or every row when `index` is `None`.
    pub fn get_data(&self, index: Option<isize>) -> Result<DataView<'_>> {
        match index {
            Some(index) => self.get(index).map(DataView::Row),
            None => Ok(DataView::All(self.values())),
        }
    }

    /// Appends a row after resolving it against the column constraints.
    ///
    /// On failure the column is left unchanged.
    pub fn add(&mut self, value: Option<Value>) -> Result<()> {
        let value = self
            .constraints()
            .resolve(&self.store, value, None)
            .inspect_err(|err| tracing::debug!(ty = %self.ty, "rejected insert: {err}"))?;

        self.store.push(value);
        tracing::trace!(ty = %self.ty, rows = self.store.len(), "row added");
        Ok(())
    }

    /// Removes the row at `index`; later rows shift down by one.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        let position = self.store.position(index, self.config.index_policy)?;
        self.store.remove(position);
        tracing::trace!(ty = %self.ty, position, rows = self.store.len(), "row deleted");
        Ok(())
    }

    /// Overwrites the row at `index` after resolving the new value.
    ///
    /// The row being replaced counts as a duplicate of the new value unless
    /// the config selects [`DuplicateScope::OtherRows`].
    pub fn modify(&mut self, index: isize, value: Option<Value>) -> Result<()> {
        let position = self.store.position(index, self.config.index_policy)?;
        let skip = match self.config.duplicate_scope {
            DuplicateScope::AllRows => None,
            DuplicateScope::OtherRows => Some(position),
        };
        let value = self
            .constraints()
            .resolve(&self.store, value, skip)
            .inspect_err(|err| {
                tracing::debug!(ty = %self.ty, position, "rejected update: {err}");
            })?;

        self.store.replace(position, value);
        tracing::trace!(ty = %self.ty, position, "row modified");
        Ok(())
    }

    /// Encodes the full column state as JSON text.
    pub fn serialized(&self) -> Result<String> {
        let text = serde_json::to_string(&self.record())?;
        tracing::debug!(ty = %self.ty, rows = self.store.len(), "column serialized");
        Ok(text)
    }

    /// Rebuilds a column from [`Field::serialized`] text.
    ///
    /// Every encoded row is replayed through [`Field::add`], so text that
    /// violates its own constraints is rejected.
    pub fn deserialized(text: &str) -> Result<Self> {
        Self::deserialized_with(text, FieldConfig::default(), TypeRegistry::builtin())
    }

    /// Rebuilds a column from text with an explicit config and registry.
    pub fn deserialized_with(
        text: &str,
        config: FieldConfig,
        registry: Arc<TypeRegistry>,
    ) -> Result<Self> {
        let record: FieldRecord = serde_json::from_str(text)?;
        Self::from_record(record, config, registry)
    }

    /// Builds a column from a decoded record, validating every row.
    pub fn from_record(
        record: FieldRecord,
        config: FieldConfig,
        registry: Arc<TypeRegistry>,
    ) -> Result<Self> {
        let mut field = Self::with_registry(
            record.r#type,
            record.key,
            record.default,
            config,
            registry,
        )?;
        for value in record.values {
            field.add(value)?;
        }
        tracing::debug!(ty = %field.ty, rows = field.length(), "column deserialized");
        Ok(field)
    }

    /// Returns an owned snapshot of the column state.
    pub fn to_record(&self) -> FieldRecord {
        FieldRecord {
            key: self.keys.clone(),
            r#type: self.ty,
            values: self.store.to_vec(),
            default: self.default.clone(),
        }
    }

    fn record(&self) -> FieldRecordRef<'_> {
        FieldRecordRef {
            key: &self.keys,
            r#type: self.ty,
            values: self.store.as_slice(),
            default: self.default.as_ref(),
        }
    }

    fn constraints(&self) -> Constraints<'_> {
        Constraints {
            ty: self.ty,
            keys: &self.keys,
            default: self.default.as_ref(),
            registry: &self.registry,
            increment: self.config.increment_policy,
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
            && self.keys == other.keys
            && self.default == other.default
            && self.store == other.store
    }
}

impl TryFrom<FieldRecord> for Field {
    type Error = FieldError;

    fn try_from(record: FieldRecord) -> Result<Self> {
        Self::from_record(record, FieldConfig::default(), TypeRegistry::builtin())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = FieldRecord::deserialize(deserializer)?;
        Field::try_from(record).map_err(serde::de::Error::custom)
    }
}
