//! Schema and value validation for a column.

use column_types::{FieldKey, FieldType, KeySet, Value};

use super::store::ValueStore;
use crate::config::IncrementPolicy;
use crate::error::{FieldError, Result};
use crate::types::TypeRegistry;

/// Keys that forbid two rows holding the same value.
const DISTINCT_KEYS: [FieldKey; 3] = [FieldKey::Increment, FieldKey::Primary, FieldKey::Unique];

/// Keys that forbid null rows.
const NON_NULL_KEYS: [FieldKey; 2] = [FieldKey::Primary, FieldKey::NotNull];

/// Validates the fixed part of a column definition.
///
/// # Returns
/// `InvalidSchema` when AUTO_INCREMENT is declared on a non-integer column or
/// without PRIMARY KEY, or when a UNIQUE column carries a default.
/// `UnknownType` when `registry` does not know `ty`, and `TypeMismatch` or
/// `NonFiniteFloat` when the default does not conform to `ty`.
pub(crate) fn validate_schema(
    ty: FieldType,
    keys: &KeySet,
    default: Option<&Value>,
    registry: &TypeRegistry,
) -> Result<()> {
    if keys.contains(FieldKey::Increment) {
        if !ty.is_integer() {
            return Err(FieldError::InvalidSchema {
                reason: format!("AUTO_INCREMENT requires an int column, got {ty}"),
            });
        }
        if !keys.contains(FieldKey::Primary) {
            return Err(FieldError::InvalidSchema {
                reason: "AUTO_INCREMENT requires PRIMARY KEY".to_string(),
            });
        }
    }

    if default.is_some() && keys.contains(FieldKey::Unique) {
        return Err(FieldError::InvalidSchema {
            reason: "UNIQUE column cannot have a default value".to_string(),
        });
    }

    registry.kind_of(ty)?;
    if let Some(default) = default {
        registry.check(ty, default)?;
    }

    Ok(())
}

/// Per-column constraint set applied before every insert and update.
pub(crate) struct Constraints<'a> {
    pub ty: FieldType,
    pub keys: &'a KeySet,
    pub default: Option<&'a Value>,
    pub registry: &'a TypeRegistry,
    pub increment: IncrementPolicy,
}

impl Constraints<'_> {
    /// Resolves a candidate value against the stored rows.
    ///
    /// `skip` names a row left out of the duplicate scan, if any.
    ///
    /// # Returns
    /// The value to commit, after default and auto-increment substitution.
    pub(crate) fn resolve(
        &self,
        store: &ValueStore,
        value: Option<Value>,
        skip: Option<usize>,
    ) -> Result<Option<Value>> {
        let mut value = value.or_else(|| self.default.cloned());

        if self.keys.contains(FieldKey::Increment) && value.is_none() {
            value = Some(Value::Int(self.next_identity(store)));
        }

        if self.keys.contains_any(&DISTINCT_KEYS) && store.contains(&value, skip) {
            return Err(FieldError::Duplicate {
                value: value
                    .as_ref()
                    .map_or_else(|| "null".to_string(), Value::to_string),
            });
        }

        let Some(present) = value.as_ref() else {
            if self.keys.contains_any(&NON_NULL_KEYS) {
                return Err(FieldError::NullNotAllowed);
            }
            return Ok(None);
        };

        self.registry.check(self.ty, present)?;
        Ok(value)
    }

    fn next_identity(&self, store: &ValueStore) -> i64 {
        let base = match self.increment {
            IncrementPolicy::RowCount => i64::try_from(store.len()).unwrap_or(i64::MAX),
            IncrementPolicy::RunningMax => store.max_int().unwrap_or(0),
        };
        base.saturating_add(1)
    }
}
