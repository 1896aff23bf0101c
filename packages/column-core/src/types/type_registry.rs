use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use column_types::{FieldType, Value, ValueKind};

use super::builtin_types::BUILTIN_TYPES;
use crate::error::{FieldError, TypeError};

/// Registry mapping column types to the native kind their values must have.
///
/// Stores registered types with lookup by [`FieldType`].
/// Provides thread-safe registration and retrieval.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: RwLock<HashMap<FieldType, ValueKind>>,
}

impl TypeRegistry {
    /// Creates a new empty type registry.
    pub fn new() -> Self {
        Self {
            types: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the process-wide registry holding the builtin types.
    pub fn builtin() -> Arc<TypeRegistry> {
        static BUILTIN: OnceLock<Arc<TypeRegistry>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(TypeRegistry::from_entries(BUILTIN_TYPES)))
            .clone()
    }

    /// Creates a registry holding `entries`; a later entry for the same type wins.
    pub fn from_entries(entries: impl IntoIterator<Item = (FieldType, ValueKind)>) -> Self {
        Self {
            types: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Registers the native kind for a column type.
    ///
    /// # Arguments
    /// * `ty` - Column type
    /// * `kind` - Native kind its values must have
    ///
    /// # Returns
    /// `Ok(())` if successful, `Err(TypeError)` if the type is already registered.
    pub fn register(&self, ty: FieldType, kind: ValueKind) -> Result<(), TypeError> {
        let mut types = self.types.write().map_err(|_| TypeError::LockPoisoned)?;

        if types.contains_key(&ty) {
            return Err(TypeError::AlreadyRegistered { ty });
        }

        types.insert(ty, kind);
        Ok(())
    }

    /// Retrieves the native kind mapped from a column type.
    pub fn get(&self, ty: FieldType) -> Option<ValueKind> {
        let types = self.types.read().ok()?;
        types.get(&ty).copied()
    }

    /// Checks if a type is registered.
    pub fn contains(&self, ty: FieldType) -> bool {
        self.get(ty).is_some()
    }

    /// Returns all registered column types.
    pub fn types(&self) -> Vec<FieldType> {
        let types = match self.types.read() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };
        let mut all: Vec<FieldType> = types.keys().copied().collect();
        all.sort();
        all
    }

    /// Looks up a type, failing if it is not registered.
    pub fn kind_of(&self, ty: FieldType) -> Result<ValueKind, TypeError> {
        self.get(ty).ok_or(TypeError::NotFound { ty })
    }

    /// Validates that a value conforms to a column type.
    ///
    /// # Returns
    /// `Ok(())` if the value's kind equals the mapped kind, `TypeMismatch` if
    /// it does not, `UnknownType` if the type is not registered.
    /// NaN and infinite floats fail with `NonFiniteFloat`; JSON cannot carry them.
    pub fn check(&self, ty: FieldType, value: &Value) -> Result<(), FieldError> {
        let expected = self.kind_of(ty)?;
        let got = value.kind();
        if expected != got {
            return Err(FieldError::TypeMismatch { expected, got });
        }
        if let Value::Float(float) = value {
            if !float.is_finite() {
                return Err(FieldError::NonFiniteFloat {
                    value: float.to_string(),
                });
            }
        }
        Ok(())
    }
}
