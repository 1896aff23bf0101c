use column_types::{FieldType, ValueKind};

use super::type_registry::TypeRegistry;
use crate::error::TypeError;

/// Builtin column types and the native kind each maps to.
pub(super) const BUILTIN_TYPES: [(FieldType, ValueKind); 4] = [
    (FieldType::Int, ValueKind::Int),
    (FieldType::Float, ValueKind::Float),
    (FieldType::Varchar, ValueKind::Str),
    (FieldType::Bool, ValueKind::Bool),
];

/// Registers all builtin column types.
///
/// # Arguments
/// * `registry` - Type registry to register with
///
/// # Returns
/// `Ok(())` if all registrations succeed.
///
/// # Example
/// ```
/// use column_core::types::{TypeRegistry, register_builtin_types};
/// let registry = TypeRegistry::new();
/// assert!(register_builtin_types(&registry).is_ok());
/// ```
pub fn register_builtin_types(registry: &TypeRegistry) -> Result<(), TypeError> {
    for (ty, kind) in BUILTIN_TYPES {
        registry.register(ty, kind)?;
    }
    Ok(())
}
