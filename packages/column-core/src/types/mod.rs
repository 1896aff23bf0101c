//! Type registry: maps column types onto native value kinds.

mod builtin_types;
mod type_registry;

pub use builtin_types::register_builtin_types;
pub use type_registry::TypeRegistry;
