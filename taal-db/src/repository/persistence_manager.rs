use crate::models::type_registry::TypeRegistry;

use super::{delete::Delete, load::Load, save::Save, serialize::SerializeObject};

/// The object-persistence manager the translation layer wraps
///
/// Bundles the save/delete/load/serialize operations with the type registry
/// describing every persisted type.
pub trait PersistenceManager: Save + Delete + Load + SerializeObject {
    /// The registry of types this manager persists
    fn type_registry(&self) -> &TypeRegistry;
}
