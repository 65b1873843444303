//! Translator registry
//!
//! Maps persistence-manager identities to the translator that stores their
//! translatable values. Entries are keyed by the owner's UUID rather than by
//! a reference to the owner, so a registration never keeps a manager alive;
//! managers remove their own entry when dropped.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use taal_api::{TaalError, TaalResult};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::repository::{persistence_manager::PersistenceManager, translator::Translator};

use super::manager::TranslatingManager;

static GLOBAL_REGISTRY: OnceLock<Arc<TranslatorRegistry>> = OnceLock::new();

#[derive(Default)]
pub struct TranslatorRegistry {
    translators: RwLock<HashMap<Uuid, Arc<dyn Translator>>>,
}

impl TranslatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> Arc<TranslatorRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| Arc::new(TranslatorRegistry::new()))
            .clone()
    }

    /// Associates `translator` with `owner`, replacing any previous entry.
    ///
    /// [`TranslatingManager`] owners unregister themselves when dropped; any
    /// other owner must call [`unregister`](Self::unregister) before it goes
    /// away, or its entry stays in the registry.
    pub fn register<O>(&self, owner: &O, translator: Arc<dyn Translator>)
    where
        O: Identifiable + ?Sized,
    {
        self.translators.write().insert(owner.get_id(), translator);
    }

    pub fn get<O>(&self, owner: &O) -> TaalResult<Arc<dyn Translator>>
    where
        O: Identifiable + fmt::Display + ?Sized,
    {
        self.translators
            .read()
            .get(&owner.get_id())
            .cloned()
            .ok_or_else(|| TaalError::NoTranslatorRegistered {
                owner: owner.to_string(),
            })
    }

    pub fn unregister(&self, owner_id: Uuid) -> Option<Arc<dyn Translator>> {
        self.translators.write().remove(&owner_id)
    }

    pub fn contains(&self, owner_id: Uuid) -> bool {
        self.translators.read().contains_key(&owner_id)
    }

    pub fn len(&self) -> usize {
        self.translators.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.read().is_empty()
    }
}

impl fmt::Debug for TranslatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorRegistry")
            .field("owners", &self.translators.read().keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Registers `translator` for `manager` in the registry the manager is
/// bound to. The entry is removed when the manager is dropped.
pub fn register_translator<M: PersistenceManager>(
    manager: &TranslatingManager<M>,
    translator: Arc<dyn Translator>,
) {
    manager.register_translator(translator);
}

/// Looks up the translator registered for `manager`.
pub fn get_translator<M: PersistenceManager>(manager: &TranslatingManager<M>) -> TaalResult<Arc<dyn Translator>> {
    manager.translator()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryPersistenceManager, MemoryTranslationStore, MemoryTranslator};
    use crate::models::type_registry::TypeRegistry;

    struct Owner(Uuid);

    impl Identifiable for Owner {
        fn get_id(&self) -> Uuid {
            self.0
        }
    }

    impl fmt::Display for Owner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Owner({})", self.0)
        }
    }

    fn translator(language: &str) -> Arc<dyn Translator> {
        Arc::new(MemoryTranslator::new(Arc::new(MemoryTranslationStore::new()), language))
    }

    #[test]
    fn test_get_unregistered_owner() {
        let registry = TranslatorRegistry::new();
        let owner = Owner(Uuid::new_v4());
        let Err(err) = registry.get(&owner) else {
            panic!("expected no translator for an unregistered owner");
        };
        assert!(matches!(err, TaalError::NoTranslatorRegistered { .. }));
        assert_eq!(err.to_string(), format!("No translator registered for Owner({})", owner.0));
    }

    #[test]
    fn test_register_then_get_returns_same_instance() {
        let registry = TranslatorRegistry::new();
        let owner = Owner(Uuid::new_v4());
        let registered = translator("english");
        registry.register(&owner, registered.clone());

        let found = registry.get(&owner).unwrap();
        assert!(Arc::ptr_eq(&registered, &found));
    }

    #[test]
    fn test_register_overwrites() {
        let registry = TranslatorRegistry::new();
        let owner = Owner(Uuid::new_v4());
        registry.register(&owner, translator("english"));
        let second = translator("french");
        registry.register(&owner, second.clone());

        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&second, &registry.get(&owner).unwrap()));
    }

    #[test]
    fn test_unregister() {
        let registry = TranslatorRegistry::new();
        let owner = Owner(Uuid::new_v4());
        registry.register(&owner, translator("english"));
        assert!(registry.contains(owner.0));

        assert!(registry.unregister(owner.0).is_some());
        assert!(registry.is_empty());
        assert!(registry.get(&owner).is_err());
    }

    #[test]
    fn test_registry_functions_follow_manager_lifetime() {
        let manager = TranslatingManager::new(MemoryPersistenceManager::new(TypeRegistry::new()));
        assert!(get_translator(&manager).is_err());

        let registered = translator("english");
        register_translator(&manager, registered.clone());
        assert!(Arc::ptr_eq(&registered, &get_translator(&manager).unwrap()));

        let global = TranslatorRegistry::global();
        assert!(Arc::ptr_eq(&global, &TranslatorRegistry::global()));
        let id = manager.get_id();
        assert!(global.contains(id));

        drop(manager);
        assert!(!global.contains(id));
    }
}
