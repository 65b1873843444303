use taal_api::TaalResult;

use crate::models::type_registry::TypeRegistry;

use super::context_managers::{
    AttributeTranslationContextManager, TranslationContextManager, TypeTranslationContextManager,
};

/// Aggregates context managers for bulk export of translation strings.
#[derive(Default)]
pub struct TranslationManager<'a> {
    context_managers: Vec<Box<dyn TranslationContextManager + 'a>>,
}

impl<'a> TranslationManager<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type and attribute label contexts over `registry`.
    pub fn for_registry(registry: &'a TypeRegistry) -> Self {
        Self::new()
            .with_context_manager(TypeTranslationContextManager::new(registry))
            .with_context_manager(AttributeTranslationContextManager::new(registry))
    }

    pub fn with_context_manager(mut self, manager: impl TranslationContextManager + 'a) -> Self {
        self.context_managers.push(Box::new(manager));
        self
    }

    pub fn contexts(&self) -> impl Iterator<Item = &str> + '_ {
        self.context_managers.iter().map(|manager| manager.context())
    }

    /// Every `(context, message_id)` pair, context managers in the order
    /// they were added.
    pub fn list_contexts_and_message_ids(&self) -> impl Iterator<Item = TaalResult<(String, String)>> + '_ {
        self.context_managers.iter().flat_map(|manager| {
            let context = manager.context().to_string();
            manager
                .list_message_ids()
                .map(move |message_id| message_id.map(|message_id| (context.clone(), message_id)))
        })
    }
}
