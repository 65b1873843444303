use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use taal_api::{TaalError, TaalResult, TranslatableString};
use tracing::debug;

use crate::repository::translator::Translator;

type TranslationKey = (String, String, String);

/// Translation rows held in memory, shared by translators of every language.
#[derive(Debug, Default)]
pub struct MemoryTranslationStore {
    rows: RwLock<BTreeMap<TranslationKey, String>>,
}

impl MemoryTranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, context: &str, message_id: &str, language: &str, value: impl Into<String>) {
        self.rows.write().insert(
            (context.to_string(), message_id.to_string(), language.to_string()),
            value.into(),
        );
    }

    pub fn get(&self, context: &str, message_id: &str, language: &str) -> Option<String> {
        self.rows
            .read()
            .get(&(context.to_string(), message_id.to_string(), language.to_string()))
            .cloned()
    }

    /// Removes every language stored for `(context, message_id)`.
    pub fn remove_all(&self, context: &str, message_id: &str) -> u64 {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|(c, m, _), _| !(c == context && m == message_id));
        (before - rows.len()) as u64
    }

    pub fn languages(&self, context: &str, message_id: &str) -> Vec<String> {
        self.rows
            .read()
            .keys()
            .filter(|(c, m, _)| c == context && m == message_id)
            .map(|(_, _, language)| language.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

/// [`Translator`] for one language over a [`MemoryTranslationStore`].
#[derive(Debug, Clone)]
pub struct MemoryTranslator {
    store: Arc<MemoryTranslationStore>,
    language: String,
}

impl MemoryTranslator {
    pub fn new(store: Arc<MemoryTranslationStore>, language: impl Into<String>) -> Self {
        Self {
            store,
            language: language.into(),
        }
    }

    pub fn store(&self) -> &Arc<MemoryTranslationStore> {
        &self.store
    }
}

#[async_trait]
impl Translator for MemoryTranslator {
    fn language(&self) -> &str {
        &self.language
    }

    async fn save_translation(&self, translatable: &TranslatableString) -> TaalResult<()> {
        let value = translatable.pending_value.clone().unwrap_or_default();
        debug!(
            context = %translatable.context,
            message_id = %translatable.message_id,
            language = %self.language,
            "Storing translation"
        );
        self.store
            .insert(&translatable.context, &translatable.message_id, &self.language, value);
        Ok(())
    }

    async fn delete_translations(&self, translatable: &TranslatableString) -> TaalResult<u64> {
        Ok(self
            .store
            .remove_all(&translatable.context, &translatable.message_id))
    }

    async fn translate(&self, translatable: &TranslatableString) -> TaalResult<String> {
        self.store
            .get(&translatable.context, &translatable.message_id, &self.language)
            .ok_or_else(|| TaalError::TranslationNotFound {
                context: translatable.context.clone(),
                message_id: translatable.message_id.clone(),
                language: self.language.clone(),
            })
    }
}
