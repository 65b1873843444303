use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use taal_api::{TaalResult, TranslatableString, TranslatableValue, PLACEHOLDER};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{identifiable::Identifiable, instance::Instance, type_registry::TypeRegistry};
use crate::repository::{persistence_manager::PersistenceManager, translator::Translator};

use super::labeled_hierarchy::{self, LabeledType};
use super::message_id::{get_context, get_message_id};
use super::registry::TranslatorRegistry;

/// Returns the translatables of `obj` that a save has to act on.
///
/// Mutates `obj`: every translatable attribute holding a real value is
/// replaced with the placeholder. Attributes already holding the placeholder
/// are skipped. Empty attributes are returned without a pending value so the
/// caller can delete their stored translations.
///
/// Expects `Translator::save_translation` or `Translator::delete_translations`
/// to be called for each returned translatable.
pub fn collect_translatables(
    registry: &TypeRegistry,
    obj: &mut Instance,
) -> TaalResult<Vec<TranslatableString>> {
    let message_id = get_message_id(registry, obj)?;
    let mut translatables = Vec::new();

    for (attr_name, attr_type) in registry.attributes(&obj.type_id)? {
        if !attr_type.is_translatable() {
            continue;
        }
        let pending = match TranslatableValue::classify(attr_name, registry.attribute_value(obj, attr_name)?)? {
            TranslatableValue::Placeholder => continue,
            TranslatableValue::Empty => None,
            TranslatableValue::Text(text) => Some(text.to_string()),
        };
        if pending.is_some() {
            obj.set(attr_name, PLACEHOLDER);
        }
        translatables.push(
            TranslatableString::new(get_context(obj, attr_name), message_id.clone())
                .with_pending_value(pending),
        );
    }

    Ok(translatables)
}

/// Returns one translatable per translatable attribute of `obj`, whatever it
/// holds. Does not modify `obj`.
pub fn collect_all_translatables(
    registry: &TypeRegistry,
    obj: &Instance,
) -> TaalResult<Vec<TranslatableString>> {
    let message_id = get_message_id(registry, obj)?;
    Ok(registry
        .attributes(&obj.type_id)?
        .into_iter()
        .filter(|(_, attr_type)| attr_type.is_translatable())
        .map(|(attr_name, _)| TranslatableString::new(get_context(obj, attr_name), message_id.clone()))
        .collect())
}

/// Persistence manager wrapper that routes translatable attributes through a
/// [`Translator`].
///
/// Each manager has its own identity in a [`TranslatorRegistry`]; the entry
/// is removed when the manager is dropped.
pub struct TranslatingManager<M: PersistenceManager> {
    inner: M,
    id: Uuid,
    registry: Arc<TranslatorRegistry>,
}

impl<M: PersistenceManager> TranslatingManager<M> {
    /// Wraps `inner`, using the process-wide translator registry.
    pub fn new(inner: M) -> Self {
        Self::with_registry(inner, TranslatorRegistry::global())
    }

    pub fn with_registry(inner: M, registry: Arc<TranslatorRegistry>) -> Self {
        Self {
            inner,
            id: Uuid::new_v4(),
            registry,
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn type_registry(&self) -> &TypeRegistry {
        self.inner.type_registry()
    }

    pub fn register_translator(&self, translator: Arc<dyn Translator>) {
        self.registry.register(self, translator);
    }

    pub fn translator(&self) -> TaalResult<Arc<dyn Translator>> {
        self.registry.get(self)
    }

    /// Saves `obj`, storing its translatable values in the translator.
    ///
    /// Real values are replaced with the placeholder on a copy of `obj` that
    /// is handed to the underlying save. `obj` only receives the placeholders
    /// once that save succeeds, so a failed save leaves it untouched. Each
    /// real value is then stored and each empty attribute has its
    /// translations removed in every language.
    pub async fn save(&self, obj: &mut Instance) -> TaalResult<()> {
        let mut staged = obj.clone();
        let translatables = collect_translatables(self.type_registry(), &mut staged)?;
        let translator = if translatables.is_empty() {
            None
        } else {
            Some(self.translator()?)
        };

        self.inner.save(&staged).await?;
        *obj = staged;

        if let Some(translator) = translator {
            for translatable in &translatables {
                if translatable.has_pending_value() {
                    translator.save_translation(translatable).await?;
                } else {
                    // delete all translations (in every language) if the
                    // value is null or the empty string
                    translator.delete_translations(translatable).await?;
                }
            }
            info!(
                type_id = %obj.type_id,
                translatables = translatables.len(),
                "Saved object with translations"
            );
        } else {
            debug!(type_id = %obj.type_id, "Saved object without translatable values");
        }
        Ok(())
    }

    /// Deletes `obj` and every stored translation of its translatable
    /// attributes, in every language.
    pub async fn delete(&self, obj: &Instance) -> TaalResult<bool> {
        let translatables = collect_all_translatables(self.type_registry(), obj)?;
        let translator = if translatables.is_empty() {
            None
        } else {
            Some(self.translator()?)
        };

        let deleted = self.inner.delete(obj).await?;

        if let Some(translator) = translator {
            let mut removed = 0;
            for translatable in &translatables {
                removed += translator.delete_translations(translatable).await?;
            }
            info!(type_id = %obj.type_id, removed, "Deleted object translations");
        }
        Ok(deleted)
    }

    /// Serializes `obj`, replacing translatable values with references to
    /// their stored translations.
    pub fn serialize(&self, obj: &Instance) -> TaalResult<Map<String, Value>> {
        let registry = self.type_registry();
        let message_id = get_message_id(registry, obj)?;
        let mut data = self.inner.serialize(obj)?;

        for (attr_name, attr_type) in registry.attributes(&obj.type_id)? {
            if !attr_type.is_translatable() {
                continue;
            }
            let Some(value) = data.get_mut(attr_name) else {
                continue;
            };
            let has_translation = !matches!(
                TranslatableValue::classify(attr_name, Some(&*value))?,
                TranslatableValue::Empty
            );
            if has_translation {
                *value = TranslatableString::new(get_context(obj, attr_name), message_id.clone())
                    .to_reference();
            }
        }
        Ok(data)
    }

    pub async fn get(&self, type_id: &str, attribute: &str, value: &Value) -> TaalResult<Option<Instance>> {
        self.inner.get(type_id, attribute, value).await
    }

    pub fn get_labeled_type_hierarchy<'a>(
        &'a self,
        start_type_id: Option<&str>,
    ) -> TaalResult<impl Iterator<Item = TaalResult<LabeledType>> + 'a> {
        labeled_hierarchy::get_labeled_type_hierarchy(self.type_registry(), start_type_id)
    }
}

impl<M: PersistenceManager> Identifiable for TranslatingManager<M> {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl<M: PersistenceManager> fmt::Display for TranslatingManager<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TranslatingManager({})", self.id)
    }
}

impl<M: PersistenceManager> Drop for TranslatingManager<M> {
    fn drop(&mut self) {
        self.registry.unregister(self.id);
    }
}
