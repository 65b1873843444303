#[cfg(test)]
pub mod test_utils {
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;
    use taal_api::{TaalError, TaalResult, TranslatableString};

    use crate::models::{AttributeType, TypeDescriptor, TypeRegistry};
    use crate::repository::translator::Translator;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TranslatorCall {
        Save { context: String, value: String },
        Delete { context: String },
    }

    /// Translator that only records the calls it receives.
    #[derive(Debug, Default)]
    pub struct RecordingTranslator {
        calls: Mutex<Vec<TranslatorCall>>,
    }

    impl RecordingTranslator {
        pub fn calls(&self) -> Vec<TranslatorCall> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl Translator for RecordingTranslator {
        fn language(&self) -> &str {
            "english"
        }

        async fn save_translation(&self, translatable: &TranslatableString) -> TaalResult<()> {
            self.calls.lock().push(TranslatorCall::Save {
                context: translatable.context.clone(),
                value: translatable.pending_value.clone().unwrap_or_default(),
            });
            Ok(())
        }

        async fn delete_translations(&self, translatable: &TranslatableString) -> TaalResult<u64> {
            self.calls.lock().push(TranslatorCall::Delete {
                context: translatable.context.clone(),
            });
            Ok(0)
        }

        async fn translate(&self, translatable: &TranslatableString) -> TaalResult<String> {
            Err(TaalError::TranslationNotFound {
                context: translatable.context.clone(),
                message_id: translatable.message_id.clone(),
                language: self.language().to_string(),
            })
        }
    }

    /// Entity -> Animal -> Fish, where only Animal declares translatable
    /// attributes (`id` and `name`).
    pub fn type_hierarchy() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDescriptor::new("Entity")).unwrap();
        registry
            .register(
                TypeDescriptor::new("Animal")
                    .with_base("Entity")
                    .with_attribute("id", AttributeType::translatable())
                    .with_attribute("name", AttributeType::translatable())
                    .with_attribute("legs", AttributeType::integer()),
            )
            .unwrap();
        registry
            .register(
                TypeDescriptor::new("Fish")
                    .with_base("Animal")
                    .with_attribute("fins", AttributeType::integer()),
            )
            .unwrap();
        registry
    }

    /// Types with and without translatable fields, keyed by unique `id`.
    pub fn custom_fields_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .register(
                TypeDescriptor::new("CustomFieldsEntity")
                    .with_attribute("id", AttributeType::integer().unique())
                    .with_attribute("identifier", AttributeType::string())
                    .with_attribute("name", AttributeType::translatable())
                    .with_attribute("extra1", AttributeType::translatable())
                    .with_attribute("extra2", AttributeType::translatable()),
            )
            .unwrap();
        registry
            .register(
                TypeDescriptor::new("NoCustomFieldsEntity")
                    .with_attribute("id", AttributeType::integer().unique())
                    .with_attribute("identifier", AttributeType::string()),
            )
            .unwrap();
        registry
            .register(
                TypeDescriptor::new("MultipleUniques")
                    .with_attribute("id1", AttributeType::integer().unique().with_default(json!(1)))
                    .with_attribute("id2", AttributeType::integer().unique().with_default(json!(1))),
            )
            .unwrap();
        registry
            .register(
                TypeDescriptor::new("InheritedUniques")
                    .with_base("MultipleUniques")
                    .with_attribute("id3", AttributeType::integer().unique().with_default(json!(1))),
            )
            .unwrap();
        registry
    }
}
