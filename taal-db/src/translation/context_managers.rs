use taal_api::{TaalResult, ATTRIBUTE_CONTEXT, TYPE_CONTEXT};

use crate::models::type_registry::TypeRegistry;
use crate::utils::canonical_string_list;

/// Enumerates the message ids that exist under one context.
///
/// `list_message_ids` is finite and can be called repeatedly; each call
/// starts a fresh enumeration.
pub trait TranslationContextManager: Send + Sync {
    fn context(&self) -> &str;

    fn list_message_ids(&self) -> Box<dyn Iterator<Item = TaalResult<String>> + '_>;
}

/// Type labels: one message id per registered type, the type id itself.
#[derive(Debug, Clone, Copy)]
pub struct TypeTranslationContextManager<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> TypeTranslationContextManager<'a> {
    pub const CONTEXT: &'static str = TYPE_CONTEXT;

    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }
}

impl TranslationContextManager for TypeTranslationContextManager<'_> {
    fn context(&self) -> &str {
        Self::CONTEXT
    }

    fn list_message_ids(&self) -> Box<dyn Iterator<Item = TaalResult<String>> + '_> {
        Box::new(self.registry.type_ids().map(|type_id| Ok(type_id.to_string())))
    }
}

/// Attribute labels: one message id per translatable attribute, taken from
/// the declaring type only.
#[derive(Debug, Clone, Copy)]
pub struct AttributeTranslationContextManager<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> AttributeTranslationContextManager<'a> {
    pub const CONTEXT: &'static str = ATTRIBUTE_CONTEXT;

    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// `["TypeId", "attr"]`
    pub fn get_message_id(type_id: &str, attr_name: &str) -> TaalResult<String> {
        canonical_string_list(&[type_id, attr_name])
    }
}

impl TranslationContextManager for AttributeTranslationContextManager<'_> {
    fn context(&self) -> &str {
        Self::CONTEXT
    }

    fn list_message_ids(&self) -> Box<dyn Iterator<Item = TaalResult<String>> + '_> {
        Box::new(self.registry.descriptors().flat_map(|descriptor| {
            descriptor
                .declared_translatable_attributes()
                .map(move |attr| Self::get_message_id(&descriptor.type_id, attr))
        }))
    }
}
