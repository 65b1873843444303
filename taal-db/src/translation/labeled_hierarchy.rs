use taal_api::{TaalResult, TranslatableString};

use crate::models::{attribute_type::AttributeType, type_descriptor::TypeDescriptor, type_registry::TypeRegistry};

use super::context_managers::{AttributeTranslationContextManager, TypeTranslationContextManager};

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
    pub label: TranslatableString,
}

/// One entry of the labeled type hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledType {
    pub type_id: String,
    pub label: TranslatableString,
    pub bases: Vec<String>,
    pub attributes: Vec<LabeledAttribute>,
}

impl LabeledType {
    fn from_descriptor(descriptor: &TypeDescriptor) -> TaalResult<Self> {
        let type_id = descriptor.type_id.clone();
        let attributes = descriptor
            .declared_attributes
            .iter()
            .map(|(name, attribute_type)| -> TaalResult<LabeledAttribute> {
                Ok(LabeledAttribute {
                    name: name.clone(),
                    attribute_type: attribute_type.clone(),
                    label: TranslatableString::new(
                        AttributeTranslationContextManager::CONTEXT,
                        AttributeTranslationContextManager::get_message_id(&type_id, name)?,
                    ),
                })
            })
            .collect::<TaalResult<_>>()?;

        Ok(Self {
            label: TranslatableString::new(TypeTranslationContextManager::CONTEXT, type_id.clone()),
            type_id,
            bases: descriptor.bases.clone(),
            attributes,
        })
    }
}

/// The type hierarchy below `start_type_id` (or all types), with type and
/// attribute labels attached. Lazy; call again to restart.
pub fn get_labeled_type_hierarchy<'a>(
    registry: &'a TypeRegistry,
    start_type_id: Option<&str>,
) -> TaalResult<impl Iterator<Item = TaalResult<LabeledType>> + 'a> {
    Ok(registry
        .get_type_hierarchy(start_type_id)?
        .map(LabeledType::from_descriptor))
}
