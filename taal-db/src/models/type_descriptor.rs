use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::attribute_type::AttributeType;

/// Metadata for one entity type: its direct bases and the attributes it
/// declares itself. Inherited attributes are resolved by the
/// [`TypeRegistry`](super::type_registry::TypeRegistry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub type_id: String,
    pub bases: Vec<String>,
    pub declared_attributes: BTreeMap<String, AttributeType>,
}

impl TypeDescriptor {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            bases: Vec::new(),
            declared_attributes: BTreeMap::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.declared_attributes.insert(name.into(), attribute_type);
        self
    }

    /// Declared attributes flagged unique, in name order.
    pub fn declared_unique_attributes(&self) -> impl Iterator<Item = &str> + '_ {
        self.declared_attributes
            .iter()
            .filter(|(_, attr)| attr.unique)
            .map(|(name, _)| name.as_str())
    }

    /// Declared attributes flagged translatable, in name order.
    pub fn declared_translatable_attributes(&self) -> impl Iterator<Item = &str> + '_ {
        self.declared_attributes
            .iter()
            .filter(|(_, attr)| attr.is_translatable())
            .map(|(name, _)| name.as_str())
    }

    /// Name of the unique index this type's constraints live in.
    pub fn index_name(&self) -> String {
        self.type_id.to_lowercase()
    }
}
