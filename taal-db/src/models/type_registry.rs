use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde_json::Value;
use taal_api::{TaalError, TaalResult};

use super::attribute_type::AttributeType;
use super::instance::Instance;
use super::type_descriptor::TypeDescriptor;

/// A unique attribute reached while walking a type's ancestry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniqueAttribute<'a> {
    pub declared_by: &'a TypeDescriptor,
    pub name: &'a str,
    /// Number of inheritance steps from the concrete type (0 = itself).
    pub distance: usize,
}

/// Registry of entity types.
///
/// Types must be registered after their bases, so registration order is
/// always a valid parents-before-children order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<TypeDescriptor>,
    positions: HashMap<String, usize>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: TypeDescriptor) -> TaalResult<()> {
        if self.positions.contains_key(&descriptor.type_id) {
            return Err(TaalError::DuplicateType(descriptor.type_id));
        }
        if let Some(missing) = descriptor.bases.iter().find(|base| !self.contains(base)) {
            return Err(TaalError::UnknownType(missing.clone()));
        }
        self.positions
            .insert(descriptor.type_id.clone(), self.types.len());
        self.types.push(descriptor);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> TaalResult<Self> {
        self.register(descriptor)?;
        Ok(self)
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.positions.contains_key(type_id)
    }

    pub fn get_descriptor(&self, type_id: &str) -> TaalResult<&TypeDescriptor> {
        self.positions
            .get(type_id)
            .and_then(|pos| self.types.get(*pos))
            .ok_or_else(|| TaalError::UnknownType(type_id.to_string()))
    }

    /// All descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &TypeDescriptor> + '_ {
        self.types.iter()
    }

    pub fn type_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.types.iter().map(|t| t.type_id.as_str())
    }

    /// The type and all of its ancestors, breadth first, each paired with its
    /// distance from `type_id`. A type reachable along several paths appears
    /// once, at its shortest distance.
    pub fn ancestry(&self, type_id: &str) -> TaalResult<Vec<(usize, &TypeDescriptor)>> {
        let start = self.get_descriptor(type_id)?;
        Ok(self.walk(start))
    }

    fn walk<'a>(&'a self, start: &'a TypeDescriptor) -> Vec<(usize, &'a TypeDescriptor)> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        let mut out = Vec::new();

        seen.insert(start.type_id.as_str());
        queue.push_back((0, start));

        while let Some((distance, descriptor)) = queue.pop_front() {
            out.push((distance, descriptor));
            for base in &descriptor.bases {
                if !seen.insert(base.as_str()) {
                    continue;
                }
                if let Ok(base_descriptor) = self.get_descriptor(base) {
                    queue.push_back((distance + 1, base_descriptor));
                }
            }
        }
        out
    }

    /// Whether `type_id` is `ancestor` or inherits from it.
    pub fn is_subtype(&self, type_id: &str, ancestor: &str) -> TaalResult<bool> {
        Ok(self
            .ancestry(type_id)?
            .iter()
            .any(|(_, d)| d.type_id == ancestor))
    }

    /// Every attribute of `type_id`, inherited ones included. When several
    /// ancestors declare the same name the closest declaration wins.
    pub fn attributes(&self, type_id: &str) -> TaalResult<BTreeMap<&str, &AttributeType>> {
        let mut attributes = BTreeMap::new();
        for (_, descriptor) in self.ancestry(type_id)? {
            for (name, attribute_type) in &descriptor.declared_attributes {
                attributes.entry(name.as_str()).or_insert(attribute_type);
            }
        }
        Ok(attributes)
    }

    pub fn attribute(&self, type_id: &str, name: &str) -> TaalResult<&AttributeType> {
        self.attributes(type_id)?
            .get(name)
            .copied()
            .ok_or_else(|| TaalError::UnknownAttribute {
                type_id: type_id.to_string(),
                attribute: name.to_string(),
            })
    }

    /// Unique attributes across the ancestry of `type_id`: closest types
    /// first, then by declaring type id, then by attribute name.
    pub fn unique_attributes(&self, type_id: &str) -> TaalResult<Vec<UniqueAttribute<'_>>> {
        let mut uniques: Vec<UniqueAttribute<'_>> = self
            .ancestry(type_id)?
            .into_iter()
            .flat_map(|(distance, descriptor)| {
                descriptor
                    .declared_unique_attributes()
                    .map(move |name| UniqueAttribute {
                        declared_by: descriptor,
                        name,
                        distance,
                    })
            })
            .collect();

        uniques.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| a.declared_by.type_id.cmp(&b.declared_by.type_id))
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(uniques)
    }

    /// Current value of `name` on `obj`, falling back to the declared default.
    pub fn attribute_value<'a>(&'a self, obj: &'a Instance, name: &str) -> TaalResult<Option<&'a Value>> {
        let attribute_type = self.attribute(&obj.type_id, name)?;
        Ok(obj.get(name).or(attribute_type.default.as_ref()))
    }

    /// `(index_name, attribute, value)` for every unique attribute of `obj`,
    /// in [`unique_attributes`](Self::unique_attributes) order. Unset values
    /// without a default read as null.
    pub fn unique_values(&self, obj: &Instance) -> TaalResult<Vec<(String, String, Value)>> {
        self.unique_attributes(&obj.type_id)?
            .into_iter()
            .map(|unique| {
                let value = self
                    .attribute_value(obj, unique.name)?
                    .cloned()
                    .unwrap_or(Value::Null);
                Ok((unique.declared_by.index_name(), unique.name.to_string(), value))
            })
            .collect()
    }

    /// The type hierarchy below `start` (inclusive), or every type when
    /// `start` is `None`, parents before children.
    pub fn get_type_hierarchy<'a>(
        &'a self,
        start: Option<&str>,
    ) -> TaalResult<impl Iterator<Item = &'a TypeDescriptor> + 'a> {
        let start = match start {
            Some(type_id) => Some(self.get_descriptor(type_id)?.type_id.clone()),
            None => None,
        };
        Ok(self.types.iter().filter(move |descriptor| match &start {
            Some(start) => self
                .walk(descriptor)
                .iter()
                .any(|(_, ancestor)| &ancestor.type_id == start),
            None => true,
        }))
    }
}
