use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::HashMap;
use taal_api::TaalResult;
use tracing::debug;

use crate::models::{instance::Instance, type_registry::TypeRegistry};
use crate::repository::{
    delete::Delete, load::Load, persistence_manager::PersistenceManager, save::Save,
    serialize::{SerializeObject, TYPE_KEY},
};
use crate::utils::canonical_json;

type RecordKey = (String, String);

/// Persistence manager keeping objects in memory, keyed by concrete type and
/// unique attribute values.
///
/// Attribute values go through the declared attribute types on every write
/// and read, so translatable columns only ever hold what a database-backed
/// manager would accept.
#[derive(Debug, Default)]
pub struct MemoryPersistenceManager {
    registry: TypeRegistry,
    records: RwLock<HashMap<RecordKey, Instance>>,
}

impl MemoryPersistenceManager {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn record_key(&self, obj: &Instance) -> TaalResult<RecordKey> {
        let uniques = self
            .registry
            .unique_values(obj)?
            .into_iter()
            .map(|(index, attribute, value)| Value::Array(vec![index.into(), attribute.into(), value]))
            .collect();
        Ok((obj.type_id.clone(), canonical_json(&Value::Array(uniques))?))
    }

    fn to_stored(&self, obj: &Instance) -> TaalResult<Instance> {
        let mut stored = Instance::new(obj.type_id.clone());
        for (name, value) in &obj.attributes {
            let attribute_type = self.registry.attribute(&obj.type_id, name)?;
            stored.set(name.clone(), attribute_type.to_primitive(name, value)?);
        }
        Ok(stored)
    }

    fn from_stored(&self, stored: &Instance) -> TaalResult<Instance> {
        let mut obj = Instance::new(stored.type_id.clone());
        for (name, value) in &stored.attributes {
            let attribute_type = self.registry.attribute(&stored.type_id, name)?;
            obj.set(name.clone(), attribute_type.from_primitive(name, value)?);
        }
        Ok(obj)
    }

    /// Stores `obj` as is, skipping attribute conversion.
    #[cfg(test)]
    pub(crate) fn insert_unchecked(&self, obj: Instance) {
        if let Ok(key) = self.record_key(&obj) {
            self.records.write().insert(key, obj);
        }
    }
}

#[async_trait]
impl Save for MemoryPersistenceManager {
    async fn save(&self, obj: &Instance) -> TaalResult<()> {
        let stored = self.to_stored(obj)?;
        let key = self.record_key(obj)?;
        debug!(type_id = %key.0, key = %key.1, "Storing object");
        self.records.write().insert(key, stored);
        Ok(())
    }
}

#[async_trait]
impl Delete for MemoryPersistenceManager {
    async fn delete(&self, obj: &Instance) -> TaalResult<bool> {
        let key = self.record_key(obj)?;
        Ok(self.records.write().remove(&key).is_some())
    }
}

#[async_trait]
impl Load for MemoryPersistenceManager {
    async fn get(&self, type_id: &str, attribute: &str, value: &Value) -> TaalResult<Option<Instance>> {
        self.registry.attribute(type_id, attribute)?;

        let found = {
            let records = self.records.read();
            let mut found = None;
            for stored in records.values() {
                if !self.registry.is_subtype(&stored.type_id, type_id)? {
                    continue;
                }
                if self.registry.attribute_value(stored, attribute)? == Some(value) {
                    found = Some(stored.clone());
                    break;
                }
            }
            found
        };

        found.map(|stored| self.from_stored(&stored)).transpose()
    }
}

impl SerializeObject for MemoryPersistenceManager {
    fn serialize(&self, obj: &Instance) -> TaalResult<Map<String, Value>> {
        let mut data = Map::new();
        data.insert(TYPE_KEY.to_string(), Value::String(obj.type_id.clone()));
        for name in self.registry.attributes(&obj.type_id)?.into_keys() {
            let value = self.registry.attribute_value(obj, name)?.cloned().unwrap_or(Value::Null);
            data.insert(name.to_string(), value);
        }
        Ok(data)
    }
}

impl PersistenceManager for MemoryPersistenceManager {
    fn type_registry(&self) -> &TypeRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::{custom_fields_registry, type_hierarchy};
    use serde_json::json;
    use taal_api::{TaalError, PLACEHOLDER};

    #[tokio::test]
    async fn test_save_and_get() {
        let manager = MemoryPersistenceManager::new(custom_fields_registry());
        let obj = Instance::new("CustomFieldsEntity")
            .with("id", 1)
            .with("identifier", "first")
            .with("name", PLACEHOLDER);
        manager.save(&obj).await.unwrap();

        let loaded = manager
            .get("CustomFieldsEntity", "identifier", &json!("first"))
            .await
            .unwrap();
        assert_eq!(loaded, Some(obj));
        assert!(manager
            .get("CustomFieldsEntity", "identifier", &json!("second"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_same_unique_values() {
        let manager = MemoryPersistenceManager::new(custom_fields_registry());
        manager
            .save(&Instance::new("CustomFieldsEntity").with("id", 1).with("identifier", "a"))
            .await
            .unwrap();
        manager
            .save(&Instance::new("CustomFieldsEntity").with("id", 1).with("identifier", "b"))
            .await
            .unwrap();
        assert_eq!(manager.len(), 1);
    }

    #[tokio::test]
    async fn test_save_rejects_undeclared_and_invalid_attributes() {
        let manager = MemoryPersistenceManager::new(custom_fields_registry());
        let err = manager
            .save(&Instance::new("CustomFieldsEntity").with("id", 1).with("colour", "red"))
            .await
            .unwrap_err();
        assert!(matches!(err, TaalError::UnknownAttribute { .. }));

        let err = manager
            .save(&Instance::new("CustomFieldsEntity").with("id", "one"))
            .await
            .unwrap_err();
        assert!(matches!(err, TaalError::InvalidAttributeValue { .. }));
        assert!(manager.is_empty());
    }

    #[tokio::test]
    async fn test_get_matches_subtypes() {
        let manager = MemoryPersistenceManager::new(type_hierarchy());
        let fish = Instance::new("Fish").with("legs", 0).with("fins", 4);
        manager.save(&fish).await.unwrap();

        let loaded = manager.get("Animal", "legs", &json!(0)).await.unwrap();
        assert_eq!(loaded.map(|obj| obj.type_id), Some("Fish".to_string()));
        assert!(manager.get("Fish", "legs", &json!(4)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_type() {
        let manager = MemoryPersistenceManager::new(type_hierarchy());
        let err = manager.get("Bird", "wings", &json!(2)).await.unwrap_err();
        assert!(matches!(err, TaalError::UnknownType(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let manager = MemoryPersistenceManager::new(custom_fields_registry());
        let obj = Instance::new("NoCustomFieldsEntity").with("id", 3);
        manager.save(&obj).await.unwrap();
        assert!(manager.delete(&obj).await.unwrap());
        assert!(!manager.delete(&obj).await.unwrap());
    }

    #[test]
    fn test_serialize_includes_type_and_defaults() {
        let manager = MemoryPersistenceManager::new(custom_fields_registry());
        let data = manager.serialize(&Instance::new("InheritedUniques").with("id3", 5)).unwrap();
        assert_eq!(
            Value::Object(data),
            json!({
                "__type__": "InheritedUniques",
                "id1": 1,
                "id2": 1,
                "id3": 5,
            })
        );
    }
}
