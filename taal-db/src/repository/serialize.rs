use serde_json::{Map, Value};
use taal_api::TaalResult;

use crate::models::instance::Instance;

/// Attribute key holding the object's type id in serialized data.
pub const TYPE_KEY: &str = "__type__";

/// Persistence trait for turning an object into a plain mapping
pub trait SerializeObject: Send + Sync {
    /// Serialize `obj` into `{"__type__": type_id, attribute: value, ...}`
    ///
    /// Every attribute of the type is present, unset ones as their default
    /// or null.
    fn serialize(&self, obj: &Instance) -> TaalResult<Map<String, Value>>;
}
