use serde_json::Value;
use taal_api::{field_context, TaalResult, TranslatableString};

use crate::models::{instance::Instance, type_registry::TypeRegistry};
use crate::utils::canonical_json;

/// Derives the message id of `obj` from its unique attributes.
///
/// The id is the canonical JSON list of `[index_name, attribute, value]`
/// triples, closest types first and alphabetical within a type, for example
/// `[["inheriteduniques", "id3", 1], ["multipleuniques", "id1", 1]]`.
pub fn get_message_id(registry: &TypeRegistry, obj: &Instance) -> TaalResult<String> {
    let triples = registry
        .unique_values(obj)?
        .into_iter()
        .map(|(index, attribute, value)| {
            Value::Array(vec![Value::String(index), Value::String(attribute), value])
        })
        .collect();
    canonical_json(&Value::Array(triples))
}

/// Context under which values of `attr_name` on `obj` are stored.
pub fn get_context(obj: &Instance, attr_name: &str) -> String {
    field_context(&obj.type_id, attr_name)
}

/// Builds the translatable for `attr_name` on `obj` carrying `value`.
pub fn make_from_obj(
    registry: &TypeRegistry,
    obj: &Instance,
    attr_name: &str,
    value: Option<&str>,
) -> TaalResult<TranslatableString> {
    registry.attribute(&obj.type_id, attr_name)?;
    let message_id = get_message_id(registry, obj)?;
    Ok(TranslatableString::new(get_context(obj, attr_name), message_id)
        .with_pending_value(value.map(str::to_string)))
}
