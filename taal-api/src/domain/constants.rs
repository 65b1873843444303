/// Stored in place of a translatable attribute's real value.
pub const PLACEHOLDER: &str = "taal:placeholder";

/// Context for type labels; message ids are type ids.
pub const TYPE_CONTEXT: &str = "taal:kaiso_type";

/// Context for attribute labels; message ids are `["TypeId", "attr"]`.
pub const ATTRIBUTE_CONTEXT: &str = "taal:kaiso_attr";

/// Prefix of the per-field value context, `taal:kaiso_field:{TypeId}:{attr}`.
pub const FIELD_CONTEXT_PREFIX: &str = "taal:kaiso_field";

/// Builds the context under which values of `attr_name` on `type_id` are stored.
pub fn field_context(type_id: &str, attr_name: &str) -> String {
    format!("{FIELD_CONTEXT_PREFIX}:{type_id}:{attr_name}")
}
