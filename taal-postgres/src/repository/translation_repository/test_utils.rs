use taal_api::{field_context, TranslatableString};
use uuid::Uuid;

/// Create a translatable with a fresh message id so tests never collide on
/// stored rows
pub fn create_test_translatable(value: &str) -> TranslatableString {
    TranslatableString::new(
        field_context("TestEntity", "name"),
        format!("[[\"testentity\", \"id\", \"{}\"]]", Uuid::new_v4()),
    )
    .with_pending_value(Some(value.to_string()))
}
