use uuid::Uuid;

/// Trait for objects that can be uniquely identified by a UUID
///
/// Used as the key of side tables that must not hold a reference to the
/// object itself, such as the translator registry.
pub trait Identifiable {
    /// Returns the unique identifier of the object
    fn get_id(&self) -> Uuid;
}
