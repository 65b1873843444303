use async_trait::async_trait;
use serde_json::Value;
use taal_api::TaalResult;

use crate::models::instance::Instance;

/// Persistence trait for loading an object by one of its attribute values
///
/// Implementations must convert every stored attribute through
/// [`AttributeType::from_primitive`](crate::models::AttributeType::from_primitive),
/// so corrupted placeholder columns surface as errors.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl Load for GraphManager {
///     async fn get(&self, type_id: &str, attribute: &str, value: &Value) -> TaalResult<Option<Instance>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load: Send + Sync {
    /// Load the object of type `type_id` (or a subtype) whose `attribute` equals `value`
    ///
    /// # Arguments
    /// * `type_id` - The type to search
    /// * `attribute` - The attribute to match on
    /// * `value` - The value to match
    ///
    /// # Returns
    /// * `Ok(Some(Instance))` - The loaded object
    /// * `Ok(None)` - If no object matches
    /// * `Err` - The store could not be read or held invalid data
    async fn get(&self, type_id: &str, attribute: &str, value: &Value) -> TaalResult<Option<Instance>>;
}
