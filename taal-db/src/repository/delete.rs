use async_trait::async_trait;
use taal_api::TaalResult;

use crate::models::instance::Instance;

/// Persistence trait for deleting a single object
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl Delete for GraphManager {
///     async fn delete(&self, obj: &Instance) -> TaalResult<bool> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Delete: Send + Sync {
    /// Remove the stored object matching `obj`'s unique attributes
    ///
    /// # Arguments
    /// * `obj` - The object to delete
    ///
    /// # Returns
    /// * `Ok(true)` - The object existed and was removed
    /// * `Ok(false)` - Nothing was stored for this object
    /// * `Err` - The store could not be written
    async fn delete(&self, obj: &Instance) -> TaalResult<bool>;
}
