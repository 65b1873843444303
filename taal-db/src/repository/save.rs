use async_trait::async_trait;
use taal_api::TaalResult;

use crate::models::instance::Instance;

/// Persistence trait for saving a single object
///
/// Implementations must convert every attribute through
/// [`AttributeType::to_primitive`](crate::models::AttributeType::to_primitive)
/// before writing, so translatable attributes can only ever be persisted as
/// the placeholder.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl Save for GraphManager {
///     async fn save(&self, obj: &Instance) -> TaalResult<()> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Save: Send + Sync {
    /// Create or update `obj`, keyed by its unique attributes
    ///
    /// # Arguments
    /// * `obj` - The object to persist
    ///
    /// # Returns
    /// * `Ok(())` - The object was written
    /// * `Err` - Validation failed or the store could not be written
    async fn save(&self, obj: &Instance) -> TaalResult<()>;
}
