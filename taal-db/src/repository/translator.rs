use async_trait::async_trait;
use taal_api::{TaalResult, TranslatableString};

/// Storage for translated strings
///
/// A translator reads and writes values for one language; deletion always
/// spans every language stored for the translatable.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl Translator for PostgresTranslator {
///     async fn save_translation(&self, translatable: &TranslatableString) -> TaalResult<()> {
///         // Implementation
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait Translator: Send + Sync {
    /// The language this translator reads and writes
    fn language(&self) -> &str;

    /// Store `translatable.pending_value` for this translator's language
    ///
    /// # Arguments
    /// * `translatable` - Context, message id and the value to store
    async fn save_translation(&self, translatable: &TranslatableString) -> TaalResult<()>;

    /// Remove the stored values for `translatable` in every language
    ///
    /// # Returns
    /// * `Ok(u64)` - The number of stored values removed
    async fn delete_translations(&self, translatable: &TranslatableString) -> TaalResult<u64>;

    /// Look up the value stored for `translatable` in this translator's language
    ///
    /// # Returns
    /// * `Ok(String)` - The stored value
    /// * `Err(TaalError::TranslationNotFound)` - If nothing is stored
    async fn translate(&self, translatable: &TranslatableString) -> TaalResult<String>;
}
