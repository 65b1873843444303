use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use taal_api::{TaalResult, TranslatableString};
use taal_db::models::{LanguageCode, TranslationModel};
use taal_db::repository::translator::Translator;

use crate::utils::{get_heapless_string, TryFromRow};

/// Translator storing one row per `(context, message_id, language)` in the
/// `translation` table.
///
/// Reads and writes use `language`; deletes span every language.
pub struct PostgresTranslator {
    pub pool: Arc<PgPool>,
    pub language: LanguageCode,
}

impl PostgresTranslator {
    pub fn new(pool: Arc<PgPool>, language: LanguageCode) -> Self {
        Self { pool, language }
    }
}

impl fmt::Debug for PostgresTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresTranslator")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TryFromRow<PgRow> for TranslationModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(TranslationModel {
            id: row.try_get("id")?,
            context: row.try_get("context")?,
            message_id: row.try_get("message_id")?,
            language: get_heapless_string(row, "language")?,
            value: row.try_get("value")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl Translator for PostgresTranslator {
    fn language(&self) -> &str {
        self.language.as_str()
    }

    async fn save_translation(&self, translatable: &TranslatableString) -> TaalResult<()> {
        Self::save_translation_impl(self, translatable).await
    }

    async fn delete_translations(&self, translatable: &TranslatableString) -> TaalResult<u64> {
        Self::delete_translations_impl(self, translatable).await
    }

    async fn translate(&self, translatable: &TranslatableString) -> TaalResult<String> {
        Self::translate_impl(self, translatable).await
    }
}
