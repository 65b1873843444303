use sqlx::Row;
use taal_api::{TaalError, TaalResult, TranslatableString};

use super::repo_impl::PostgresTranslator;

impl PostgresTranslator {
    pub(super) async fn translate_impl(
        repo: &PostgresTranslator,
        translatable: &TranslatableString,
    ) -> TaalResult<String> {
        let row = sqlx::query(
            r#"
            SELECT value FROM translation
            WHERE context = $1 AND message_id = $2 AND language = $3
            "#,
        )
        .bind(translatable.context.as_str())
        .bind(translatable.message_id.as_str())
        .bind(repo.language.as_str())
        .fetch_optional(&*repo.pool)
        .await?;

        match row {
            Some(row) => Ok(row.try_get("value")?),
            None => Err(TaalError::TranslationNotFound {
                context: translatable.context.clone(),
                message_id: translatable.message_id.clone(),
                language: repo.language.to_string(),
            }),
        }
    }
}
