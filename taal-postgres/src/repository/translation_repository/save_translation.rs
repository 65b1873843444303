use chrono::Utc;
use taal_api::{TaalResult, TranslatableString};
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::PostgresTranslator;

impl PostgresTranslator {
    pub(super) async fn save_translation_impl(
        repo: &PostgresTranslator,
        translatable: &TranslatableString,
    ) -> TaalResult<()> {
        let value = translatable.pending_value.as_deref().unwrap_or_default();

        sqlx::query(
            r#"
            INSERT INTO translation (id, context, message_id, language, value, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (context, message_id, language)
            DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(translatable.context.as_str())
        .bind(translatable.message_id.as_str())
        .bind(repo.language.as_str())
        .bind(value)
        .bind(Utc::now())
        .execute(&*repo.pool)
        .await?;

        debug!(
            context = %translatable.context,
            message_id = %translatable.message_id,
            language = %repo.language,
            "Stored translation"
        );
        Ok(())
    }
}
