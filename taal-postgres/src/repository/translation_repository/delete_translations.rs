use taal_api::{TaalResult, TranslatableString};
use tracing::debug;

use super::repo_impl::PostgresTranslator;

impl PostgresTranslator {
    pub(super) async fn delete_translations_impl(
        repo: &PostgresTranslator,
        translatable: &TranslatableString,
    ) -> TaalResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM translation
            WHERE context = $1 AND message_id = $2
            "#,
        )
        .bind(translatable.context.as_str())
        .bind(translatable.message_id.as_str())
        .execute(&*repo.pool)
        .await?;

        let removed = result.rows_affected();
        debug!(
            context = %translatable.context,
            message_id = %translatable.message_id,
            removed,
            "Deleted translations"
        );
        Ok(removed)
    }
}
