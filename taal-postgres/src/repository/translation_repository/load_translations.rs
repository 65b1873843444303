use taal_api::{TaalResult, TranslatableString};
use taal_db::models::TranslationModel;

use super::repo_impl::PostgresTranslator;
use crate::utils::{row_error, TryFromRow};

impl PostgresTranslator {
    /// Every stored language of `translatable`, ordered by language.
    pub async fn load_translations(
        &self,
        translatable: &TranslatableString,
    ) -> TaalResult<Vec<TranslationModel>> {
        let rows = sqlx::query(
            r#"
            SELECT id, context, message_id, language, value, updated_at
            FROM translation
            WHERE context = $1 AND message_id = $2
            ORDER BY language
            "#,
        )
        .bind(translatable.context.as_str())
        .bind(translatable.message_id.as_str())
        .fetch_all(&*self.pool)
        .await?;

        rows.iter()
            .map(|row| TranslationModel::try_from_row(row).map_err(row_error))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::translation_repository::test_utils::create_test_translatable;
    use crate::test_helper::setup_test_context;
    use serial_test::serial;
    use taal_db::repository::translator::Translator;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_load_translations() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let english = ctx.translator("english")?;
        let french = ctx.translator("french")?;

        let hello = create_test_translatable("Hello");
        french
            .save_translation(&hello.clone().with_pending_value(Some("Bonjour".to_string())))
            .await?;
        english.save_translation(&hello).await?;

        let rows = english.load_translations(&hello).await?;
        let languages: Vec<&str> = rows.iter().map(|row| row.language.as_str()).collect();
        assert_eq!(languages, vec!["english", "french"]);
        assert!(rows.iter().all(|row| row.context == hello.context));

        english.delete_translations(&hello).await?;
        Ok(())
    }
}
