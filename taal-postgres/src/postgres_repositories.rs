use sqlx::PgPool;
use std::sync::Arc;
use taal_api::TaalResult;

use crate::config::PostgresTranslatorConfig;
use crate::repository::db_init::init_database;
use crate::repository::translation_repository::PostgresTranslator;
use crate::utils::to_heapless_string;

/// Builds translators sharing one connection pool
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connect using `config`
    pub async fn connect(config: &PostgresTranslatorConfig) -> TaalResult<Self> {
        Ok(Self::new(Arc::new(config.connect().await?)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create the translation table if it does not exist yet
    pub async fn init_schema(&self) -> TaalResult<()> {
        init_database(&self.pool).await?;
        Ok(())
    }

    /// Create a translator reading and writing `language`
    pub fn build_translator(&self, language: &str) -> TaalResult<PostgresTranslator> {
        let language = to_heapless_string("language", language)?;
        Ok(PostgresTranslator::new(self.pool.clone(), language))
    }

    /// Create a translator for the language configured in `config`
    pub fn build_configured_translator(&self, config: &PostgresTranslatorConfig) -> PostgresTranslator {
        PostgresTranslator::new(self.pool.clone(), config.language.clone())
    }
}
