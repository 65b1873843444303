//! Environment-driven configuration for the PostgreSQL translator.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use taal_api::{TaalError, TaalResult};
use taal_db::models::LanguageCode;
use tracing::info;

use crate::utils::to_heapless_string;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const LANGUAGE_VAR: &str = "TAAL_LANGUAGE";
pub const MAX_CONNECTIONS_VAR: &str = "TAAL_MAX_CONNECTIONS";
pub const ACQUIRE_TIMEOUT_VAR: &str = "TAAL_ACQUIRE_TIMEOUT_SECS";

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct PostgresTranslatorConfig {
    pub database_url: String,
    pub language: LanguageCode,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl PostgresTranslatorConfig {
    /// Reads the configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; everything else has a default.
    pub fn from_env() -> TaalResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> TaalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| TaalError::Configuration(format!("{DATABASE_URL_VAR} is not set")))?;

        let language = lookup(LANGUAGE_VAR).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let language = to_heapless_string(LANGUAGE_VAR, language.trim())?;

        let max_connections = match lookup(MAX_CONNECTIONS_VAR) {
            Some(raw) => parse_var(MAX_CONNECTIONS_VAR, &raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(TaalError::Configuration(format!(
                "{MAX_CONNECTIONS_VAR} must be at least 1"
            )));
        }

        let acquire_timeout_secs = match lookup(ACQUIRE_TIMEOUT_VAR) {
            Some(raw) => parse_var(ACQUIRE_TIMEOUT_VAR, &raw)?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            language,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    /// Opens a connection pool with these settings.
    pub async fn connect(&self) -> TaalResult<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.database_url)
            .await?;
        info!(
            max_connections = self.max_connections,
            language = %self.language,
            "Connected translation store"
        );
        Ok(pool)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> TaalResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| TaalError::Configuration(format!("{name} has an invalid value '{raw}'")))
}
