pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::PostgresTranslatorConfig;
pub use postgres_repositories::PostgresRepositories;
pub use repository::translation_repository::PostgresTranslator;

#[cfg(test)]
pub mod test_helper;
