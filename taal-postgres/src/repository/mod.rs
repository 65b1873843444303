pub mod db_init;
pub mod translation_repository;

pub use translation_repository::PostgresTranslator;
