pub mod delete_translations;
pub mod load_translations;
pub mod repo_impl;
pub mod save_translation;
pub mod translate;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::PostgresTranslator;
