use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaalError {
    #[error("No translator registered for {owner}")]
    NoTranslatorRegistered { owner: String },

    #[error("Cannot save directly to translated fields; value was {value}")]
    DirectWriteToTranslatedField { value: String },

    #[error("Unexpected value found in placeholder column: {value}")]
    UnexpectedPlaceholderValue { value: String },

    #[error("Invalid value for attribute '{attribute}': {reason}")]
    InvalidAttributeValue { attribute: String, reason: String },

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Unknown attribute '{attribute}' on type {type_id}")]
    UnknownAttribute { type_id: String, attribute: String },

    #[error("Type already registered: {0}")]
    DuplicateType(String),

    #[error("No translation for context '{context}', message id '{message_id}' in language '{language}'")]
    TranslationNotFound {
        context: String,
        message_id: String,
        language: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for TaalError {
    fn from(err: sqlx::Error) -> Self {
        TaalError::Database(err.to_string())
    }
}

pub type TaalResult<T> = Result<T, TaalError>;
