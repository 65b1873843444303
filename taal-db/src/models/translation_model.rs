use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identifiable::Identifiable;

/// Maximum length of a language code such as `en` or `english`.
pub const LANGUAGE_MAX_LEN: usize = 16;

pub type LanguageCode = HeaplessString<LANGUAGE_MAX_LEN>;

/// # Documentation
/// One stored translation: the value of a translatable string in one
/// language.
///
/// `(context, message_id, language)` is unique across the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationModel {
    pub id: Uuid,

    /// Namespace of the message id, e.g. `taal:kaiso_field:Animal:name`
    pub context: String,

    /// Canonical identity of the translated object or label
    pub message_id: String,

    pub language: LanguageCode,

    pub value: String,

    /// Last time the value was written
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for TranslationModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
