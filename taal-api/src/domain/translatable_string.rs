use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A string whose value lives in a translation store.
///
/// Identity is `(context, message_id)`. `pending_value` carries the value
/// awaiting storage and is only populated while a save is in flight; it is
/// never part of the serialized reference written into object data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslatableString {
    pub context: String,
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_value: Option<String>,
}

impl TranslatableString {
    pub fn new(context: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message_id: message_id.into(),
            pending_value: None,
        }
    }

    pub fn with_pending_value(mut self, value: Option<String>) -> Self {
        self.pending_value = value;
        self
    }

    /// Whether the pending value should be stored rather than cleared.
    pub fn has_pending_value(&self) -> bool {
        crate::is_translatable_value(self.pending_value.as_deref())
    }

    /// The reference written into serialized data in place of the value.
    pub fn to_reference(&self) -> Value {
        serde_json::json!({
            "context": self.context,
            "message_id": self.message_id,
        })
    }

    /// Parses a serialized reference. Returns `None` unless `value` is an
    /// object carrying string `context` and `message_id` and nothing else.
    pub fn from_reference(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value::<TranslatableString>(value.clone())
            .ok()
            .filter(|ts| ts.pending_value.is_none())
    }
}

impl fmt::Display for TranslatableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TranslatableString({}, {})", self.context, self.message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_omits_pending_value() {
        let ts = TranslatableString::new("ctx", "[1]").with_pending_value(Some("Hello".into()));
        assert_eq!(ts.to_reference(), json!({"context": "ctx", "message_id": "[1]"}));
    }

    #[test]
    fn test_from_reference() {
        let parsed = TranslatableString::from_reference(&json!({"context": "ctx", "message_id": "[1]"}));
        assert_eq!(parsed, Some(TranslatableString::new("ctx", "[1]")));
    }

    #[test]
    fn test_from_reference_rejects_malformed() {
        assert!(TranslatableString::from_reference(&json!("invalid-value")).is_none());
        assert!(TranslatableString::from_reference(&json!({"context": "ctx"})).is_none());
        assert!(TranslatableString::from_reference(&json!({"context": "ctx", "message_id": 1})).is_none());
        assert!(TranslatableString::from_reference(
            &json!({"context": "ctx", "message_id": "[1]", "extra": true})
        )
        .is_none());
    }

    #[test]
    fn test_has_pending_value() {
        let ts = TranslatableString::new("ctx", "[1]");
        assert!(!ts.has_pending_value());
        assert!(!ts.clone().with_pending_value(Some(String::new())).has_pending_value());
        assert!(ts.with_pending_value(Some("x".into())).has_pending_value());
    }
}
