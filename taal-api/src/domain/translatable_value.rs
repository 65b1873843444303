use serde_json::Value;

use crate::{TaalError, TaalResult, TranslatableString, PLACEHOLDER};

/// What a translatable attribute currently holds on an in-memory object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatableValue<'a> {
    /// Null, absent or the empty string.
    Empty,
    /// Already substituted, or a serialized reference to the stored
    /// translation; the real value lives in the translator.
    Placeholder,
    /// A real value that still has to be routed to the translator.
    Text(&'a str),
}

impl<'a> TranslatableValue<'a> {
    pub fn classify(attribute: &str, value: Option<&'a Value>) -> TaalResult<Self> {
        match value {
            None | Some(Value::Null) => Ok(Self::Empty),
            Some(Value::String(s)) if s.is_empty() => Ok(Self::Empty),
            Some(Value::String(s)) if s == PLACEHOLDER => Ok(Self::Placeholder),
            Some(Value::String(s)) => Ok(Self::Text(s)),
            Some(other) if TranslatableString::from_reference(other).is_some() => Ok(Self::Placeholder),
            Some(other) => Err(TaalError::InvalidAttributeValue {
                attribute: attribute.to_string(),
                reason: format!("expected a string or null, got {other}"),
            }),
        }
    }

    pub fn text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// True for values that must be stored in the translator: anything other
/// than null, the empty string or the placeholder.
pub fn is_translatable_value(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != PLACEHOLDER)
}
