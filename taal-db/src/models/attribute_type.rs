use serde::{Deserialize, Serialize};
use serde_json::Value;
use taal_api::{TaalError, TaalResult, TranslatableString, PLACEHOLDER};
use uuid::Uuid;

/// Value kind of an entity attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    String,
    Integer,
    Float,
    Boolean,
    Uuid,
    /// Value is stored in a translator; only the placeholder is persisted.
    TranslatableString,
}

/// Declared type of an entity attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeType {
    pub kind: AttributeKind,

    /// Participates in the owning type's unique constraint (and therefore in
    /// the message id of every instance of that type and its subtypes).
    pub unique: bool,

    /// Value read when an instance does not set the attribute.
    pub default: Option<Value>,
}

impl AttributeType {
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            unique: false,
            default: None,
        }
    }

    pub fn string() -> Self {
        Self::new(AttributeKind::String)
    }

    pub fn integer() -> Self {
        Self::new(AttributeKind::Integer)
    }

    pub fn float() -> Self {
        Self::new(AttributeKind::Float)
    }

    pub fn boolean() -> Self {
        Self::new(AttributeKind::Boolean)
    }

    pub fn uuid() -> Self {
        Self::new(AttributeKind::Uuid)
    }

    pub fn translatable() -> Self {
        Self::new(AttributeKind::TranslatableString)
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn is_translatable(&self) -> bool {
        matches!(self.kind, AttributeKind::TranslatableString)
    }

    /// Converts an in-memory value into its persisted form.
    ///
    /// Translatable attributes only accept null, the empty string, the
    /// placeholder or a translatable reference, which is persisted as the
    /// placeholder. Anything else means the caller bypassed the translating
    /// save flow.
    pub fn to_primitive(&self, attribute: &str, value: &Value) -> TaalResult<Value> {
        match self.kind {
            AttributeKind::TranslatableString => match value {
                Value::Null => Ok(Value::Null),
                Value::String(s) if s.is_empty() || s == PLACEHOLDER => Ok(value.clone()),
                Value::String(s) => Err(TaalError::DirectWriteToTranslatedField { value: s.clone() }),
                other if TranslatableString::from_reference(other).is_some() => {
                    Ok(Value::String(PLACEHOLDER.to_string()))
                }
                other => Err(invalid(attribute, format!("expected a string or null, got {other}"))),
            },
            _ => {
                self.check_kind(attribute, value)?;
                Ok(value.clone())
            }
        }
    }

    /// Converts a persisted value back into its in-memory form.
    ///
    /// Translatable columns must hold null, the placeholder or a serialized
    /// translatable reference.
    pub fn from_primitive(&self, attribute: &str, value: &Value) -> TaalResult<Value> {
        match self.kind {
            AttributeKind::TranslatableString => match value {
                Value::Null => Ok(Value::Null),
                Value::String(s) if s.is_empty() || s == PLACEHOLDER => Ok(value.clone()),
                other if TranslatableString::from_reference(other).is_some() => Ok(other.clone()),
                other => Err(TaalError::UnexpectedPlaceholderValue {
                    value: match other {
                        Value::String(s) => s.clone(),
                        _ => other.to_string(),
                    },
                }),
            },
            _ => {
                self.check_kind(attribute, value)?;
                Ok(value.clone())
            }
        }
    }

    fn check_kind(&self, attribute: &str, value: &Value) -> TaalResult<()> {
        let ok = match (self.kind, value) {
            (_, Value::Null) => true,
            (AttributeKind::String, Value::String(_)) => true,
            (AttributeKind::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (AttributeKind::Float, Value::Number(_)) => true,
            (AttributeKind::Boolean, Value::Bool(_)) => true,
            (AttributeKind::Uuid, Value::String(s)) => Uuid::parse_str(s).is_ok(),
            _ => false,
        };
        if ok {
            Ok(())
        } else {
            Err(invalid(attribute, format!("{value} is not a valid {:?}", self.kind)))
        }
    }
}

fn invalid(attribute: &str, reason: String) -> TaalError {
    TaalError::InvalidAttributeValue {
        attribute: attribute.to_string(),
        reason,
    }
}
