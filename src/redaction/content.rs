//! Content: the input a redaction pass runs over.
//!
//! Content arrives in one of two forms: raw JSON text, or an already-built
//! [`serde_json::Value`]. Redaction requires the top level to be a JSON
//! object either way; normalization turns both forms into an owned
//! [`Map<String, Value>`] and rejects everything else.

use std::fmt;

use serde_json::{Map, Value};

use super::error::InvalidContentError;

/// The input a [`crate::Redactor`] operates on.
///
/// Text content is parsed when redaction runs, not when it is set; a string
/// that fails to parse as a JSON object is rejected at that point with
/// [`InvalidContentError`]. Native values skip parsing but face the same
/// top-level-object requirement.
///
/// # Example
/// ```rust
/// use redactor::Content;
/// use serde_json::json;
///
/// let from_text = Content::from(r#"{"id": 1}"#);
/// let from_value = Content::from(json!({"id": 1}));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// Raw text expected to parse as a JSON object.
    Text(String),
    /// An already-built JSON value.
    Value(Value),
}

impl Content {
    /// Normalizes the content into an owned top-level object.
    ///
    /// The returned map is a deep copy: the stored content is never mutated,
    /// so repeated normalization of the same content yields equal results.
    /// Parse failures and non-object top levels both produce
    /// [`InvalidContentError`] carrying the content as it was configured,
    /// not a partially decoded form.
    pub(crate) fn to_object(&self) -> Result<Map<String, Value>, InvalidContentError> {
        let value = match self {
            Self::Text(text) => match serde_json::from_str::<Value>(text) {
                Ok(value) => value,
                Err(_) => return Err(InvalidContentError::new(self.clone())),
            },
            Self::Value(value) => value.clone(),
        };
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(InvalidContentError::new(self.clone())),
        }
    }
}

/// The default content is the empty object, which redacts to itself.
impl Default for Content {
    fn default() -> Self {
        Self::Value(Value::Object(Map::new()))
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Map<String, Value>> for Content {
    fn from(map: Map<String, Value>) -> Self {
        Self::Value(Value::Object(map))
    }
}

impl fmt::Display for Content {
    /// Text renders as-is; values render as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}
