//! The single failure mode: content that cannot be redacted.

use serde_json::Value;
use thiserror::Error;

use super::content::Content;

/// Returned when content is not a JSON object at its top level.
///
/// This covers both rejection paths: text that does not parse as JSON, and
/// content (parsed or native) whose top level is an array or a scalar. It
/// signals a caller contract violation and is never retried internally.
///
/// The error carries the offending content for diagnostics, but its
/// `Display` form deliberately names only the rejected shape: invalid
/// content routinely holds the very values a caller meant to redact, so the
/// payload is available through [`InvalidContentError::content`] and nowhere
/// else.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("invalid content: redaction requires a JSON object at the top level, found {}", shape_of(.content))]
pub struct InvalidContentError {
    content: Content,
}

impl InvalidContentError {
    pub(crate) fn new(content: Content) -> Self {
        Self { content }
    }

    /// The offending content, exactly as it was configured.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }
}

fn shape_of(content: &Content) -> &'static str {
    match content {
        Content::Text(_) => "text that did not parse as a JSON object",
        Content::Value(Value::Null) => "JSON null",
        Content::Value(Value::Bool(_)) => "a JSON boolean",
        Content::Value(Value::Number(_)) => "a JSON number",
        Content::Value(Value::String(_)) => "a JSON string",
        Content::Value(Value::Array(_)) => "a JSON array",
        Content::Value(Value::Object(_)) => "a JSON object",
    }
}
