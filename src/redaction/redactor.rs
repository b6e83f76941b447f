//! The redactor: content, keys and ink, tied together.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::{content::Content, error::InvalidContentError, ink::Ink, walk::walk_object};

/// Redacts the values of configured keys inside nested JSON content.
///
/// A redactor is built fluently from three parts: the [`Content`] to
/// sanitize, the set of key names to match, and the [`Ink`] written over
/// matched values. All three default to something inert: an empty object,
/// no keys, and the [`DEFAULT_INK`](crate::DEFAULT_INK) placeholder string.
///
/// Redaction never mutates the redactor or the stored content; [`redact`]
/// can be called any number of times with identical results (per-match
/// producer inks excepted, if they close over external state).
///
/// # Example
/// ```rust
/// use redactor::Redactor;
/// use serde_json::json;
///
/// let redacted = Redactor::new()
///     .with_content(json!({
///         "email": "ada@example.com",
///         "password": "hunter2",
///         "card": {"number": "4111 1111 1111 1111", "exp": "10/28"}
///     }))
///     .with_keys(["password", "number"])
///     .redact()?;
///
/// assert_eq!(redacted["email"], json!("ada@example.com"));
/// assert_eq!(redacted["password"], json!("[REDACTED]"));
/// assert_eq!(redacted["card"]["number"], json!("[REDACTED]"));
/// assert_eq!(redacted["card"]["exp"], json!("10/28"));
/// # Ok::<(), redactor::InvalidContentError>(())
/// ```
///
/// [`redact`]: Redactor::redact
#[derive(Clone, Debug, Default)]
pub struct Redactor {
    content: Content,
    keys: BTreeSet<String>,
    ink: Ink,
}

impl Redactor {
    /// An inert redactor: empty object content, no keys, default ink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Fluent configuration
    // ========================================================================

    /// Sets the content to redact, replacing any previous content.
    ///
    /// Accepts JSON text (`&str`, `String`) or native values
    /// ([`serde_json::Value`], [`serde_json::Map`]). Text is not parsed
    /// here; validation happens on [`redact`](Redactor::redact).
    #[must_use]
    pub fn with_content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the key names to match, replacing any previous set.
    ///
    /// Matching is exact and case-sensitive on bare key names, at any
    /// depth. Duplicates collapse.
    #[must_use]
    pub fn with_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the ink written over matched values, replacing any previous ink.
    ///
    /// Accepts constant values directly; use [`Ink::resolve`] or
    /// [`Ink::with`] for producer-backed inks.
    #[must_use]
    pub fn with_ink(mut self, ink: impl Into<Ink>) -> Self {
        self.ink = ink.into();
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The configured content, exactly as set.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The configured key names.
    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    /// The configured ink.
    pub fn ink(&self) -> &Ink {
        &self.ink
    }

    // ========================================================================
    // Redaction
    // ========================================================================

    /// Redacts the content and returns the sanitized object.
    ///
    /// The content is first normalized into a top-level JSON object (text
    /// content is parsed here). The result is a fresh map; the redactor and
    /// its stored content are left untouched.
    ///
    /// # Errors
    ///
    /// [`InvalidContentError`] when the content is not, or does not parse
    /// as, a JSON object at the top level. The offending content rides
    /// along on the error.
    pub fn redact(&self) -> Result<Map<String, Value>, InvalidContentError> {
        let object = self.content.to_object()?;
        Ok(walk_object(object, &self.keys, &self.ink))
    }

    /// Redacts the content and serializes the result to compact JSON text.
    ///
    /// # Errors
    ///
    /// Same as [`redact`](Redactor::redact).
    pub fn redact_to_json(&self) -> Result<String, InvalidContentError> {
        self.redact().map(|object| Value::Object(object).to_string())
    }
}

/// Sugar for [`Redactor::redact`].
impl TryFrom<&Redactor> for Map<String, Value> {
    type Error = InvalidContentError;

    fn try_from(redactor: &Redactor) -> Result<Self, Self::Error> {
        redactor.redact()
    }
}

/// Sugar for [`Redactor::redact`].
impl TryFrom<Redactor> for Map<String, Value> {
    type Error = InvalidContentError;

    fn try_from(redactor: Redactor) -> Result<Self, Self::Error> {
        redactor.redact()
    }
}

/// Sugar for [`Redactor::redact_to_json`].
impl TryFrom<&Redactor> for String {
    type Error = InvalidContentError;

    fn try_from(redactor: &Redactor) -> Result<Self, Self::Error> {
        redactor.redact_to_json()
    }
}

/// Sugar for [`Redactor::redact_to_json`].
impl TryFrom<Redactor> for String {
    type Error = InvalidContentError;

    fn try_from(redactor: Redactor) -> Result<Self, Self::Error> {
        redactor.redact_to_json()
    }
}
