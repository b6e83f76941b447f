//! Adapters for emitting redacted content through `slog`.
//!
//! This module connects [`Redactor`] with `slog` by providing a
//! `slog::Value` wrapper that serializes redacted output as structured JSON
//! via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from [`Redactor::redact`],
//!   never from the original content.
//! - Avoiding fallible logging APIs: invalid content is represented as a
//!   placeholder string rather than propagated as an error.
//!
//! It does not configure `slog` or decide which keys are sensitive.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::redaction::Redactor;

/// Marker trait for types whose `slog` integration always emits redacted output.
///
/// This trait requires `slog::Value` so the type can be logged with slog.
/// The marker indicates that the type's `slog::Value` implementation produces
/// redacted output rather than raw content.
///
/// ```compile_fail
/// use redactor::slog::SlogRedacted;
///
/// fn assert_slog_redacted<T: SlogRedacted>() {}
///
/// assert_slog_redacted::<String>();
/// ```
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

/// An already-redacted JSON value, ready to be logged.
///
/// Values of this type only ever come out of redaction (or are wrapped
/// explicitly); logging one cannot leak the original content.
#[derive(Clone, Debug, PartialEq)]
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    /// Wraps a JSON value the caller asserts is already redacted.
    #[must_use]
    pub fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The wrapped JSON value.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogRedacted for RedactedJson {}

/// Extension trait for ergonomic slog logging of redacted content as JSON.
///
/// ## Example
/// ```ignore
/// use redactor::slog::SlogRedactedExt;
///
/// info!(logger, "request"; "payload" => redactor.slog_redacted_json());
/// ```
pub trait SlogRedactedExt {
    /// Redacts the content and returns a `slog::Value` that serializes as
    /// structured JSON.
    ///
    /// Content that is not a valid top-level JSON object is represented as a
    /// JSON string holding the error message, which never echoes the
    /// content itself.
    fn slog_redacted_json(&self) -> RedactedJson;
}

impl SlogRedactedExt for Redactor {
    fn slog_redacted_json(&self) -> RedactedJson {
        let value = match self.redact() {
            Ok(object) => JsonValue::Object(object),
            Err(err) => JsonValue::String(err.to_string()),
        };
        RedactedJson::new(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wraps_the_redacted_object() {
        let wrapped = Redactor::new()
            .with_content(json!({"token": "t-1", "user": "ada"}))
            .with_keys(["token"])
            .slog_redacted_json();

        assert_eq!(
            wrapped.value(),
            &json!({"token": "[REDACTED]", "user": "ada"})
        );
    }

    #[test]
    fn invalid_content_becomes_a_placeholder_string() {
        let wrapped = Redactor::new()
            .with_content("hunter2")
            .slog_redacted_json();

        let message = wrapped.value().as_str().unwrap();
        assert!(message.starts_with("invalid content"));
        assert!(!message.contains("hunter2"));
    }
}
