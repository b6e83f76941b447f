//! Adapters for emitting redacted content through `tracing`.
//!
//! Redacted output is logged as a display string: it works with any tracing
//! subscriber, at the cost of structure. Invalid content never fails the
//! logging call; it is represented as a placeholder string instead.
//!
//! # Example
//!
//! ```ignore
//! use redactor::tracing::TracingRedactedExt;
//!
//! tracing::info!(payload = %redactor.tracing_redacted());
//! ```

use tracing::field::{DisplayValue, display};

use crate::redaction::Redactor;

/// Extension trait for logging redacted content as a display string.
pub trait TracingRedactedExt {
    /// Redacts the content and wraps the JSON text for `tracing` logging.
    ///
    /// Content that is not a valid top-level JSON object yields the error
    /// message instead, which never echoes the content itself.
    fn tracing_redacted(&self) -> DisplayValue<String>;
}

impl TracingRedactedExt for Redactor {
    fn tracing_redacted(&self) -> DisplayValue<String> {
        display(self.redact_to_json().unwrap_or_else(|err| err.to_string()))
    }
}
