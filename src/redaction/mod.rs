//! Redaction engine: content normalization, key matching, ink application.
//!
//! This module provides the machinery behind the crate's public surface:
//!
//! - **`content`**: Input normalization ([`Content`])
//! - **`error`**: The single failure mode ([`InvalidContentError`])
//! - **`ink`**: Replacement values ([`Ink`], [`DEFAULT_INK`])
//! - **`redactor`**: Configuration and entrypoints ([`Redactor`])
//! - **`walk`**: The bottom-up traversal over `serde_json::Value`
//!
//! Logging adapters live in `crate::slog` and `crate::tracing` behind
//! feature flags.

mod content;
mod error;
mod ink;
mod redactor;
mod walk;

// Re-export the public surface
pub use content::Content;
pub use error::InvalidContentError;
pub use ink::{DEFAULT_INK, Ink, InkFn};
pub use redactor::Redactor;
