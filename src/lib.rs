//! Key-driven redaction for nested JSON data.
//!
//! This crate separates:
//! - **Content**: the nested data to sanitize, as JSON text or an in-memory
//!   [`serde_json::Value`].
//! - **Ink**: what matched values are overwritten with.
//!
//! [`Redactor`] walks the content depth-first and overwrites the value of
//! every key whose name is in the configured key set, at any depth,
//! including objects nested inside arrays.
//!
//! What this crate does:
//! - normalizes content (JSON text or native values) into a top-level object
//! - replaces matched values with a constant or producer-supplied ink
//! - serializes redacted output back to JSON text
//! - provides integrations behind feature flags (e.g. `slog`, `tracing`)
//!
//! What it does not do:
//! - match keys by path or pattern (bare key names only)
//! - inspect or rewrite values whose keys do not match
//! - perform I/O or logging

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else,
    clippy::from_over_into
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from the redaction module
pub use redaction::{Content, DEFAULT_INK, Ink, InkFn, InvalidContentError, Redactor};
#[cfg(feature = "slog")]
pub use slog::{RedactedJson, SlogRedactedExt};
#[cfg(feature = "tracing")]
pub use tracing::TracingRedactedExt;

/// Creates a configured [`Redactor`] in one call.
///
/// This is thin sugar over the builder; it carries no contract of its own.
/// Use [`Redactor::new`] when some of the three fields should keep their
/// defaults.
///
/// # Example
/// ```rust
/// use redactor::redactor;
/// use serde_json::json;
///
/// let redacted = redactor(
///     json!({"user": "ada", "token": "t-123"}),
///     ["token"],
///     "[SCRUBBED]",
/// )
/// .redact()?;
///
/// assert_eq!(redacted["user"], json!("ada"));
/// assert_eq!(redacted["token"], json!("[SCRUBBED]"));
/// # Ok::<(), redactor::InvalidContentError>(())
/// ```
pub fn redactor<I, K>(content: impl Into<Content>, keys: I, ink: impl Into<Ink>) -> Redactor
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    Redactor::new()
        .with_content(content)
        .with_keys(keys)
        .with_ink(ink)
}
