//! Ink: the replacement written over matched values.

use std::{fmt, sync::Arc};

use serde_json::Value;

/// Default replacement used when no ink is configured.
pub const DEFAULT_INK: &str = "[REDACTED]";

/// Producer signature for per-match inks.
pub type InkFn = dyn Fn(&Value) -> Value + Send + Sync;

/// What a matched key's value is replaced with.
///
/// An ink is either a constant JSON value (any type, including null) or a
/// producer invoked once per match with the matched original value. A third
/// configuration mode, resolving a zero-argument producer at set time, is
/// provided by [`Ink::resolve`]; it stores a constant like [`Ink::value`]
/// does.
///
/// # Example
/// ```rust
/// use redactor::Ink;
/// use serde_json::{Value, json};
///
/// let constant = Ink::value("***");
/// assert_eq!(constant.apply(&json!("secret")), json!("***"));
///
/// let sized = Ink::with(|original| match original.as_str() {
///     Some(s) => json!(format!("<{} chars>", s.len())),
///     None => Value::Null,
/// });
/// assert_eq!(sized.apply(&json!("secret")), json!("<6 chars>"));
/// ```
#[derive(Clone)]
pub enum Ink {
    /// A constant replacement value.
    Value(Value),
    /// A producer invoked per match with the matched original value.
    With(Arc<InkFn>),
}

impl Ink {
    /// Constant ink from any JSON-compatible value.
    #[must_use]
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Resolves a zero-argument producer immediately and stores its result.
    ///
    /// The producer runs exactly once, at configuration time; every match
    /// afterwards receives the same stored value. Use [`Ink::with`] when the
    /// replacement must depend on the matched value.
    #[must_use]
    pub fn resolve<F, V>(producer: F) -> Self
    where
        F: FnOnce() -> V,
        V: Into<Value>,
    {
        Self::Value(producer().into())
    }

    /// Per-match ink: the producer receives each matched original value.
    #[must_use]
    pub fn with<F, V>(producer: F) -> Self
    where
        F: Fn(&Value) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self::With(Arc::new(move |original: &Value| producer(original).into()))
    }

    /// Resolves the replacement for one matched value.
    ///
    /// Constant inks ignore `original`; producer inks receive it. A producer
    /// that panics propagates the panic unchanged.
    #[must_use]
    pub fn apply(&self, original: &Value) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::With(producer) => producer(original),
        }
    }
}

/// The default ink is the string [`DEFAULT_INK`].
impl Default for Ink {
    fn default() -> Self {
        Self::Value(Value::String(DEFAULT_INK.to_owned()))
    }
}

impl From<Value> for Ink {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Ink {
    fn from(text: &str) -> Self {
        Self::Value(Value::String(text.to_owned()))
    }
}

impl From<String> for Ink {
    fn from(text: String) -> Self {
        Self::Value(Value::String(text))
    }
}

impl fmt::Debug for Ink {
    /// Producer bodies have no useful `Debug` form and are elided.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::With(_) => f.debug_tuple("With").field(&"<producer>").finish(),
        }
    }
}
