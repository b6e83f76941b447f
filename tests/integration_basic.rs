//! End-to-end tests for the public redaction API.
//!
//! These tests exercise the integration of:
//! - fluent configuration and the `redactor` helper,
//! - content normalization from native values and JSON text, and
//! - redaction output in native and serialized form.

use redactor::{DEFAULT_INK, Redactor, redactor};
use serde_json::{Map, Value, json};

fn sample_content() -> Value {
    json!({
        "email": "ada@example.com",
        "password": "secret123",
        "changes": {
            "account": {
                "old_password": "secret321",
                "new_password": "secret789"
            }
        }
    })
}

#[test]
fn test_helper_constructs_a_configured_redactor() {
    let redacted = redactor(sample_content(), ["password"], DEFAULT_INK)
        .redact()
        .unwrap();

    let mut expected = sample_content();
    expected["password"] = json!("[REDACTED]");
    assert_eq!(Value::Object(redacted), expected);
}

#[test]
fn test_accepts_native_content() {
    let redacted = Redactor::new()
        .with_content(sample_content())
        .with_keys(["password"])
        .redact()
        .unwrap();

    assert_eq!(redacted["password"], json!("[REDACTED]"));
    assert_eq!(redacted["email"], json!("ada@example.com"));
}

#[test]
fn test_accepts_json_text_content() {
    let text = sample_content().to_string();
    let redacted = Redactor::new()
        .with_content(text)
        .with_keys(["password"])
        .redact()
        .unwrap();

    let mut expected = sample_content();
    expected["password"] = json!("[REDACTED]");
    assert_eq!(Value::Object(redacted), expected);
}

#[test]
fn test_redacts_simple_top_level_key() {
    let redacted = redactor(
        json!({"email": "a@b.com", "password": "x"}),
        ["password"],
        DEFAULT_INK,
    )
    .redact()
    .unwrap();

    assert_eq!(
        Value::Object(redacted),
        json!({"email": "a@b.com", "password": "[REDACTED]"})
    );
}

#[test]
fn test_redacts_nested_keys() {
    let redacted = Redactor::new()
        .with_content(sample_content())
        .with_keys(["old_password", "new_password"])
        .redact()
        .unwrap();

    let mut expected = sample_content();
    expected["changes"]["account"]["old_password"] = json!("[REDACTED]");
    expected["changes"]["account"]["new_password"] = json!("[REDACTED]");
    assert_eq!(Value::Object(redacted), expected);
}

#[test]
fn test_null_ink_yields_json_null() {
    let redactor = Redactor::new()
        .with_content(sample_content())
        .with_keys(["password"])
        .with_ink(Value::Null);

    let redacted = redactor.redact().unwrap();
    assert_eq!(redacted["password"], Value::Null);

    // JSON null, not the string "null"
    let json = redactor.redact_to_json().unwrap();
    assert!(json.contains(r#""password":null"#));
    assert!(!json.contains(r#""password":"null""#));
}

#[test]
fn test_fluent_configuration_replaces_each_field() {
    let redacted = Redactor::new()
        .with_content(sample_content())
        .with_keys(["password"])
        .with_ink(Value::Null)
        .redact()
        .unwrap();

    let mut expected = sample_content();
    expected["password"] = Value::Null;
    assert_eq!(Value::Object(redacted), expected);
}

#[test]
fn test_converts_to_redacted_json_text() {
    let redactor = redactor(sample_content(), ["password"], DEFAULT_INK);

    let converted = String::try_from(&redactor).unwrap();
    assert_eq!(converted, redactor.redact_to_json().unwrap());
    assert!(converted.contains(r#""password":"[REDACTED]""#));
}

#[test]
fn test_converts_to_redacted_map() {
    let redactor = redactor(sample_content(), ["password"], DEFAULT_INK);

    let converted: Map<String, Value> = (&redactor).try_into().unwrap();
    assert_eq!(converted, redactor.redact().unwrap());
}

#[test]
fn test_redacts_a_serialized_typed_payload() {
    #[derive(serde::Serialize)]
    struct LoginAttempt {
        username: String,
        password: String,
        attempts: u32,
    }

    let attempt = LoginAttempt {
        username: "ada".into(),
        password: "hunter2".into(),
        attempts: 3,
    };

    let redacted = Redactor::new()
        .with_content(serde_json::to_value(&attempt).unwrap())
        .with_keys(["password"])
        .redact()
        .unwrap();

    assert_eq!(redacted["username"], json!("ada"));
    assert_eq!(redacted["password"], json!("[REDACTED]"));
    assert_eq!(redacted["attempts"], json!(3));
}

#[test]
fn test_default_ink_is_the_redacted_placeholder() {
    let redacted = Redactor::new()
        .with_content(json!({"password": "x"}))
        .with_keys(["password"])
        .redact()
        .unwrap();

    assert_eq!(redacted["password"], json!(DEFAULT_INK));
    assert_eq!(DEFAULT_INK, "[REDACTED]");
}
