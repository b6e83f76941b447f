//! Depth-first traversal that writes ink over matched keys.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::ink::Ink;

/// Folds a map, replacing the value of every matched key with ink.
///
/// Matching is exact and case-sensitive on the bare key name, at any depth.
/// A matched value is replaced wholesale, including any nested structure it
/// held, and the replacement itself is never scanned. Unmatched values are
/// descended into; scalars pass through untouched.
pub(crate) fn walk_object(
    object: Map<String, Value>,
    keys: &BTreeSet<String>,
    ink: &Ink,
) -> Map<String, Value> {
    object
        .into_iter()
        .map(|(key, value)| {
            let value = if keys.contains(&key) {
                ink.apply(&value)
            } else {
                walk_value(value, keys, ink)
            };
            (key, value)
        })
        .collect()
}

fn walk_value(value: Value, keys: &BTreeSet<String>, ink: &Ink) -> Value {
    match value {
        Value::Object(object) => Value::Object(walk_object(object, keys, ink)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| walk_value(item, keys, ink))
                .collect(),
        ),
        scalar => scalar,
    }
}
