//! Helpers for nested JSON values

use serde_json::Value;

/// Flatten a nested JSON object to `(key, value)` pairs.
///
/// A nested object like
///
/// ```json
/// {"foo": {"bar": 3, "baz": 4}, "bza": "something"}
/// ```
///
/// flattens to `("foo.bar", 3)`, `("foo.baz", 4)`, `("bza", "something")`.
/// `join_char` joins key tokens and `prefix` is prepended to all keys.
pub fn flatten_json(data: &Value, join_char: &str, prefix: &str) -> Vec<(String, Value)> {
    let mut flattened = Vec::new();
    match data {
        Value::Object(map) => {
            for (key, value) in map {
                let prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}{join_char}{key}")
                };
                flattened.extend(flatten_json(value, join_char, &prefix));
            }
        }
        value => flattened.push((prefix.to_string(), value.clone())),
    }
    flattened
}

#[cfg(test)]
#[path = "iterate_tests.rs"]
mod tests;
