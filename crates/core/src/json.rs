// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON formatting helpers

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Re-serialize JSON text with the given indent width.
///
/// Object keys are emitted in sorted order. With `ascii` set, non-ASCII
/// characters are escaped with `\u` sequences; escaping the serialized
/// text is sound because such characters only occur inside JSON strings.
pub fn indent_json(text: &str, spaces: usize, ascii: bool) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;

    let indent = " ".repeat(spaces);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    let rendered = String::from_utf8_lossy(&buf).into_owned();
    if ascii {
        return Ok(escape_non_ascii(&rendered));
    }
    Ok(rendered)
}

fn escape_non_ascii(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        if character.is_ascii() {
            escaped.push(character);
        } else {
            let mut units = [0u16; 2];
            for unit in character.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    escaped
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
