//! Serialization of JSON documents into TypeScript object-literal source
//! text.
//!
//! This is not a general-purpose serializer: it targets the one fixed shape
//! the frontend build consumes. Strings are emitted without escaping, so the
//! input document must not contain `"` inside string values. Booleans and
//! nulls come out as quoted strings, matching what the consuming code has
//! always been given.

use serde_json::Value;

const INDENT: &str = "  ";

/// Serializes a JSON value into TypeScript object-literal source text.
///
/// Object keys are emitted in the document's insertion order, never sorted.
/// A key is left unquoted when it is a valid bare identifier or consists
/// entirely of decimal digits; anything else (dotted token symbols like
/// `USDC.ARBI`) is double-quoted. An entry whose key is exactly `type` with
/// a string value is suffixed with ` as const` so the frontend's type system
/// sees a literal type rather than `string`.
pub fn to_object_literal(value: &Value) -> String {
    serialize_value(value, 0)
}

fn serialize_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Object(entries) => {
            let mut lines = vec!["{".to_string()];
            for (key, entry) in entries {
                let annotation = if key == "type" && entry.is_string() {
                    " as const"
                } else {
                    ""
                };
                lines.push(format!(
                    "{}{}: {}{},",
                    INDENT.repeat(depth + 1),
                    quote_key(key),
                    serialize_value(entry, depth + 1),
                    annotation,
                ));
            }
            lines.push(format!("{}}}", INDENT.repeat(depth)));
            lines.join("\n")
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Number(n) => n.to_string(),
        other => format!("\"{}\"", other),
    }
}

fn quote_key(key: &str) -> String {
    if is_bare_key(key) {
        key.to_string()
    } else {
        format!("\"{}\"", key)
    }
}

/// A key can stay unquoted if it is a valid JavaScript identifier or is all
/// decimal digits (chain ids are numeric object keys).
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        None => false,
        Some(c) if c.is_ascii_digit() => key.chars().all(|c| c.is_ascii_digit()),
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        Some(_) => false,
    }
}
