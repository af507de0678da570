//! Small formatting helpers shared by the component and theme generators.
//!
//! Names, types and token values are echoed as given; nothing here escapes
//! or validates its input.

use crate::error::Result;
use serde::Serialize;

/// Render a value as a compact JSON literal (`"primary"`, `3`, `{"a":1}`).
///
/// Used for prop defaults, which are valid JavaScript as JSON.
pub fn json_literal(value: &serde_json::Value) -> String {
    value.to_string()
}

/// Serialize a value as two-space indented JSON, keeping map order.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// A custom-property declaration line inside a rule block.
pub fn css_var(prefix: &str, name: &str, value: impl std::fmt::Display) -> String {
    format!("  --{}-{}: {};", prefix, name, value)
}
