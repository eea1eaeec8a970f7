// crates/travelreco-core/src/raw.rs

//! Lenient reading of catalog fields.
//!
//! The catalog comes from a source we do not control. Reading a field never
//! fails: falsy values (`null`, `false`, `0`, `""`) and values of the wrong
//! kind count as absent, so they never contribute to searchable text.

use serde_json::{Number, Value};

/// Truthy scalar as text. Non-empty strings, non-zero numbers and `true`
/// are kept; everything else is absent.
pub fn truthy_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => number_to_string(n),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

/// Truthy items of an array. Anything that is not an array yields nothing.
pub fn truthy_strings(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => items.iter().filter_map(truthy_string).collect(),
        _ => Vec::new(),
    }
}

/// Integral floats print without a fraction (`2.0` → `"2"`); zero is falsy.
fn number_to_string(n: &Number) -> Option<String> {
    if n.as_f64() == Some(0.0) {
        return None;
    }
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            Some((f as i64).to_string())
        }
        _ => Some(n.to_string()),
    }
}
