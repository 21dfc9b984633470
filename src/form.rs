//! Form encoding in the API's bracket notation
//!
//! `{"metadata": {"a": "1"}, "expand": ["x"]}` becomes
//! `metadata[a]=1` and `expand[0]=x`.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, StripeError};

/// Flatten `params` into form key/value pairs
///
/// The pairs can be passed straight to `reqwest::RequestBuilder::form`.
/// Nulls are dropped. Empty arrays and objects are sent as an empty
/// value, which the API reads as "unset".
pub fn to_form_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)?;
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(StripeError::InvalidParams(format!(
                "expected an object at the top level, got {}",
                kind(&other)
            )))
        }
    };

    let mut pairs = Vec::new();
    for (key, value) in object {
        flatten(key, value, &mut pairs);
    }
    Ok(pairs)
}

fn flatten(key: String, value: Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) if items.is_empty() => pairs.push((key, String::new())),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                flatten(format!("{}[{}]", key, index), item, pairs);
            }
        }
        Value::Object(map) if map.is_empty() => pairs.push((key, String::new())),
        Value::Object(map) => {
            for (sub, item) in map {
                flatten(format!("{}[{}]", key, sub), item, pairs);
            }
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
