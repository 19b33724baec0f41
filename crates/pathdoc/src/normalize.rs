//! Coercion of caller-supplied values into the generic `serde_json::Value`
//! shape.
//!
//! Every value entering a document (a leaf being set, or an adopted root)
//! goes through here, so that maps, vectors and structs supplied by the
//! caller become plain `Value::Object`/`Value::Array` trees that the path
//! writer can walk.

use crate::error::{PathDocError, Result};
use serde::Serialize;
use serde_json::Value;

/// Convert `value` into a generic JSON value, failing if it has no JSON
/// representation (for example a map with non-string keys).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use pathdoc::try_to_json_value;
///
/// let mut m = BTreeMap::new();
/// m.insert("a", vec![1, 2]);
/// assert_eq!(try_to_json_value(&m).unwrap(), serde_json::json!({"a": [1, 2]}));
/// ```
pub fn try_to_json_value<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(PathDocError::Normalize)
}

/// Lenient form of [`try_to_json_value`]: unrepresentable values become
/// `Value::Null`.
pub fn to_json_value<T: Serialize>(value: T) -> Value {
    match serde_json::to_value(value) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(error = %err, "value has no JSON representation, storing null");
            Value::Null
        }
    }
}
