//! Path-addressed writes with container auto-vivification.
//!
//! Walking top-down while holding `&mut Value` to the current slot means a
//! container replaced at depth `i` is already in place inside its parent at
//! depth `i - 1`; nothing has to be spliced back afterwards.

use crate::path::Section;
use serde_json::{Map, Value};

/// Write `value` at the location described by `sections`, creating or
/// reshaping intermediate containers as needed.
///
/// - An empty path replaces `root`.
/// - An index section requires an array: anything else is replaced by a new
///   array, and short arrays are padded with nulls up to `index + 1`.
/// - A key section requires an object: anything else is replaced by an empty
///   object.
/// - [`Section::Unsupported`] is skipped and the following section applies
///   at the same depth. When the path ends in an unsupported section, the
///   containers along the way are still shaped but nothing is written.
/// - `Index(usize::MAX)` cannot be addressed and is skipped like an
///   unsupported section. An array that cannot be grown to the requested
///   length (allocation failure) stops the write where it is.
///
/// # Examples
///
/// ```
/// use pathdoc::{sections, set_sections};
/// use serde_json::{json, Value};
///
/// let mut doc = Value::Null;
/// set_sections(&mut doc, &sections!["a", 2], json!("x"));
/// assert_eq!(doc, json!({"a": [null, null, "x"]}));
/// ```
pub fn set_sections(root: &mut Value, sections: &[Section], value: Value) {
    if sections.is_empty() {
        *root = value;
        return;
    }
    let Some(last) = sections.iter().rposition(is_writable) else {
        return;
    };
    let writes = last == sections.len() - 1;

    let mut slot = root;
    for (depth, sect) in sections.iter().enumerate().take(last + 1) {
        slot = match sect {
            Section::Index(k) => {
                let Some(len) = k.checked_add(1) else {
                    tracing::warn!(
                        depth,
                        index = *k,
                        "index too large to address, skipping section"
                    );
                    continue;
                };
                let Some(arr) = shape_array(slot, len, depth) else {
                    return;
                };
                if depth == last {
                    if writes {
                        arr[*k] = value;
                    }
                    return;
                }
                &mut arr[*k]
            }
            Section::Key(k) => {
                let obj = shape_object(slot, depth);
                if depth == last {
                    if writes {
                        obj.insert(k.clone(), value);
                    }
                    return;
                }
                obj.entry(k.clone()).or_insert(Value::Null)
            }
            Section::Unsupported => continue,
        };
    }
}

/// Sections the writer acts on: keys, and indexes whose slot count fits in
/// `usize`.
fn is_writable(sect: &Section) -> bool {
    match sect {
        Section::Index(k) => k.checked_add(1).is_some(),
        Section::Key(_) => true,
        Section::Unsupported => false,
    }
}

/// Make `slot` an array of at least `len` elements. Returns `None`, with
/// `slot` untouched, when the memory for `len` elements cannot be reserved.
fn shape_array(slot: &mut Value, len: usize, depth: usize) -> Option<&mut Vec<Value>> {
    if !slot.is_array() {
        let mut fresh = Vec::new();
        reserve(&mut fresh, len, depth)?;
        tracing::trace!(depth, replaced = kind(slot), "shaping slot into array");
        *slot = Value::Array(fresh);
    }
    match slot {
        Value::Array(arr) => {
            if arr.len() < len {
                let additional = len - arr.len();
                reserve(arr, additional, depth)?;
                arr.resize(len, Value::Null);
            }
            Some(arr)
        }
        _ => unreachable!("slot holds an array after shaping"),
    }
}

fn reserve(arr: &mut Vec<Value>, additional: usize, depth: usize) -> Option<()> {
    match arr.try_reserve_exact(additional) {
        Ok(()) => Some(()),
        Err(err) => {
            tracing::warn!(
                depth,
                additional,
                error = %err,
                "cannot grow array, dropping write"
            );
            None
        }
    }
}

/// Make `slot` an object, keeping it if it already is one.
fn shape_object(slot: &mut Value, depth: usize) -> &mut Map<String, Value> {
    if !slot.is_object() {
        tracing::trace!(depth, replaced = kind(slot), "shaping slot into object");
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(obj) => obj,
        _ => unreachable!("slot holds an object after shaping"),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
