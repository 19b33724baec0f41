//! WASM bindings for pathdoc.
//!
//! Exposes `set` and `get` as `#[wasm_bindgen]` functions over JSON strings,
//! callable from JavaScript/TypeScript.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p pathdoc-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/pathdoc_wasm.wasm
//! ```

use pathdoc::{Document, PathDocError};
use wasm_bindgen::prelude::*;

/// Set `value_json` at `path` inside `json` and return the compact result.
///
/// Both inputs must be valid JSON; throws a JS error otherwise. An empty
/// path or `$` replaces the whole document.
#[wasm_bindgen]
pub fn set(json: &str, path: &str, value_json: &str) -> std::result::Result<String, JsValue> {
    set_json(json, path, value_json).map_err(to_js_error)
}

/// Read the value at `path` inside `json` as compact JSON, or `undefined`
/// when nothing is there.
#[wasm_bindgen]
pub fn get(json: &str, path: &str) -> std::result::Result<Option<String>, JsValue> {
    get_json(json, path).map_err(to_js_error)
}

fn set_json(json: &str, path: &str, value_json: &str) -> pathdoc::Result<String> {
    let mut doc = Document::parse_str(json)?;
    let value: serde_json::Value =
        serde_json::from_str(value_json).map_err(PathDocError::Decode)?;
    match path {
        "" | "$" => doc.sets(value, Vec::<pathdoc::Section>::new()),
        _ => doc.set(path, value),
    };
    doc.to_json_string()
}

fn get_json(json: &str, path: &str) -> pathdoc::Result<Option<String>> {
    let doc = Document::parse_str(json)?;
    let value = match path {
        "" | "$" => Some(doc.value()),
        _ => doc.get(path),
    };
    value
        .map(|v| serde_json::to_string(v).map_err(PathDocError::Encode))
        .transpose()
}

fn to_js_error(err: PathDocError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_json_writes_path() {
        assert_eq!(
            set_json(r#"{"a":1}"#, "b[1].c", "true").unwrap(),
            r#"{"a":1,"b":[null,{"c":true}]}"#
        );
    }

    #[test]
    fn set_json_replaces_root() {
        assert_eq!(set_json(r#"{"a":1}"#, "$", "[2]").unwrap(), "[2]");
    }

    #[test]
    fn set_json_rejects_malformed_inputs() {
        assert!(set_json("{", "a", "1").is_err());
        assert!(set_json("{}", "a", "not json").is_err());
    }

    #[test]
    fn get_json_reads_path() {
        assert_eq!(
            get_json(r#"{"a":[1,{"b":"x"}]}"#, "a.1.b").unwrap(),
            Some(r#""x""#.to_string())
        );
        assert_eq!(get_json(r#"{"a":1}"#, "z").unwrap(), None);
    }
}
