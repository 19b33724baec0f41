//! The path-addressable mutable JSON document.

use crate::error::{PathDocError, Result};
use crate::normalize::{to_json_value, try_to_json_value};
use crate::path::{parse_path, Section};
use crate::write::set_sections;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// A JSON document that can be read and written by path.
///
/// Writes never fail: missing containers are created, containers of the wrong
/// shape are replaced, and short arrays are padded with nulls.
///
/// ```
/// use pathdoc::{sections, Document};
/// use serde_json::json;
///
/// let mut doc = Document::from_text(r#"{"name":"Alice"}"#);
/// doc.set("tags.1", "admin").sets(30, sections!["age"]);
/// assert_eq!(doc, json!({"name": "Alice", "tags": [null, "admin"], "age": 30}));
/// ```
///
/// A `Document` has no interior synchronization; share it across threads
/// behind a lock if it has to be mutated concurrently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    val: Value,
}

impl Document {
    /// An empty document whose root is `null`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode JSON text. Malformed input yields a `null` root.
    pub fn from_text(json: &str) -> Self {
        Self::from_bytes(json.as_bytes())
    }

    /// Decode JSON bytes. Malformed input yields a `null` root.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse_slice(bytes).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "discarding malformed JSON input");
            Self::new()
        })
    }

    /// Decode the first JSON value read from `reader`. Anything after that
    /// value is left unread. Malformed input yields a `null` root.
    pub fn from_reader<R: Read>(reader: R) -> Self {
        Self::parse_reader(reader).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "discarding malformed JSON stream");
            Self::new()
        })
    }

    /// Adopt an already-typed value as the root. Nested maps, sequences and
    /// structs are converted into generic JSON containers; a value with no
    /// JSON representation yields a `null` root.
    pub fn from_value<T: Serialize>(value: T) -> Self {
        Self {
            val: to_json_value(value),
        }
    }

    /// Strict form of [`Document::from_text`].
    pub fn parse_str(json: &str) -> Result<Self> {
        Ok(Self {
            val: serde_json::from_str(json)?,
        })
    }

    /// Strict form of [`Document::from_bytes`].
    pub fn parse_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            val: serde_json::from_slice(bytes)?,
        })
    }

    /// Strict form of [`Document::from_reader`]. An empty stream is an error.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Self> {
        let mut stream = serde_json::Deserializer::from_reader(reader).into_iter::<Value>();
        match stream.next() {
            Some(val) => Ok(Self { val: val? }),
            None => Err(PathDocError::Decode(serde::de::Error::custom(
                "EOF while parsing a value",
            ))),
        }
    }

    /// Strict form of [`Document::from_value`].
    pub fn try_from_value<T: Serialize>(value: T) -> Result<Self> {
        Ok(Self {
            val: try_to_json_value(value)?,
        })
    }

    /// Set `value` at a dotted/bracketed path (see [`parse_path`]).
    pub fn set<T: Serialize>(&mut self, path: &str, value: T) -> &mut Self {
        self.sets(value, parse_path(path))
    }

    /// Set `value` at the location described by `sections`. With no sections
    /// the whole root is replaced.
    pub fn sets<T, I>(&mut self, value: T, sections: I) -> &mut Self
    where
        T: Serialize,
        I: IntoIterator,
        I::Item: Into<Section>,
    {
        let sections: Vec<Section> = sections.into_iter().map(Into::into).collect();
        set_sections(&mut self.val, &sections, to_json_value(value));
        self
    }

    /// Like [`Document::set`], but a value that cannot be converted to JSON
    /// is an error and leaves the document untouched.
    pub fn try_set<T: Serialize>(&mut self, path: &str, value: T) -> Result<&mut Self> {
        self.try_sets(value, parse_path(path))
    }

    /// Like [`Document::sets`], but a value that cannot be converted to JSON
    /// is an error and leaves the document untouched.
    pub fn try_sets<T, I>(&mut self, value: T, sections: I) -> Result<&mut Self>
    where
        T: Serialize,
        I: IntoIterator,
        I::Item: Into<Section>,
    {
        let value = try_to_json_value(value)?;
        let sections: Vec<Section> = sections.into_iter().map(Into::into).collect();
        set_sections(&mut self.val, &sections, value);
        Ok(self)
    }

    /// Read the value at a dotted/bracketed path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.gets(&parse_path(path))
    }

    /// Read the value at `sections`. Unsupported sections are skipped, the
    /// same way the writer skips them.
    pub fn gets(&self, sections: &[Section]) -> Option<&Value> {
        let mut current = &self.val;
        for sect in sections {
            current = match sect {
                Section::Index(i) => current.as_array()?.get(*i)?,
                Section::Key(k) => current.as_object()?.get(k)?,
                Section::Unsupported => continue,
            };
        }
        Some(current)
    }

    /// Whether a value (possibly `null`) exists at `path`.
    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// The root value.
    pub fn value(&self) -> &Value {
        &self.val
    }

    /// Mutable access to the root value.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.val
    }

    /// Consume the document, returning its root value.
    pub fn into_value(self) -> Value {
        self.val
    }

    /// Encode the document as compact JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(&self.val).map_err(PathDocError::Encode)
    }

    /// Encode the document as indented JSON.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.val).map_err(PathDocError::Encode)
    }
}

impl FromStr for Document {
    type Err = PathDocError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl From<Value> for Document {
    fn from(val: Value) -> Self {
        Self { val }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.val
    }
}

impl PartialEq<Value> for Document {
    fn eq(&self, other: &Value) -> bool {
        self.val == *other
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lenient_constructors_absorb_errors() {
        assert_eq!(Document::from_text("{not json"), Value::Null);
        assert_eq!(Document::from_bytes(b"[1,"), Value::Null);
        assert_eq!(Document::from_reader(&b""[..]), Value::Null);
    }

    #[test]
    fn strict_constructors_report_errors() {
        assert!(matches!(
            Document::parse_str("{not json"),
            Err(PathDocError::Decode(_))
        ));
        assert!(Document::parse_reader(&b"   "[..]).is_err());
        assert!("[1,".parse::<Document>().is_err());
    }

    #[test]
    fn reader_takes_first_value_only() {
        let doc = Document::from_reader(&b"{\"a\":1} {\"b\":2}"[..]);
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn gets_skips_unsupported_sections() {
        let doc = Document::from(json!({"a": [10, 20]}));
        assert_eq!(
            doc.gets(&[Section::key("a"), Section::Unsupported, Section::index(1)]),
            Some(&json!(20))
        );
        assert_eq!(doc.gets(&[]), Some(&json!({"a": [10, 20]})));
        assert_eq!(doc.gets(&[Section::index(0)]), None);
    }

    #[test]
    fn try_set_leaves_document_untouched_on_failure() {
        let mut doc = Document::from(json!({"a": 1}));
        let mut bad = std::collections::BTreeMap::new();
        bad.insert(vec![1], 2);
        assert!(doc.try_set("a", &bad).is_err());
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn serde_is_transparent() {
        let doc = Document::from(json!({"x": [1, 2]}));
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"x":[1,2]}"#);
        let back: Document = serde_json::from_str(r#"{"x":[1,2]}"#).unwrap();
        assert_eq!(back, doc);
        assert_eq!(doc.to_string(), r#"{"x":[1,2]}"#);
    }
}
