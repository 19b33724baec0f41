//! Path sections and the dotted/bracketed path tokenizer.
//!
//! A path is an ordered list of [`Section`]s. Each section is either a key
//! (for objects) or an index (for arrays). Anything else is carried as
//! [`Section::Unsupported`] and ignored by the writer.
//!
//! # Path string syntax
//!
//! - `"a.b.c"` -- nested keys
//! - `"items.2.name"` -- a token made only of ASCII digits is an index
//! - `"items[2].name"`, `"grid[0][1]"` -- bracketed indexes after a key
//! - `""` -- a single empty key

use serde_json::Value;
use std::fmt;

/// One step of a traversal path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Array index access: `[index]`
    Index(usize),
    /// Object key access: `{"key": value}`
    Key(String),
    /// A section of any other kind. Writes pass through it at the same depth.
    Unsupported,
}

impl Section {
    /// Create a key section.
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        Section::Key(k.into())
    }

    /// Create an index section.
    #[inline]
    pub fn index(i: usize) -> Self {
        Section::Index(i)
    }

    /// Returns true unless this is [`Section::Unsupported`].
    #[inline]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Section::Unsupported)
    }

    /// Get the key if this is a key section.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Section::Key(k) => Some(k),
            _ => None,
        }
    }

    /// Get the index if this is an index section.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Section::Index(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Key(k) if needs_quoting(k) => write!(f, "[{}]", Value::String(k.clone())),
            Section::Key(k) => write!(f, ".{}", k),
            Section::Index(i) => write!(f, "[{}]", i),
            Section::Unsupported => write!(f, "[?]"),
        }
    }
}

/// Keys that would read as several sections (or as none) render quoted.
fn needs_quoting(key: &str) -> bool {
    key.is_empty() || key.contains(['.', '[', ']', '"'])
}

impl From<usize> for Section {
    fn from(i: usize) -> Self {
        Section::Index(i)
    }
}

impl From<&str> for Section {
    fn from(s: &str) -> Self {
        Section::Key(s.to_owned())
    }
}

impl From<String> for Section {
    fn from(s: String) -> Self {
        Section::Key(s)
    }
}

impl From<&String> for Section {
    fn from(s: &String) -> Self {
        Section::Key(s.clone())
    }
}

impl From<f64> for Section {
    fn from(_: f64) -> Self {
        Section::Unsupported
    }
}

impl From<bool> for Section {
    fn from(_: bool) -> Self {
        Section::Unsupported
    }
}

impl From<()> for Section {
    fn from(_: ()) -> Self {
        Section::Unsupported
    }
}

/// Non-negative integers become indexes and strings become keys. Negative or
/// fractional numbers, booleans, null, arrays and objects are unsupported.
impl From<Value> for Section {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Section::Key(s),
            Value::Number(n) => match n.as_u64().and_then(|i| usize::try_from(i).ok()) {
                Some(i) => Section::Index(i),
                None => Section::Unsupported,
            },
            _ => Section::Unsupported,
        }
    }
}

/// Build a `Vec<Section>` from mixed literals.
///
/// # Examples
///
/// ```
/// use pathdoc::{sections, Section};
///
/// let s = sections!["items", 0, "name"];
/// assert_eq!(s, vec![Section::key("items"), Section::index(0), Section::key("name")]);
/// ```
#[macro_export]
macro_rules! sections {
    () => {
        ::std::vec::Vec::<$crate::Section>::new()
    };
    ($($sect:expr),+ $(,)?) => {
        vec![$($crate::Section::from($sect)),+]
    };
}

/// Render sections as `$.a[2].b`, for diagnostics.
pub fn format_path(sections: &[Section]) -> String {
    let mut out = String::from("$");
    for sect in sections {
        out.push_str(&sect.to_string());
    }
    out
}

/// Tokenize a path string into sections.
///
/// Never fails: any token that is not an index is a key.
///
/// # Examples
///
/// ```
/// use pathdoc::{parse_path, Section};
///
/// assert_eq!(
///     parse_path("a.b.2.c"),
///     vec![Section::key("a"), Section::key("b"), Section::index(2), Section::key("c")],
/// );
/// assert_eq!(
///     parse_path("grid[0][1]"),
///     vec![Section::key("grid"), Section::index(0), Section::index(1)],
/// );
/// ```
pub fn parse_path(path: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    for token in path.split('.') {
        push_token(&mut sections, token);
    }
    sections
}

fn push_token(sections: &mut Vec<Section>, token: &str) {
    let (head, indexes) = split_brackets(token);
    if !(head.is_empty() && !indexes.is_empty()) {
        sections.push(match parse_index(head) {
            Some(i) => Section::Index(i),
            None => Section::Key(head.to_owned()),
        });
    }
    sections.extend(indexes.into_iter().map(Section::Index));
}

/// Peel trailing `[n]` groups off a token. Groups whose content is not an
/// index stop the peeling and stay part of the head.
fn split_brackets(token: &str) -> (&str, Vec<usize>) {
    let mut head = token;
    let mut indexes = Vec::new();
    while let Some(inner) = head.strip_suffix(']') {
        let Some(open) = inner.rfind('[') else { break };
        let Some(i) = parse_index(&inner[open + 1..]) else {
            break;
        };
        indexes.push(i);
        head = &inner[..open];
    }
    indexes.reverse();
    (head, indexes)
}

fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
