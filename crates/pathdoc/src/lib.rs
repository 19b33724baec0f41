//! # pathdoc
//!
//! A path-addressable mutable JSON document.
//!
//! [`Document`] wraps one `serde_json::Value` and lets callers write
//! sub-values by a dotted/indexed path. Missing intermediate containers are
//! created on the way down, containers of the wrong shape are replaced, and
//! arrays grow (padded with `null`) to fit the index being written. Writes
//! never fail.
//!
//! ## Quick start
//!
//! ```rust
//! use pathdoc::{sections, Document};
//!
//! let mut doc = Document::new();
//! doc.set("users.0.name", "Alice")
//!     .set("users[0].roles[1]", "admin")
//!     .sets(true, sections!["active"]);
//!
//! assert_eq!(
//!     doc.to_json_string().unwrap(),
//!     r#"{"users":[{"name":"Alice","roles":[null,"admin"]}],"active":true}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`document`] — `Document`: construction, path writes and reads, encoding
//! - [`write`] — the auto-vivifying writer over a bare `serde_json::Value`
//! - [`path`] — `Section` and the path string tokenizer
//! - [`normalize`] — coercion of typed values into generic JSON values
//! - [`error`] — Error types for the strict entry points

pub mod document;
pub mod error;
pub mod normalize;
pub mod path;
pub mod write;

pub use document::Document;
pub use error::{PathDocError, Result};
pub use normalize::{to_json_value, try_to_json_value};
pub use path::{format_path, parse_path, Section};
pub use write::set_sections;
