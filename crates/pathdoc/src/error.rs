//! Error types for strict document decoding, value normalization and encoding.

use thiserror::Error;

/// Errors surfaced by the strict entry points of pathdoc.
///
/// The lenient constructors and writers never return these; they absorb the
/// failure and log it instead.
#[derive(Error, Debug)]
pub enum PathDocError {
    /// The input was not valid JSON.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A typed value could not be converted into a generic JSON value
    /// (e.g., a map whose keys are not strings).
    #[error("value normalization error: {0}")]
    Normalize(#[source] serde_json::Error),

    /// The document could not be encoded back into JSON text.
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Convenience alias used throughout pathdoc.
pub type Result<T> = std::result::Result<T, PathDocError>;
