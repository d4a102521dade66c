//! Error types for tree conversion

use thiserror::Error;

/// Errors that can occur while converting document trees.
///
/// The lenient converters never hand these to callers; they log them and
/// fall back to an empty result. The `try_*` entry points return them as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// A node type with no registered extension
    #[error("Unknown node type '{0}'")]
    UnknownNode(String),
    /// A mark type with no registered extension
    #[error("Unknown mark type '{0}'")]
    UnknownMark(String),
    /// A text node without text
    #[error("Empty text nodes are not allowed")]
    EmptyText,
    /// The value handed to a converter is not a document root
    #[error("Expected a document root, found {0}")]
    NotADocument(String),
    /// The value has the right root but its body could not be decoded
    #[error("Invalid document tree: {0}")]
    InvalidTree(String),
    /// Error while writing markup
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::InvalidTree(err.to_string())
    }
}
