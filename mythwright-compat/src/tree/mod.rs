//! Structured document trees.
//!
//! The editor stores documents as a JSON tree rooted at a `doc` node. This
//! module holds the typed form of that tree, the ensurer that coerces legacy
//! strings and loose JSON into it, and the shape validator.

pub mod ensure;
pub mod nodes;
pub mod validate;

pub use ensure::{ensure_document_tree, IntoDocumentTree};
pub use nodes::{Attrs, DocumentTree, Mark, Node};
pub use validate::is_valid_document_tree;
