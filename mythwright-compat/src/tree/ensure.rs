//! Coercion of arbitrary input into a document tree.
//!
//! Legacy documents are plain strings; newer ones are editor JSON. Renderers
//! only want trees, so everything goes through [`ensure_document_tree`] first.
//! The coercion never fails: anything unrecognized becomes the empty tree.

use super::nodes::{DocumentTree, Node};
use serde_json::Value;

/// Values that can be coerced into a [`DocumentTree`].
pub trait IntoDocumentTree {
    fn into_document_tree(self) -> DocumentTree;
}

/// Coerces `input` into a canonical document tree.
///
/// - a tree passes through untouched
/// - a string with visible characters becomes one paragraph holding one text
///   node with the string verbatim (no markdown interpretation)
/// - empty or whitespace-only strings, `None`, `null` and unexpected JSON
///   become the empty tree
pub fn ensure_document_tree<T: IntoDocumentTree>(input: T) -> DocumentTree {
    input.into_document_tree()
}

impl IntoDocumentTree for DocumentTree {
    fn into_document_tree(self) -> DocumentTree {
        self
    }
}

impl IntoDocumentTree for &str {
    fn into_document_tree(self) -> DocumentTree {
        if self.trim().is_empty() {
            return DocumentTree::empty();
        }
        DocumentTree::with_content(vec![Node::paragraph(vec![Node::text(self)])])
    }
}

impl IntoDocumentTree for String {
    fn into_document_tree(self) -> DocumentTree {
        self.as_str().into_document_tree()
    }
}

impl IntoDocumentTree for &String {
    fn into_document_tree(self) -> DocumentTree {
        self.as_str().into_document_tree()
    }
}

impl<T: IntoDocumentTree> IntoDocumentTree for Option<T> {
    fn into_document_tree(self) -> DocumentTree {
        match self {
            Some(inner) => inner.into_document_tree(),
            None => DocumentTree::empty(),
        }
    }
}

impl IntoDocumentTree for &Value {
    fn into_document_tree(self) -> DocumentTree {
        match self {
            Value::String(text) => text.as_str().into_document_tree(),
            Value::Object(map) if map.get("type").and_then(Value::as_str) == Some("doc") => {
                match serde_json::from_value(self.clone()) {
                    Ok(tree) => tree,
                    Err(err) => {
                        tracing::warn!(error = %err, "undecodable document tree, using empty document");
                        DocumentTree::empty()
                    }
                }
            }
            _ => DocumentTree::empty(),
        }
    }
}

impl IntoDocumentTree for Value {
    fn into_document_tree(self) -> DocumentTree {
        (&self).into_document_tree()
    }
}
