//! Validator tests

use mythwright_compat::{ensure_document_tree, is_valid_document_tree};
use serde_json::json;

#[test]
fn test_valid_shapes() {
    assert!(is_valid_document_tree(&json!({"type": "doc", "content": []})));
    assert!(is_valid_document_tree(&json!({
        "type": "doc",
        "content": [{"type": "paragraph"}],
        "attrs": {"theme": "5ePHB"}
    })));
}

#[test]
fn test_invalid_shapes() {
    assert!(!is_valid_document_tree(&json!({"type": "doc"})));
    assert!(!is_valid_document_tree(&json!({"type": "doc", "content": {}})));
    assert!(!is_valid_document_tree(&json!({"type": "paragraph", "content": []})));
    assert!(!is_valid_document_tree(&json!(null)));
    assert!(!is_valid_document_tree(&json!("doc")));
    assert!(!is_valid_document_tree(&json!([])));
}

#[test]
fn test_ensured_trees_are_valid() {
    for input in ["", "text", "  \n"] {
        assert!(is_valid_document_tree(&ensure_document_tree(input).to_value()));
    }
}
