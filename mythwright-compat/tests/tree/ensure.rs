//! Ensurer tests

use mythwright_compat::{ensure_document_tree, is_valid_document_tree, DocumentTree, Node};
use serde_json::{json, Value};

#[test]
fn test_none_and_empty_become_empty_tree() {
    assert_eq!(ensure_document_tree(None::<&str>), DocumentTree::empty());
    assert_eq!(ensure_document_tree(""), DocumentTree::empty());
    assert_eq!(ensure_document_tree(" \n\t "), DocumentTree::empty());
    assert_eq!(ensure_document_tree(&Value::Null), DocumentTree::empty());
}

#[test]
fn test_string_becomes_single_paragraph() {
    let doc = ensure_document_tree("hello");
    assert_eq!(
        doc.to_value(),
        json!({
            "type": "doc",
            "content": [{"type": "paragraph", "content": [{"type": "text", "text": "hello"}]}]
        })
    );
}

#[test]
fn test_string_kept_verbatim() {
    let text = "  # not a heading\n\n**not bold**  ";
    let doc = ensure_document_tree(text);
    assert_eq!(doc.content, vec![Node::paragraph(vec![Node::text(text)])]);
}

#[test]
fn test_tree_is_a_fixed_point() {
    let doc = ensure_document_tree("hello");
    assert_eq!(ensure_document_tree(doc.clone()), doc);
    assert_eq!(ensure_document_tree(&doc.to_value()), doc);
}

#[test]
fn test_editor_json_is_decoded() {
    let value = json!({
        "type": "doc",
        "content": [{"type": "horizontalRule"}]
    });
    let doc = ensure_document_tree(value);
    assert_eq!(doc.content, vec![Node::new("horizontalRule")]);
}

#[test]
fn test_doc_without_content_reads_as_empty() {
    assert_eq!(ensure_document_tree(json!({"type": "doc"})), DocumentTree::empty());
}

#[test]
fn test_unexpected_values_become_empty_tree() {
    for value in [
        json!(42),
        json!(true),
        json!([{"type": "doc"}]),
        json!({"type": "paragraph"}),
        json!({"type": "doc", "content": "not an array"}),
    ] {
        assert_eq!(ensure_document_tree(&value), DocumentTree::empty(), "{value}");
    }
}

#[test]
fn test_json_string_is_legacy_text() {
    let doc = ensure_document_tree(json!("Legendary Sword"));
    assert_eq!(doc.content[0].content[0].text.as_deref(), Some("Legendary Sword"));
}

#[test]
fn test_null_fields_do_not_discard_the_document() {
    let value = json!({
        "type": "doc",
        "content": [{
            "type": "paragraph",
            "attrs": null,
            "content": [{"type": "text", "text": "hi", "marks": null}]
        }]
    });
    assert!(is_valid_document_tree(&value));

    let doc = ensure_document_tree(&value);
    assert_eq!(doc.content, vec![Node::paragraph(vec![Node::text("hi")])]);
}
