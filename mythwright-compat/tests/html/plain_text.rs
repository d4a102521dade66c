//! Plain text tests (tree → markup → text)

use mythwright_compat::{
    ensure_document_tree, tree_to_plain_text, value_to_plain_text, ContentModel, Converter,
    DocumentTree, ExtensionRegistry, MarkupElement, MarkupSpec, Node, NodeExtension,
};
use mythwright_compat::tree::Attrs;
use proptest::prelude::*;
use serde_json::{json, Value};

/// Raw CSS carried in the tree, the way themed brews embed it
struct StyleBlock;

impl NodeExtension for StyleBlock {
    fn name(&self) -> &str {
        "styleBlock"
    }

    fn content(&self) -> ContentModel {
        ContentModel::Atom
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        element.is("style").then(Attrs::new)
    }

    fn render(&self, attrs: &Attrs) -> MarkupSpec {
        let css = attrs.get("css").and_then(Value::as_str).unwrap_or("");
        MarkupSpec::new("style").with_text(css)
    }
}

fn styled_converter() -> Converter {
    let mut registry = ExtensionRegistry::with_icons();
    registry.register_node(StyleBlock);
    Converter::new(registry)
}

#[test]
fn test_plain_text_of_string() {
    assert_eq!(tree_to_plain_text(&ensure_document_tree("hello")), "hello");
}

#[test]
fn test_style_block_content_omitted() {
    let converter = styled_converter();
    let doc = DocumentTree::with_content(vec![
        Node::new("styleBlock").with_attr("css", ".page { color: red; }"),
        Node::paragraph(vec![Node::text("Visible text")]),
    ]);

    assert!(converter.markup(&doc).contains(".page { color: red; }"));
    assert_eq!(converter.plain_text(&doc), "Visible text");
}

#[test]
fn test_blocks_separate_words() {
    let value = json!({
        "type": "doc",
        "content": [
            {"type": "paragraph", "content": [{"type": "text", "text": "first"}]},
            {"type": "paragraph", "content": [
                {"type": "text", "text": "second"},
                {"type": "hardBreak"},
                {"type": "text", "text": "third"}
            ]}
        ]
    });
    assert_eq!(value_to_plain_text(&value), "first second third");
}

#[test]
fn test_entities_decoded() {
    let doc = ensure_document_tree("Fish & Chips <3");
    assert_eq!(tree_to_plain_text(&doc), "Fish & Chips <3");
}

#[test]
fn test_icons_contribute_no_text() {
    let doc = DocumentTree::with_content(vec![Node::paragraph(vec![
        Node::new("icon").with_attr("icon", "ei_skull"),
        Node::text(" Death Saves"),
    ])]);
    assert_eq!(tree_to_plain_text(&doc), "Death Saves");
}

#[test]
fn test_non_objects_yield_empty() {
    assert_eq!(value_to_plain_text(&json!(42)), "");
    assert_eq!(value_to_plain_text(&json!(null)), "");
}

fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

proptest! {
    #[test]
    fn plain_text_round_trips_ascii(text in "[ -~\\t\\n]{0,80}") {
        let doc = ensure_document_tree(text.as_str());
        prop_assert_eq!(tree_to_plain_text(&doc), collapse(text.trim()));
    }
}
