//! Export tests (tree → HTML)

use insta::assert_snapshot;
use mythwright_compat::{
    tree_to_markup, value_to_markup, Converter, DocumentTree, ExtensionRegistry, Mark, Node,
};
use serde_json::json;

#[test]
fn test_paragraph() {
    let doc = DocumentTree::with_content(vec![Node::paragraph(vec![Node::text("Hello")])]);
    assert_snapshot!(tree_to_markup(&doc), @"<p>Hello</p>");
}

#[test]
fn test_text_is_escaped() {
    let doc = DocumentTree::with_content(vec![Node::paragraph(vec![Node::text(
        "<script>alert('x')</script> & co",
    )])]);
    assert_snapshot!(
        tree_to_markup(&doc),
        @"<p>&lt;script&gt;alert('x')&lt;/script&gt; &amp; co</p>"
    );
}

#[test]
fn test_editor_json_document() {
    let value = json!({
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "Actions"}]},
            {"type": "paragraph", "content": [
                {"type": "text", "text": "Scimitar.", "marks": [{"type": "bold"}, {"type": "italic"}]},
                {"type": "text", "text": " Melee Weapon Attack"}
            ]},
            {"type": "bulletList", "content": [
                {"type": "listItem", "content": [
                    {"type": "paragraph", "content": [{"type": "text", "text": "one"}]}
                ]}
            ]}
        ]
    });
    assert_snapshot!(
        value_to_markup(&value),
        @"<h2>Actions</h2><p><strong><em>Scimitar.</em></strong> Melee Weapon Attack</p><ul><li><p>one</p></li></ul>"
    );
}

#[test]
fn test_ordered_list_and_code_block() {
    let doc = DocumentTree::with_content(vec![
        Node::new("orderedList").with_attr("start", 3).with_content(vec![
            Node::new("listItem").with_content(vec![Node::paragraph(vec![Node::text("third")])]),
        ]),
        Node::new("codeBlock")
            .with_attr("language", "js")
            .with_content(vec![Node::text("if (a < b) {}")]),
    ]);
    assert_snapshot!(
        tree_to_markup(&doc),
        @r#"<ol start="3"><li><p>third</p></li></ol><pre><code class="language-js">if (a &lt; b) {}</code></pre>"#
    );
}

#[test]
fn test_link_mark() {
    let doc = DocumentTree::with_content(vec![Node::paragraph(vec![Node::text("wiki")
        .with_marks(vec![Mark::new("link").with_attrs(
            json!({"href": "https://example.com/a?b=1&c=2"})
                .as_object()
                .cloned()
                .unwrap_or_default(),
        )])])]);
    assert_snapshot!(
        tree_to_markup(&doc),
        @r#"<p><a href="https://example.com/a?b=1&amp;c=2" target="_blank" rel="noopener noreferrer nofollow">wiki</a></p>"#
    );
}

#[test]
fn test_icon_and_breaks() {
    let doc = DocumentTree::with_content(vec![
        Node::paragraph(vec![
            Node::new("icon").with_attr("icon", "ei_fire_bolt"),
            Node::text(" Fire"),
            Node::new("hardBreak"),
            Node::text("Bolt"),
        ]),
        Node::new("horizontalRule"),
    ]);
    assert_snapshot!(
        tree_to_markup(&doc),
        @r#"<p><span data-icon="ei_fire_bolt" class="ei-fire-bolt"></span> Fire<br>Bolt</p><hr>"#
    );
}

#[test]
fn test_failures_render_empty() {
    let converter = Converter::new(ExtensionRegistry::with_baseline());
    let unknown_node = DocumentTree::with_content(vec![Node::new("statBlock")]);
    let empty_text = DocumentTree::with_content(vec![Node::paragraph(vec![Node::text("")])]);

    assert_eq!(converter.markup(&unknown_node), "");
    assert_eq!(converter.markup(&empty_text), "");
    assert_eq!(value_to_markup(&json!(42)), "");
    assert_eq!(value_to_markup(&json!(null)), "");
}

#[test]
fn test_editor_json_with_null_fields() {
    let value = json!({
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": 3}, "marks": null, "content": [
                {"type": "text", "text": "Goblin", "attrs": null}
            ]},
            {"type": "paragraph", "attrs": null, "content": [{"type": "text", "text": "hi"}]}
        ]
    });
    assert_snapshot!(value_to_markup(&value), @"<h3>Goblin</h3><p>hi</p>");
}
