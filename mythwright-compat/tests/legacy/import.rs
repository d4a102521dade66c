//! Import tests (legacy brew → definitions + tree)

use mythwright_compat::{import_legacy, markdown_to_tree, tree_to_markup, ImportOptions};
use serde_json::json;
use std::fs;

fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
}

#[test]
fn test_goblin_import() {
    let brew = load_fixture("goblin.md");
    let import = import_legacy(&brew, &ImportOptions::default());

    assert_eq!(import.definitions.len(), 3);
    let kinds: Vec<&str> = import.tree.content.iter().map(|n| n.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "horizontalRule",
            "bulletList",
            "paragraph",
            "paragraph"
        ]
    );
}

#[test]
fn test_goblin_markup() {
    let brew = load_fixture("goblin.md");
    let import = import_legacy(&brew, &ImportOptions::default());
    let html = tree_to_markup(&import.tree);

    assert!(html.starts_with("<h2>Goblin Boss</h2><p><em>Small humanoid (goblinoid), neutral evil</em></p><hr>"));
    assert!(html.contains("<li><p><strong>Armor Class</strong> 17</p></li>"));
    assert!(html.contains("<span data-icon=\"ei_dagger\" class=\"ei-dagger\"></span>"));
    assert!(html.contains("<a href=\"https://example.com/goblin\" target=\"_blank\" rel=\"noopener noreferrer nofollow\">Wiki</a>"));
    assert!(!html.contains("Creature Name"));
    assert!(!html.contains("Goblin Boss</p>"));
}

#[test]
fn test_import_serializes_to_editor_json() {
    let import = import_legacy("[hp]: 7\n\nText", &ImportOptions::default());
    assert_eq!(
        serde_json::to_value(&import).unwrap(),
        json!({
            "definitions": [
                {"label": "hp", "rawLabel": "hp", "content": "7", "span": {"start": 0, "end": 7}}
            ],
            "tree": {
                "type": "doc",
                "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Text"}]}]
            }
        })
    );
}

#[test]
fn test_markdown_to_tree_directly() {
    let doc = markdown_to_tree("# Title\n\nSome *text*.");
    assert_eq!(
        tree_to_markup(&doc),
        "<h1>Title</h1><p>Some <em>text</em>.</p>"
    );
}
