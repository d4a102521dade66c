//! Import tests (HTML → tree)

use mythwright_compat::{is_valid_document_tree, Converter, Node};

#[test]
fn test_round_trip_through_markup() {
    let converter = Converter::default();
    let html = concat!(
        "<h3>Goblin</h3>",
        "<blockquote><p><em>Small humanoid</em></p></blockquote>",
        "<ul><li><p><strong>Armor Class</strong> 15</p></li></ul>",
        "<p><span data-icon=\"ei_dagger\" class=\"ei-dagger\"></span> Scimitar<br>Shortbow</p>",
        "<hr>"
    );
    let doc = converter.markup_to_tree(html);
    assert!(is_valid_document_tree(&doc.to_value()));
    assert_eq!(converter.markup(&doc), html);
}

#[test]
fn test_legacy_tags_normalized() {
    let converter = Converter::default();
    let doc = converter.markup_to_tree("<p><b>bold</b> <i>it</i> <del>gone</del></p>");
    assert_eq!(
        converter.markup(&doc),
        "<p><strong>bold</strong> <em>it</em> <s>gone</s></p>"
    );
}

#[test]
fn test_wrappers_unwrapped() {
    let converter = Converter::default();
    let doc = converter.markup_to_tree(
        "<div class=\"page\"><div class=\"columnWrapper\"><p>Inside</p>loose text</div></div>",
    );
    assert_eq!(converter.markup(&doc), "<p>Inside</p><p>loose text</p>");
}

#[test]
fn test_style_blocks_dropped() {
    let converter = Converter::default();
    let doc = converter.markup_to_tree("<style>.page { background: red }</style><p>Body</p>");
    assert_eq!(doc.content, vec![Node::paragraph(vec![Node::text("Body")])]);
}

#[test]
fn test_empty_markup() {
    let converter = Converter::default();
    assert!(converter.markup_to_tree("").is_empty());
    assert!(converter.markup_to_tree("<div>  </div>").is_empty());
}
