//! Extraction tests against fixture brews

use mythwright_compat::{extract_variable_definitions, DefinitionMarker};
use std::fs;

fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
}

#[test]
fn test_goblin_fixture_definitions() {
    let brew = load_fixture("goblin.md");
    let defs = extract_variable_definitions(&brew);

    let summary: Vec<(&str, &str, Option<DefinitionMarker>)> = defs
        .iter()
        .map(|d| (d.label.as_str(), d.content.as_str(), d.marker))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Creature Name", "Goblin Boss", None),
            (
                "armor class",
                "17 (chain shirt,\nshield)",
                Some(DefinitionMarker::Dollar)
            ),
            ("Hit Points", "21 (6d6)", Some(DefinitionMarker::Bang)),
        ]
    );
}

#[test]
fn test_links_in_fixture_are_not_definitions() {
    let brew = load_fixture("goblin.md");
    let defs = extract_variable_definitions(&brew);
    assert!(defs.iter().all(|d| d.label != "Wiki"));
}

#[test]
fn test_spans_point_into_source() {
    let brew = load_fixture("goblin.md");
    for def in extract_variable_definitions(&brew) {
        let block = &brew[def.span.clone()];
        assert!(block.contains(&def.raw_label));
        assert!(!block.ends_with('\n'));
    }
}

#[test]
fn test_reference_example() {
    let text = "[Title]: Legendary Sword\n\n$[mathVar]: 1 + 2\n\nText content";
    let defs = extract_variable_definitions(text);
    assert_eq!(defs.len(), 2);
    assert_eq!((defs[0].label.as_str(), defs[0].content.as_str()), ("Title", "Legendary Sword"));
    assert_eq!((defs[1].label.as_str(), defs[1].content.as_str()), ("mathVar", "1 + 2"));
    assert!(!defs[1].raw_label.contains('$'));
}

#[test]
fn test_json_shape() {
    let defs = extract_variable_definitions("$[  My   Var ]: some\tvalue");
    let json = serde_json::to_string(&defs).unwrap();
    insta::assert_snapshot!(json, @r#"[{"label":"My Var","rawLabel":"  My   Var ","content":"some value","marker":"$","span":{"start":0,"end":26}}]"#);
}

#[test]
fn test_large_input_without_definitions() {
    // One long unterminated label per line must not blow up
    let line = format!("[{}\n", "x".repeat(2_000));
    let text = line.repeat(200);
    assert!(extract_variable_definitions(&text).is_empty());
}
