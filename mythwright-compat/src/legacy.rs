//! Legacy brew import
//!
//! A legacy brew is markdown text with variable definition blocks mixed in.
//! Importing splits it into the definitions and a document tree for the rest.

use crate::formats::markdown::parse_from_markdown;
use crate::registry::ExtensionRegistry;
use crate::tree::DocumentTree;
use crate::variables::{extract_variable_definitions, VariableDefinition};
use serde::Serialize;

/// Options for [`crate::Converter::import_legacy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Remove definition blocks from the text before building the tree
    pub strip_definitions: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            strip_definitions: true,
        }
    }
}

/// Result of importing a legacy brew
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyImport {
    pub definitions: Vec<VariableDefinition>,
    pub tree: DocumentTree,
}

pub(crate) fn import(
    text: &str,
    options: &ImportOptions,
    registry: &ExtensionRegistry,
) -> LegacyImport {
    let definitions = extract_variable_definitions(text);

    let tree = if options.strip_definitions && !definitions.is_empty() {
        parse_from_markdown(&remove_definitions(text, &definitions), registry)
    } else {
        parse_from_markdown(text, registry)
    };

    tracing::debug!(
        definitions = definitions.len(),
        blocks = tree.content.len(),
        "imported legacy brew"
    );

    LegacyImport { definitions, tree }
}

/// Cut every definition span out of `text`. Spans are sorted and disjoint.
fn remove_definitions(text: &str, definitions: &[VariableDefinition]) -> String {
    let mut remainder = String::with_capacity(text.len());
    let mut cursor = 0;
    for definition in definitions {
        remainder.push_str(&text[cursor..definition.span.start]);
        cursor = definition.span.end;
    }
    remainder.push_str(&text[cursor..]);
    remainder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    const BREW: &str = "[Title]: Legendary Sword\n\n$[mathVar]: 1 + 2\n\n# The Blade\n\nIt hums.\n";

    #[test]
    fn test_definitions_stripped_by_default() {
        let import = import(BREW, &ImportOptions::default(), &ExtensionRegistry::with_icons());
        assert_eq!(import.definitions.len(), 2);
        assert_eq!(import.tree.content.len(), 2);
        assert_eq!(import.tree.content[0].kind, "heading");
        assert_eq!(
            import.tree.content[1].content,
            vec![Node::text("It hums.")]
        );
    }

    #[test]
    fn test_definitions_kept_when_asked() {
        let options = ImportOptions {
            strip_definitions: false,
        };
        let import = import(BREW, &options, &ExtensionRegistry::with_icons());
        assert_eq!(import.definitions.len(), 2);
        assert_eq!(
            import.tree.content[0].content,
            vec![Node::text("[Title]: Legendary Sword")]
        );
    }

    #[test]
    fn test_remove_definitions_keeps_surroundings() {
        let text = "before\n\n[x]: y\n\nafter";
        let definitions = extract_variable_definitions(text);
        assert_eq!(remove_definitions(text, &definitions), "before\n\n\n\nafter");
    }

    #[test]
    fn test_empty_brew() {
        let import = import("", &ImportOptions::default(), &ExtensionRegistry::with_icons());
        assert!(import.definitions.is_empty());
        assert!(import.tree.is_empty());
    }
}
