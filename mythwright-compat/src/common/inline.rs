//! Inline content cleanup for imported trees.

use crate::tree::Node;

/// Merges adjacent text nodes that carry the same marks and drops empty ones.
pub fn merge_text_runs(nodes: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.is_text() {
            let text = node.text.as_deref().unwrap_or("");
            if text.is_empty() {
                continue;
            }
            if let Some(last) = merged.last_mut() {
                if last.is_text() && last.marks == node.marks {
                    last.text.get_or_insert_with(String::new).push_str(text);
                    continue;
                }
            }
        }
        merged.push(node);
    }
    merged
}

/// Trims leading whitespace of the first text run and trailing whitespace of
/// the last one, dropping runs that end up empty.
pub fn trim_text_edges(mut nodes: Vec<Node>) -> Vec<Node> {
    if let Some(text) = nodes.first_mut().and_then(text_mut) {
        *text = text.trim_start().to_string();
    }
    if let Some(text) = nodes.last_mut().and_then(text_mut) {
        *text = text.trim_end().to_string();
    }
    nodes.retain(|node| !node.is_text() || node.text.as_deref().is_some_and(|t| !t.is_empty()));
    nodes
}

fn text_mut(node: &mut Node) -> Option<&mut String> {
    if node.is_text() {
        node.text.as_mut()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Mark;

    #[test]
    fn test_merges_same_marks() {
        let nodes = vec![
            Node::text("Roll "),
            Node::text("for "),
            Node::text("initiative").with_marks(vec![Mark::new("bold")]),
        ];
        let merged = merge_text_runs(nodes);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].text.as_deref(), Some("Roll for "));
    }

    #[test]
    fn test_drops_empty_text() {
        let merged = merge_text_runs(vec![Node::text(""), Node::new("hardBreak")]);
        assert_eq!(merged, vec![Node::new("hardBreak")]);
    }

    #[test]
    fn test_trim_edges() {
        let nodes = vec![Node::text("  a "), Node::new("hardBreak"), Node::text(" b  ")];
        let trimmed = trim_text_edges(nodes);
        assert_eq!(trimmed[0].text.as_deref(), Some("a "));
        assert_eq!(trimmed[2].text.as_deref(), Some(" b"));
    }

    #[test]
    fn test_trim_drops_blank_run() {
        assert!(trim_text_edges(vec![Node::text("   ")]).is_empty());
    }
}
