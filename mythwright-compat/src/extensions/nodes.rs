//! Baseline block and inline node types.
//!
//! | Node           | Markup                                   | Attributes           |
//! |----------------|------------------------------------------|----------------------|
//! | paragraph      | `<p>`                                    |                      |
//! | heading        | `<h1>`..`<h6>`                           | `level` (1-6)        |
//! | blockquote     | `<blockquote>`                           |                      |
//! | bulletList     | `<ul>`                                   |                      |
//! | orderedList    | `<ol start="n">` (start omitted when 1)  | `start`              |
//! | listItem       | `<li>`                                   |                      |
//! | codeBlock      | `<pre><code class="language-x">`         | `language`           |
//! | hardBreak      | `<br>`                                   |                      |
//! | horizontalRule | `<hr>`                                   |                      |

use super::{match_tags, ContentModel, MarkupElement, MarkupSpec, NodeExtension};
use crate::tree::Attrs;
use serde_json::Value;

pub struct Paragraph;

impl NodeExtension for Paragraph {
    fn name(&self) -> &str {
        "paragraph"
    }

    fn content(&self) -> ContentModel {
        ContentModel::Inline
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["p"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::new("p")
    }
}

pub struct Heading;

impl Heading {
    const LEVELS: [&'static str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];
}

impl NodeExtension for Heading {
    fn name(&self) -> &str {
        "heading"
    }

    fn content(&self) -> ContentModel {
        ContentModel::Inline
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        let index = Self::LEVELS.iter().position(|tag| element.is(tag))?;
        let mut attrs = Attrs::new();
        attrs.insert("level".to_string(), Value::from(index as u64 + 1));
        Some(attrs)
    }

    fn render(&self, attrs: &Attrs) -> MarkupSpec {
        let level = attrs
            .get("level")
            .and_then(Value::as_u64)
            .unwrap_or(1)
            .clamp(1, 6);
        MarkupSpec::new(format!("h{level}"))
    }
}

pub struct Blockquote;

impl NodeExtension for Blockquote {
    fn name(&self) -> &str {
        "blockquote"
    }

    fn content(&self) -> ContentModel {
        ContentModel::Block
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["blockquote"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::new("blockquote")
    }
}

pub struct BulletList;

impl NodeExtension for BulletList {
    fn name(&self) -> &str {
        "bulletList"
    }

    fn content(&self) -> ContentModel {
        ContentModel::Block
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["ul"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::new("ul")
    }
}

pub struct OrderedList;

impl NodeExtension for OrderedList {
    fn name(&self) -> &str {
        "orderedList"
    }

    fn content(&self) -> ContentModel {
        ContentModel::Block
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        if !element.is("ol") {
            return None;
        }
        let start = element
            .attr("start")
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(1);
        let mut attrs = Attrs::new();
        attrs.insert("start".to_string(), Value::from(start));
        Some(attrs)
    }

    fn render(&self, attrs: &Attrs) -> MarkupSpec {
        let start = attrs.get("start").and_then(Value::as_i64).unwrap_or(1);
        let spec = MarkupSpec::new("ol");
        if start == 1 {
            spec
        } else {
            spec.with_attr("start", start.to_string())
        }
    }
}

pub struct ListItem;

impl NodeExtension for ListItem {
    fn name(&self) -> &str {
        "listItem"
    }

    fn content(&self) -> ContentModel {
        ContentModel::Block
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["li"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::new("li")
    }
}

pub struct CodeBlock;

impl CodeBlock {
    const LANGUAGE_PREFIX: &'static str = "language-";
}

impl NodeExtension for CodeBlock {
    fn name(&self) -> &str {
        "codeBlock"
    }

    fn content(&self) -> ContentModel {
        ContentModel::Text
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        if !element.is("pre") {
            return None;
        }
        let language = element
            .first_child
            .as_deref()
            .filter(|child| child.is("code"))
            .and_then(|code| {
                code.classes()
                    .find_map(|class| class.strip_prefix(Self::LANGUAGE_PREFIX))
                    .map(str::to_string)
            });
        let mut attrs = Attrs::new();
        attrs.insert(
            "language".to_string(),
            language.map_or(Value::Null, Value::from),
        );
        Some(attrs)
    }

    fn render(&self, attrs: &Attrs) -> MarkupSpec {
        let code = match attrs.get("language").and_then(Value::as_str) {
            Some(language) if !language.is_empty() => MarkupSpec::new("code")
                .with_attr("class", format!("{}{language}", Self::LANGUAGE_PREFIX)),
            _ => MarkupSpec::new("code"),
        };
        MarkupSpec::new("pre").wrapping(code)
    }
}

pub struct HardBreak;

impl NodeExtension for HardBreak {
    fn name(&self) -> &str {
        "hardBreak"
    }

    fn inline(&self) -> bool {
        true
    }

    fn content(&self) -> ContentModel {
        ContentModel::Atom
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["br"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::empty("br")
    }
}

pub struct HorizontalRule;

impl NodeExtension for HorizontalRule {
    fn name(&self) -> &str {
        "horizontalRule"
    }

    fn content(&self) -> ContentModel {
        ContentModel::Atom
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        match_tags(element, &["hr"])
    }

    fn render(&self, _attrs: &Attrs) -> MarkupSpec {
        MarkupSpec::empty("hr")
    }
}
