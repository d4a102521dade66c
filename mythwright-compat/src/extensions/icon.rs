//! Inline icon glyphs.
//!
//! Brews embed icons from the icon fonts as inline atoms. An icon node stores
//! the glyph name (`ei_dragon`) and renders as an empty span carrying the name
//! in `data-icon` and a CSS class with underscores turned into hyphens:
//!
//!     <span data-icon="ei_dragon" class="ei-dragon"></span>
//!
//! Any `span[data-icon]` parses back into an icon node.

use super::{ContentModel, MarkupElement, MarkupSpec, NodeExtension};
use crate::tree::Attrs;
use serde_json::Value;

pub struct IconExtension;

impl IconExtension {
    pub const NAME: &'static str = "icon";
    const DATA_ATTR: &'static str = "data-icon";

    /// CSS class for an icon name.
    pub fn class_for(icon: &str) -> String {
        icon.replace('_', "-")
    }
}

impl NodeExtension for IconExtension {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn inline(&self) -> bool {
        true
    }

    fn content(&self) -> ContentModel {
        ContentModel::Atom
    }

    fn parse(&self, element: &MarkupElement) -> Option<Attrs> {
        if !element.is("span") {
            return None;
        }
        let icon = element.attr(Self::DATA_ATTR)?;
        let mut attrs = Attrs::new();
        attrs.insert("icon".to_string(), Value::from(icon));
        Some(attrs)
    }

    fn render(&self, attrs: &Attrs) -> MarkupSpec {
        let icon = attrs.get("icon").and_then(Value::as_str).unwrap_or("");
        MarkupSpec::empty("span")
            .with_attr(Self::DATA_ATTR, icon)
            .with_attr("class", Self::class_for(icon))
    }
}
