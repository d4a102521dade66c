//! Node and mark extensions
//!
//!     An extension is one capability of the document schema: a node type
//!     (paragraph, heading, icon...) or a mark type (bold, link...). Each one has
//!     two halves:
//!
//!     - parse: looks at a markup element and says whether it represents this
//!       node/mark, returning the attributes to store on the tree.
//!     - render: turns stored attributes back into a [`MarkupSpec`], the shape
//!       of the element to emit.
//!
//!     Extensions are collected in an [`crate::registry::ExtensionRegistry`] that
//!     is handed to the converters explicitly. Nothing registers itself globally.
//!
//!     The `text` node is not an extension; converters handle it directly.

pub mod icon;
pub mod marks;
pub mod nodes;

pub use icon::IconExtension;

use crate::tree::Attrs;

/// What a node may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
    /// Block nodes (paragraphs, lists...)
    Block,
    /// Text and inline nodes
    Inline,
    /// Unmarked text only, whitespace preserved (code blocks)
    Text,
    /// Nothing (line breaks, rules, icons)
    Atom,
}

/// Output shape of a render half.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupSpec {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub body: MarkupBody,
}

/// What goes inside a rendered element.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupBody {
    /// The node's rendered children (or the marked text, for marks)
    Hole,
    /// Fixed text
    Text(String),
    /// Nothing (`br`, `hr`, icon spans)
    Empty,
    /// One wrapped element, e.g. `pre > code`
    Nested(Box<MarkupSpec>),
}

impl MarkupSpec {
    /// An element whose body is the content hole.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            body: MarkupBody::Hole,
        }
    }

    /// An element with no body.
    pub fn empty(tag: impl Into<String>) -> Self {
        Self {
            body: MarkupBody::Empty,
            ..Self::new(tag)
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.body = MarkupBody::Text(text.into());
        self
    }

    pub fn wrapping(mut self, inner: MarkupSpec) -> Self {
        self.body = MarkupBody::Nested(Box::new(inner));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A markup element as seen by parse halves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkupElement {
    /// Lower-case local name
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    /// First element child, for nodes that read attributes from a wrapper
    pub first_child: Option<Box<MarkupElement>>,
}

impl MarkupElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_first_child(mut self, child: MarkupElement) -> Self {
        self.first_child = Some(Box::new(child));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

/// A node type of the document schema.
pub trait NodeExtension: Send + Sync {
    /// Node type tag as stored in the tree (e.g. "paragraph")
    fn name(&self) -> &str;

    /// Whether the node sits inside inline content
    fn inline(&self) -> bool {
        false
    }

    fn content(&self) -> ContentModel;

    /// Returns the node attributes if `element` represents this node.
    fn parse(&self, element: &MarkupElement) -> Option<Attrs>;

    /// Describes the element to emit for a node with `attrs`.
    fn render(&self, attrs: &Attrs) -> MarkupSpec;
}

/// A mark type of the document schema.
pub trait MarkExtension: Send + Sync {
    fn name(&self) -> &str;

    /// Returns the mark attributes if `element` represents this mark.
    fn parse(&self, element: &MarkupElement) -> Option<Attrs>;

    /// Describes the wrapper element for marked text; the body is the hole.
    fn render(&self, attrs: &Attrs) -> MarkupSpec;
}

/// Parse helper for extensions matched by tag alone.
pub(crate) fn match_tags(element: &MarkupElement, tags: &[&str]) -> Option<Attrs> {
    tags.iter()
        .any(|tag| element.is(tag))
        .then(Attrs::new)
}
