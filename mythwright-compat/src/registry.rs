//! Extension registry
//!
//! Holds the node and mark extensions a converter works with. Registries are
//! built up front and passed into [`crate::Converter::new`]; they are never
//! mutated while a conversion runs.

use crate::error::ConvertError;
use crate::extensions::{marks, nodes, IconExtension, MarkExtension, NodeExtension};

/// Node types every registry understands without an extension.
const BUILTIN_NODES: [&str; 1] = ["text"];

/// Registry of node and mark extensions
///
/// Registration order is parse priority: when importing markup, the first
/// extension whose parse half accepts an element wins.
///
/// # Examples
///
/// ```ignore
/// let mut registry = ExtensionRegistry::with_baseline();
/// registry.register_node(MyCalloutNode);
///
/// let converter = Converter::new(registry);
/// let html = converter.markup(&tree);
/// ```
pub struct ExtensionRegistry {
    nodes: Vec<Box<dyn NodeExtension>>,
    marks: Vec<Box<dyn MarkExtension>>,
}

impl ExtensionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ExtensionRegistry {
            nodes: Vec::new(),
            marks: Vec::new(),
        }
    }

    /// Register a node extension
    ///
    /// If a node with the same name already exists, it is replaced in place.
    pub fn register_node<E: NodeExtension + 'static>(&mut self, extension: E) {
        match self.nodes.iter().position(|n| n.name() == extension.name()) {
            Some(index) => self.nodes[index] = Box::new(extension),
            None => self.nodes.push(Box::new(extension)),
        }
    }

    /// Register a mark extension
    ///
    /// If a mark with the same name already exists, it is replaced in place.
    pub fn register_mark<E: MarkExtension + 'static>(&mut self, extension: E) {
        match self.marks.iter().position(|m| m.name() == extension.name()) {
            Some(index) => self.marks[index] = Box::new(extension),
            None => self.marks.push(Box::new(extension)),
        }
    }

    /// Get a node extension by name
    pub fn node(&self, name: &str) -> Result<&dyn NodeExtension, ConvertError> {
        self.nodes
            .iter()
            .find(|n| n.name() == name)
            .map(|n| n.as_ref())
            .ok_or_else(|| ConvertError::UnknownNode(name.to_string()))
    }

    /// Get a mark extension by name
    pub fn mark(&self, name: &str) -> Result<&dyn MarkExtension, ConvertError> {
        self.marks
            .iter()
            .find(|m| m.name() == name)
            .map(|m| m.as_ref())
            .ok_or_else(|| ConvertError::UnknownMark(name.to_string()))
    }

    /// Check if a node type is understood (built-in or registered)
    pub fn has_node(&self, name: &str) -> bool {
        BUILTIN_NODES.contains(&name) || self.nodes.iter().any(|n| n.name() == name)
    }

    /// Check if a mark type is registered
    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.iter().any(|m| m.name() == name)
    }

    /// List registered node names (sorted)
    pub fn node_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.nodes.iter().map(|n| n.name().to_string()).collect();
        names.sort();
        names
    }

    /// List registered mark names (sorted)
    pub fn mark_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.marks.iter().map(|m| m.name().to_string()).collect();
        names.sort();
        names
    }

    /// Node extensions in registration order
    pub fn nodes(&self) -> impl Iterator<Item = &dyn NodeExtension> {
        self.nodes.iter().map(|n| n.as_ref())
    }

    /// Mark extensions in registration order
    pub fn marks(&self) -> impl Iterator<Item = &dyn MarkExtension> {
        self.marks.iter().map(|m| m.as_ref())
    }

    /// Create a registry with the baseline formatting set
    pub fn with_baseline() -> Self {
        let mut registry = Self::new();

        registry.register_node(nodes::Paragraph);
        registry.register_node(nodes::Heading);
        registry.register_node(nodes::Blockquote);
        registry.register_node(nodes::BulletList);
        registry.register_node(nodes::OrderedList);
        registry.register_node(nodes::ListItem);
        registry.register_node(nodes::CodeBlock);
        registry.register_node(nodes::HardBreak);
        registry.register_node(nodes::HorizontalRule);

        registry.register_mark(marks::Bold);
        registry.register_mark(marks::Italic);
        registry.register_mark(marks::Strike);
        registry.register_mark(marks::Underline);
        registry.register_mark(marks::Code);
        registry.register_mark(marks::Link);

        registry
    }

    /// Create a registry with the baseline set plus inline icons
    pub fn with_icons() -> Self {
        let mut registry = Self::with_baseline();
        registry.register_node(IconExtension);
        registry
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::with_baseline()
    }
}
