//! HTML serialization (tree → markup)
//!
//! Pipeline: DocumentTree → RcDom nodes (via extension render halves) → HTML string

use crate::error::ConvertError;
use crate::extensions::{MarkupBody, MarkupSpec};
use crate::registry::ExtensionRegistry;
use crate::tree::{DocumentTree, Mark, Node};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Serialize a document tree to an HTML fragment (no document wrapper)
pub fn serialize_to_html(
    doc: &DocumentTree,
    registry: &ExtensionRegistry,
) -> Result<String, ConvertError> {
    // Step 1: tree → DOM, under a detached container
    let container = create_element("div", vec![]);
    append_children(&container, &doc.content, registry)?;

    // Step 2: DOM → HTML string
    serialize_children(&container)
}

/// Render a node sequence under `parent`
///
/// Adjacent text runs share the mark wrappers they have in common, so
/// `bold` + `bold,italic` renders as one `<strong>` around both runs.
fn append_children(
    parent: &Handle,
    nodes: &[Node],
    registry: &ExtensionRegistry,
) -> Result<(), ConvertError> {
    let mut open: Vec<(&Mark, Handle)> = Vec::new();

    for node in nodes {
        if !node.is_text() {
            open.clear();
            append_node(parent, node, registry)?;
            continue;
        }

        let text = node
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
            .ok_or(ConvertError::EmptyText)?;

        let shared = open
            .iter()
            .zip(&node.marks)
            .take_while(|((open_mark, _), mark)| *open_mark == *mark)
            .count();
        open.truncate(shared);

        for mark in &node.marks[shared..] {
            let target = open.last().map_or(parent, |(_, handle)| handle).clone();
            let spec = registry.mark(&mark.kind)?.render(&mark.attrs);
            let hole = append_spec(&target, &spec).ok_or_else(|| {
                ConvertError::Serialization(format!(
                    "Mark '{}' renders without a content hole",
                    mark.kind
                ))
            })?;
            open.push((mark, hole));
        }

        let target = open.last().map_or(parent, |(_, handle)| handle);
        target.children.borrow_mut().push(create_text(text));
    }

    Ok(())
}

/// Render one non-text node (and its subtree) under `parent`
fn append_node(
    parent: &Handle,
    node: &Node,
    registry: &ExtensionRegistry,
) -> Result<(), ConvertError> {
    let extension = registry.node(&node.kind)?;
    let spec = extension.render(&node.attrs);

    if let Some(hole) = append_spec(parent, &spec) {
        append_children(&hole, &node.content, registry)?;
    }

    Ok(())
}

/// Append the element described by `spec`; returns the element that takes
/// the node's children, if the spec has a hole.
fn append_spec(parent: &Handle, spec: &MarkupSpec) -> Option<Handle> {
    let attrs = spec
        .attrs
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let element = create_element(&spec.tag, attrs);
    parent.children.borrow_mut().push(element.clone());

    match &spec.body {
        MarkupBody::Hole => Some(element),
        MarkupBody::Text(text) => {
            element.children.borrow_mut().push(create_text(text));
            None
        }
        MarkupBody::Empty => None,
        MarkupBody::Nested(inner) => append_spec(&element, inner),
    }
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(markup5ever_rcdom::Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(markup5ever_rcdom::Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the children of the container (not the container itself)
fn serialize_children(container: &Handle) -> Result<String, ConvertError> {
    let mut output = Vec::new();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            ConvertError::Serialization(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| ConvertError::Serialization(format!("UTF-8 conversion failed: {e}")))
}
