//! HTML parsing (markup → tree)
//!
//! Pipeline: HTML string → html5ever RcDom → extension parse halves → DocumentTree
//!
//! Block containers only hold blocks: stray inline content is wrapped in a
//! paragraph and whitespace-only text between blocks is dropped.

use crate::common::inline::{merge_text_runs, trim_text_edges};
use crate::common::whitespace::collapse_markup_whitespace;
use crate::extensions::{ContentModel, MarkExtension, MarkupElement, NodeExtension};
use crate::registry::ExtensionRegistry;
use crate::tree::{Attrs, DocumentTree, Mark, Node};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements whose content never reaches the tree
const SKIPPED_ELEMENTS: [&str; 5] = ["head", "style", "script", "template", "noscript"];

/// Parse an HTML document or fragment into a document tree
pub fn parse_from_html(source: &str, registry: &ExtensionRegistry) -> DocumentTree {
    DocumentTree::with_content(parse_blocks(source, registry))
}

/// Parse markup into block nodes, for embedding into a larger tree
pub(crate) fn parse_blocks(source: &str, registry: &ExtensionRegistry) -> Vec<Node> {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);

    match find_element(&dom.document, "body") {
        Some(body) => {
            let nodes = collect_nodes(&body, &[], registry);
            normalize_blocks(nodes, registry)
        }
        None => Vec::new(),
    }
}

/// Depth-first search for the first element named `tag`
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == tag {
            return Some(handle.clone());
        }
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

/// Convert the children of `handle` into tree nodes, mixing blocks and inlines
fn collect_nodes(handle: &Handle, marks: &[Mark], registry: &ExtensionRegistry) -> Vec<Node> {
    let mut nodes = Vec::new();

    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if !text.is_empty() {
                    nodes.push(Node::text(text).with_marks(marks.to_vec()));
                }
            }

            NodeData::Element { name, .. } => {
                if SKIPPED_ELEMENTS.contains(&&*name.local) {
                    continue;
                }
                let element = markup_element(child, true);

                if let Some((extension, attrs)) = match_node(&element, registry) {
                    let mut node = Node::new(extension.name());
                    node.attrs = attrs;
                    node.content = match extension.content() {
                        ContentModel::Block => {
                            normalize_blocks(collect_nodes(child, &[], registry), registry)
                        }
                        ContentModel::Inline => {
                            normalize_inlines(collect_nodes(child, &[], registry), registry)
                        }
                        ContentModel::Text => {
                            let mut text = String::new();
                            collect_text(child, &mut text);
                            if text.is_empty() {
                                Vec::new()
                            } else {
                                vec![Node::text(text)]
                            }
                        }
                        ContentModel::Atom => Vec::new(),
                    };
                    nodes.push(node);
                } else if let Some((extension, attrs)) = match_mark(&element, registry) {
                    let mut nested = marks.to_vec();
                    if !nested.iter().any(|mark| mark.kind == extension.name()) {
                        nested.push(Mark::new(extension.name()).with_attrs(attrs));
                    }
                    nodes.extend(collect_nodes(child, &nested, registry));
                } else {
                    // Unclaimed element: keep its content
                    nodes.extend(collect_nodes(child, marks, registry));
                }
            }

            _ => {}
        }
    }

    nodes
}

fn match_node<'r>(
    element: &MarkupElement,
    registry: &'r ExtensionRegistry,
) -> Option<(&'r dyn NodeExtension, Attrs)> {
    registry
        .nodes()
        .find_map(|extension| extension.parse(element).map(|attrs| (extension, attrs)))
}

fn match_mark<'r>(
    element: &MarkupElement,
    registry: &'r ExtensionRegistry,
) -> Option<(&'r dyn MarkExtension, Attrs)> {
    registry
        .marks()
        .find_map(|extension| extension.parse(element).map(|attrs| (extension, attrs)))
}

/// Build the parse-half view of an element (and, one level deep, its first element child)
fn markup_element(handle: &Handle, with_child: bool) -> MarkupElement {
    let NodeData::Element { name, attrs, .. } = &handle.data else {
        return MarkupElement::default();
    };

    let mut element = MarkupElement::new(name.local.to_string());
    for attr in attrs.borrow().iter() {
        element = element.with_attr(attr.name.local.to_string(), attr.value.to_string());
    }

    if with_child {
        let first_child = handle
            .children
            .borrow()
            .iter()
            .find(|child| matches!(child.data, NodeData::Element { .. }))
            .map(|child| markup_element(child, false));
        if let Some(child) = first_child {
            element = element.with_first_child(child);
        }
    }

    element
}

/// Concatenate all descendant text verbatim
fn collect_text(handle: &Handle, output: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => output.push_str(&contents.borrow()),
            _ => collect_text(child, output),
        }
    }
}

fn is_inline(node: &Node, registry: &ExtensionRegistry) -> bool {
    node.is_text()
        || registry
            .node(&node.kind)
            .map(|extension| extension.inline())
            .unwrap_or(false)
}

/// Wrap inline runs between blocks into paragraphs; drop blank runs
fn normalize_blocks(nodes: Vec<Node>, registry: &ExtensionRegistry) -> Vec<Node> {
    let mut blocks = Vec::new();
    let mut run = Vec::new();

    for node in nodes {
        if is_inline(&node, registry) {
            run.push(node);
        } else {
            flush_inline_run(&mut run, &mut blocks, registry);
            blocks.push(node);
        }
    }
    flush_inline_run(&mut run, &mut blocks, registry);

    blocks
}

fn flush_inline_run(run: &mut Vec<Node>, blocks: &mut Vec<Node>, registry: &ExtensionRegistry) {
    if run.is_empty() {
        return;
    }
    let inlines = normalize_inlines(std::mem::take(run), registry);
    if !inlines.is_empty() {
        blocks.push(Node::paragraph(inlines));
    }
}

/// Flatten blocks found in inline context, collapse whitespace, merge runs
fn normalize_inlines(nodes: Vec<Node>, registry: &ExtensionRegistry) -> Vec<Node> {
    let mut flat = Vec::with_capacity(nodes.len());
    flatten_inlines(nodes, registry, &mut flat);

    // A space ending one run swallows the space starting the next
    let mut after_space = false;
    for node in flat.iter_mut() {
        if !node.is_text() {
            after_space = false;
            continue;
        }
        let Some(text) = node.text.as_mut() else {
            continue;
        };
        let mut collapsed = collapse_markup_whitespace(text);
        if after_space && collapsed.starts_with(' ') {
            collapsed.remove(0);
        }
        if !collapsed.is_empty() {
            after_space = collapsed.ends_with(' ');
        }
        *text = collapsed;
    }

    trim_text_edges(merge_text_runs(flat))
}

fn flatten_inlines(nodes: Vec<Node>, registry: &ExtensionRegistry, output: &mut Vec<Node>) {
    for node in nodes {
        if is_inline(&node, registry) {
            output.push(node);
        } else {
            flatten_inlines(node.content, registry, output);
        }
    }
}
