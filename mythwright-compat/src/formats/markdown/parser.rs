//! Markdown parsing (markdown → tree)
//!
//! Pipeline: Markdown string → Comrak AST → DocumentTree

use crate::common::inline::{merge_text_runs, trim_text_edges};
use crate::extensions::marks::Link;
use crate::formats::html::parser::parse_blocks;
use crate::registry::ExtensionRegistry;
use crate::tree::{Attrs, DocumentTree, Mark, Node};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use serde_json::Value;

/// Parse a markdown string into a document tree
///
/// Raw HTML blocks go through the HTML importer with `registry`, so icon
/// spans and other registered elements survive.
pub fn parse_from_markdown(source: &str, registry: &ExtensionRegistry) -> DocumentTree {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut blocks = Vec::new();
    for child in root.children() {
        collect_blocks(child, registry, &mut blocks);
    }
    DocumentTree::with_content(blocks)
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

/// Convert one block-level Comrak node
fn collect_blocks<'a>(node: &'a AstNode<'a>, registry: &ExtensionRegistry, blocks: &mut Vec<Node>) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Paragraph => {
            let inlines = collect_inline_children(node, registry);
            // A paragraph holding only stripped HTML has nothing left
            if !inlines.is_empty() {
                blocks.push(Node::paragraph(inlines));
            }
        }

        NodeValue::Heading(heading) => {
            blocks.push(
                Node::new("heading")
                    .with_attr("level", heading.level)
                    .with_content(collect_inline_children(node, registry)),
            );
        }

        NodeValue::BlockQuote => {
            blocks.push(Node::new("blockquote").with_content(collect_child_blocks(node, registry)));
        }

        NodeValue::List(list) => {
            let list_node = match list.list_type {
                ListType::Bullet => Node::new("bulletList"),
                ListType::Ordered => Node::new("orderedList").with_attr("start", list.start),
            };
            blocks.push(list_node.with_content(collect_child_blocks(node, registry)));
        }

        NodeValue::Item(_) => {
            blocks.push(Node::new("listItem").with_content(collect_child_blocks(node, registry)));
        }

        NodeValue::CodeBlock(code_block) => {
            // Info string is "language attrs...", only the first word counts
            let language = code_block
                .info
                .split_whitespace()
                .next()
                .map_or(Value::Null, Value::from);
            let literal = code_block
                .literal
                .strip_suffix('\n')
                .unwrap_or(code_block.literal.as_str());

            let mut block = Node::new("codeBlock").with_attr("language", language);
            if !literal.is_empty() {
                block = block.with_content(vec![Node::text(literal)]);
            }
            blocks.push(block);
        }

        NodeValue::ThematicBreak => {
            blocks.push(Node::new("horizontalRule"));
        }

        NodeValue::HtmlBlock(html) => {
            blocks.extend(parse_blocks(&html.literal, registry));
        }

        _ => {
            // Front matter, footnotes and other extensions are not enabled
        }
    }
}

fn collect_child_blocks<'a>(node: &'a AstNode<'a>, registry: &ExtensionRegistry) -> Vec<Node> {
    let mut blocks = Vec::new();
    for child in node.children() {
        collect_blocks(child, registry, &mut blocks);
    }
    blocks
}

fn collect_inline_children<'a>(node: &'a AstNode<'a>, registry: &ExtensionRegistry) -> Vec<Node> {
    let mut inlines = Vec::new();
    let context = InlineContext { registry, marks: &[] };
    for child in node.children() {
        collect_inlines(child, &context, &mut inlines);
    }
    trim_text_edges(merge_text_runs(inlines))
}

/// Marks of the enclosing inlines, plus the registry for raw HTML
struct InlineContext<'r> {
    registry: &'r ExtensionRegistry,
    marks: &'r [Mark],
}

/// Convert one inline Comrak node, applying the marks of its ancestors
fn collect_inlines<'a>(node: &'a AstNode<'a>, context: &InlineContext, inlines: &mut Vec<Node>) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Text(text) => {
            inlines.push(Node::text(text.as_str()).with_marks(context.marks.to_vec()));
        }

        NodeValue::Code(code) => {
            let mut marks = context.marks.to_vec();
            marks.push(Mark::new("code"));
            inlines.push(Node::text(code.literal.as_str()).with_marks(marks));
        }

        NodeValue::Strong => collect_marked(node, context, Mark::new("bold"), inlines),
        NodeValue::Emph => collect_marked(node, context, Mark::new("italic"), inlines),
        NodeValue::Strikethrough => collect_marked(node, context, Mark::new("strike"), inlines),

        NodeValue::Link(link) => {
            if Link::is_allowed_href(&link.url) {
                let mut attrs = Attrs::new();
                attrs.insert("href".to_string(), Value::from(link.url.as_str()));
                attrs.insert("target".to_string(), Value::Null);
                collect_marked(node, context, Mark::new("link").with_attrs(attrs), inlines);
            } else {
                for child in node.children() {
                    collect_inlines(child, context, inlines);
                }
            }
        }

        NodeValue::Image(_) => {
            // Alt text only
            for child in node.children() {
                collect_inlines(child, context, inlines);
            }
        }

        NodeValue::SoftBreak => {
            inlines.push(Node::text(" ").with_marks(context.marks.to_vec()));
        }

        NodeValue::LineBreak => {
            inlines.push(Node::new("hardBreak"));
        }

        NodeValue::HtmlInline(html) => {
            inlines.extend(inline_atoms(html, context.registry));
        }

        _ => {
            // Skip unknown inline types
        }
    }
}

fn collect_marked<'a>(
    node: &'a AstNode<'a>,
    context: &InlineContext,
    mark: Mark,
    inlines: &mut Vec<Node>,
) {
    let mut marks = context.marks.to_vec();
    if !marks.iter().any(|existing| existing.kind == mark.kind) {
        marks.push(mark);
    }
    let nested = InlineContext {
        registry: context.registry,
        marks: &marks,
    };
    for child in node.children() {
        collect_inlines(child, &nested, inlines);
    }
}

/// Inline atoms (`<br>`, icon spans...) found in a raw HTML tag
///
/// Comrak hands inline HTML over one tag at a time, so only elements that
/// need no content can be recovered. Text between tags arrives separately.
fn inline_atoms(html: &str, registry: &ExtensionRegistry) -> Vec<Node> {
    parse_blocks(html, registry)
        .into_iter()
        .flat_map(|block| block.content)
        .filter(|node| !node.is_text())
        .collect()
}
