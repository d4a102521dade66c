//! Plain-text extraction from markup
//!
//! The markup is parsed with html5ever rather than stripped with patterns, so
//! entity decoding and `<style>`/`<script>` boundaries follow browser rules.

use crate::common::whitespace::collapse_whitespace;
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements dropped together with their content
const DROPPED_ELEMENTS: [&str; 5] = ["head", "style", "script", "template", "noscript"];

/// Elements that separate words in the extracted text
const BREAKING_ELEMENTS: [&str; 24] = [
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li", "ol", "p", "pre", "ul",
];

/// Strips every tag from `markup`, returning its visible text with
/// whitespace collapsed and trimmed.
pub fn strip_markup(markup: &str) -> String {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(markup);
    let mut text = String::with_capacity(markup.len());
    collect_visible_text(&dom.document, &mut text);
    collapse_whitespace(&text)
}

fn collect_visible_text(handle: &Handle, output: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => output.push_str(&contents.borrow()),
            NodeData::Element { name, .. } => {
                let tag = &*name.local;
                if DROPPED_ELEMENTS.contains(&tag) {
                    continue;
                }
                let breaking = BREAKING_ELEMENTS.contains(&tag);
                if breaking {
                    output.push(' ');
                }
                collect_visible_text(child, output);
                if breaking {
                    output.push(' ');
                }
            }
            _ => {}
        }
    }
}
