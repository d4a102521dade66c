//! Definition block scanner
//!
//! A definition starts at the beginning of a line:
//!
//!     [!|$]? '[' label ']' ':' (not '(') content
//!
//! - label: any characters but unescaped `[` or `]`. `\x` takes `x` literally
//!   (except a newline). Whitespace-only labels are rejected.
//! - content: one or more segments. Each segment is an optional newline,
//!   optional spaces/tabs, a non-whitespace character and the rest of that
//!   line. A blank or whitespace-only line ends the block.
//!
//! The scanner never backtracks past the line it started on, so the whole
//! pass is linear in the input length.

use super::label::normalize_var_name;
use serde::Serialize;
use std::ops::Range;

/// Prefix marking a variant definition kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefinitionMarker {
    #[serde(rename = "!")]
    Bang,
    #[serde(rename = "$")]
    Dollar,
}

impl DefinitionMarker {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'!' => Some(DefinitionMarker::Bang),
            b'$' => Some(DefinitionMarker::Dollar),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            DefinitionMarker::Bang => '!',
            DefinitionMarker::Dollar => '$',
        }
    }
}

/// A variable definition found in legacy text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDefinition {
    /// Normalized display name
    pub label: String,
    /// Label exactly as written between the brackets, escapes intact
    pub raw_label: String,
    /// Body with space/tab runs collapsed and outer whitespace trimmed
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<DefinitionMarker>,
    /// Byte range of the whole block in the source text
    pub span: Range<usize>,
}

/// Extracts every definition block from `text`, in source order.
///
/// Text that does not conform to the block syntax is skipped. Later
/// definitions of the same label are kept as separate entries.
pub fn extract_variable_definitions(text: &str) -> Vec<VariableDefinition> {
    let mut definitions = Vec::new();
    let mut line_start = Some(0);

    while let Some(start) = line_start {
        match scan_definition(text, start) {
            Some(definition) => {
                line_start = next_line_start(text, definition.span.end);
                definitions.push(definition);
            }
            None => line_start = next_line_start(text, start),
        }
    }

    tracing::debug!(count = definitions.len(), "extracted variable definitions");
    definitions
}

fn next_line_start(text: &str, from: usize) -> Option<usize> {
    text[from..].find('\n').map(|offset| from + offset + 1)
}

/// Tries to read one definition block starting exactly at `start`.
fn scan_definition(text: &str, start: usize) -> Option<VariableDefinition> {
    let bytes = text.as_bytes();
    let mut pos = start;

    let marker = DefinitionMarker::from_byte(*bytes.get(pos)?);
    if marker.is_some() {
        pos += 1;
    }

    if bytes.get(pos) != Some(&b'[') {
        return None;
    }
    pos += 1;

    let label_start = pos;
    let label_end = scan_label(bytes, pos)?;
    let raw_label = &text[label_start..label_end];
    if raw_label.chars().all(char::is_whitespace) {
        return None;
    }
    pos = label_end + 1;

    if bytes.get(pos) != Some(&b':') {
        return None;
    }
    pos += 1;

    // `[label]:(target)` is link syntax, not a definition
    if bytes.get(pos) == Some(&b'(') {
        return None;
    }

    pos = skip_horizontal_whitespace(bytes, pos);
    let content_end = scan_content(text, pos)?;

    Some(VariableDefinition {
        label: normalize_var_name(raw_label),
        raw_label: raw_label.to_string(),
        content: clean_content(&text[pos..content_end]),
        marker,
        span: start..content_end,
    })
}

/// Returns the index of the closing bracket of a label starting at `pos`.
///
/// Multi-byte UTF-8 sequences never contain ASCII bytes, so stepping byte by
/// byte only ever stops on real brackets and backslashes.
fn scan_label(bytes: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        match *bytes.get(pos)? {
            b'\\' => {
                if *bytes.get(pos + 1)? == b'\n' {
                    return None;
                }
                pos += 2;
            }
            b'[' => return None,
            b']' => return Some(pos),
            _ => pos += 1,
        }
    }
}

/// Returns the end of the content block starting at `pos`, or `None` when
/// there is no content at all.
fn scan_content(text: &str, pos: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut end = None;
    let mut cursor = pos;

    loop {
        let mut segment = cursor;
        if bytes.get(segment) == Some(&b'\n') {
            segment += 1;
        }
        segment = skip_horizontal_whitespace(bytes, segment);

        match text[segment..].chars().next() {
            Some(c) if !c.is_whitespace() => {}
            _ => break,
        }

        let line_end = text[segment..]
            .find('\n')
            .map_or(text.len(), |offset| segment + offset);
        end = Some(line_end);
        cursor = line_end;
    }

    end
}

fn skip_horizontal_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while matches!(bytes.get(pos), Some(b' ' | b'\t')) {
        pos += 1;
    }
    pos
}

/// Collapses space/tab runs to a single space and trims. Newlines survive.
fn clean_content(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut in_run = false;
    for c in raw.chars() {
        if c == ' ' || c == '\t' {
            if !in_run {
                cleaned.push(' ');
                in_run = true;
            }
        } else {
            cleaned.push(c);
            in_run = false;
        }
    }
    cleaned.trim().to_string()
}
