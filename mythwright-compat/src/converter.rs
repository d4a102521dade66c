//! Registry-backed converters
//!
//! A [`Converter`] owns one [`ExtensionRegistry`] and runs every conversion
//! through it. Two flavours of each export are provided:
//!
//! - `try_*` returns `Result<String, ConvertError>`
//! - the plain form never fails: errors are logged with `tracing::warn!`
//!   and come back as an empty string

use crate::error::ConvertError;
use crate::formats::{html, markdown, strip_markup};
use crate::legacy::{self, ImportOptions, LegacyImport};
use crate::registry::ExtensionRegistry;
use crate::tree::DocumentTree;
use serde_json::Value;

/// Converts document trees to and from their text forms.
///
/// # Examples
///
/// ```ignore
/// let converter = Converter::default();
/// let tree = ensure_document_tree("Roll for initiative");
/// assert_eq!(converter.markup(&tree), "<p>Roll for initiative</p>");
/// ```
pub struct Converter {
    registry: ExtensionRegistry,
}

impl Converter {
    pub fn new(registry: ExtensionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// Render a tree to HTML.
    pub fn try_markup(&self, doc: &DocumentTree) -> Result<String, ConvertError> {
        html::serialize_to_html(doc, &self.registry)
    }

    /// Render a tree to HTML, or `""` on failure.
    pub fn markup(&self, doc: &DocumentTree) -> String {
        self.try_markup(doc)
            .unwrap_or_else(|err| lenient_fallback(&err, "markup"))
    }

    /// Render editor JSON to HTML.
    pub fn try_markup_value(&self, value: &Value) -> Result<String, ConvertError> {
        self.try_markup(&document_from_value(value)?)
    }

    /// Render editor JSON to HTML. Anything that is not a JSON object yields
    /// `""` silently; broken objects are logged.
    pub fn markup_value(&self, value: &Value) -> String {
        if !value.is_object() {
            return String::new();
        }
        self.try_markup_value(value)
            .unwrap_or_else(|err| lenient_fallback(&err, "markup"))
    }

    /// Render a tree to plain text: markup with every tag removed and
    /// whitespace collapsed.
    pub fn try_plain_text(&self, doc: &DocumentTree) -> Result<String, ConvertError> {
        self.try_markup(doc).map(|markup| strip_markup(&markup))
    }

    pub fn plain_text(&self, doc: &DocumentTree) -> String {
        self.try_plain_text(doc)
            .unwrap_or_else(|err| lenient_fallback(&err, "plain text"))
    }

    pub fn try_plain_text_value(&self, value: &Value) -> Result<String, ConvertError> {
        self.try_plain_text(&document_from_value(value)?)
    }

    pub fn plain_text_value(&self, value: &Value) -> String {
        if !value.is_object() {
            return String::new();
        }
        self.try_plain_text_value(value)
            .unwrap_or_else(|err| lenient_fallback(&err, "plain text"))
    }

    /// Import HTML into a tree using the registry's parse halves.
    pub fn markup_to_tree(&self, markup: &str) -> DocumentTree {
        html::parse_from_html(markup, &self.registry)
    }

    /// Import CommonMark into a tree.
    pub fn markdown_to_tree(&self, source: &str) -> DocumentTree {
        markdown::parse_from_markdown(source, &self.registry)
    }

    /// Split a legacy brew into its variable definitions and a tree.
    pub fn import_legacy(&self, text: &str, options: &ImportOptions) -> LegacyImport {
        legacy::import(text, options, &self.registry)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ExtensionRegistry::with_icons())
    }
}

fn lenient_fallback(err: &ConvertError, target: &str) -> String {
    tracing::warn!(error = %err, target_format = target, "document conversion failed, returning empty output");
    String::new()
}

/// Decode editor JSON, checking the root before the body.
pub(crate) fn document_from_value(value: &Value) -> Result<DocumentTree, ConvertError> {
    let root_type = match value {
        Value::Object(map) => map.get("type").and_then(Value::as_str),
        _ => return Err(ConvertError::NotADocument(json_kind(value).to_string())),
    };

    match root_type {
        Some("doc") => Ok(serde_json::from_value(value.clone())?),
        Some(other) => Err(ConvertError::NotADocument(format!("'{other}'"))),
        None => Err(ConvertError::NotADocument("an object without type".to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
