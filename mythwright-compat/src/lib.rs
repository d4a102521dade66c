//! Legacy document compatibility for Mythwright brews
//!
//!     Brews come in two shapes: legacy markdown strings, written before the
//!     rich editor existed, and the editor's structured document tree (JSON
//!     rooted at a `doc` node). This crate bridges the two:
//!
//!     - variables: finds `[label]: content` definition blocks in legacy text
//!     - tree: the typed document tree, the ensurer that coerces any input into
//!       one, and the shape validator
//!     - converters: tree → HTML markup and tree → plain text, plus the
//!       importers from HTML, markdown and whole legacy brews
//!
//!     This is a pure lib. It never prints, reads env vars or touches files;
//!     mythwright-cli is the shell around it.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── registry.rs             # ExtensionRegistry
//!     ├── converter.rs            # Converter: registry-backed conversions
//!     ├── legacy.rs               # Legacy brew import
//!     ├── extensions              # Node and mark extensions (parse + render halves)
//!     ├── formats
//!     │   ├── html                # parser.rs (import), serializer.rs (export)
//!     │   ├── markdown            # parser.rs (import)
//!     │   └── text.rs             # Tag stripping
//!     ├── tree                    # DocumentTree, ensurer, validator
//!     ├── variables               # Definition extraction, label normalization
//!     └── common                  # Whitespace and inline run helpers
//!
//!     Node and mark types are never hard-wired into the converters. Each one is
//!     an extension with a parse half (markup element → attributes) and a
//!     render half (attributes → element shape). A converter only knows the
//!     extensions in the registry it was built with.
//!
//! Failure Model
//!
//!     Extraction skips anything that does not parse. The ensurer degrades to
//!     the empty document. Converters have a `try_*` form returning
//!     [`ConvertError`] and a lenient form that logs the error and returns an
//!     empty string, which is what legacy string-expecting callers want.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs                  # wires the subdirectories below
//!     ├── variables               # extraction fixtures
//!     ├── tree                    # ensurer and validator
//!     ├── html                    # export, import, plain text
//!     ├── legacy                  # whole-brew import
//!     └── fixtures

pub mod common;
pub mod converter;
pub mod error;
pub mod extensions;
pub mod formats;
pub mod legacy;
pub mod registry;
pub mod tree;
pub mod variables;

pub use converter::Converter;
pub use error::ConvertError;
pub use extensions::{ContentModel, IconExtension, MarkExtension, MarkupElement, MarkupSpec, NodeExtension};
pub use formats::strip_markup;
pub use legacy::{ImportOptions, LegacyImport};
pub use registry::ExtensionRegistry;
pub use tree::{
    ensure_document_tree, is_valid_document_tree, DocumentTree, IntoDocumentTree, Mark, Node,
};
pub use variables::{
    extract_variable_definitions, normalize_var_name, DefinitionMarker, VariableDefinition,
};

use serde_json::Value;

/// Renders a tree to HTML with the default (icon-enabled) registry.
///
/// Returns `""` if the tree cannot be rendered; the failure is logged.
pub fn tree_to_markup(doc: &DocumentTree) -> String {
    Converter::default().markup(doc)
}

/// Renders editor JSON to HTML. Non-object values yield `""`.
pub fn value_to_markup(value: &Value) -> String {
    Converter::default().markup_value(value)
}

/// Renders a tree to plain text: markup with tags removed, `<style>` and
/// `<script>` content dropped, whitespace collapsed and trimmed.
pub fn tree_to_plain_text(doc: &DocumentTree) -> String {
    Converter::default().plain_text(doc)
}

/// Renders editor JSON to plain text. Non-object values yield `""`.
pub fn value_to_plain_text(value: &Value) -> String {
    Converter::default().plain_text_value(value)
}

/// Imports CommonMark text with the default registry.
pub fn markdown_to_tree(source: &str) -> DocumentTree {
    Converter::default().markdown_to_tree(source)
}

/// Splits a legacy brew into definitions and a tree with the default registry.
pub fn import_legacy(text: &str, options: &ImportOptions) -> LegacyImport {
    Converter::default().import_legacy(text, options)
}
