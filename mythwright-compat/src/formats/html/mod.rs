//! HTML adapter
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for both directions:
//! - export builds an `RcDom` tree and hands it to the html5ever serializer,
//!   which owns escaping and void-element rules
//! - import parses with the browser-grade html5ever parser, so malformed
//!   markup degrades the way it would in the editor
//!
//! # Element Mapping
//!
//! There is no fixed mapping table here. Every node and mark type maps
//! through its extension in the [`crate::registry::ExtensionRegistry`]: render
//! halves on export, parse halves on import.
//!
//! # Lossy Conversions
//!
//! - Elements no extension claims are unwrapped on import (their text stays)
//! - `style`, `script` and `template` elements are dropped on import
//! - Inline whitespace is collapsed on import, except inside code blocks
//! - Marks on inline atoms (icons, breaks) are not imported

pub mod parser;
pub mod serializer;

pub use parser::parse_from_html;
pub use serializer::serialize_to_html;
