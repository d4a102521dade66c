//! Markdown import
//!
//! Legacy brews are written in Homebrewery-flavoured markdown. This module
//! reads the CommonMark core of that dialect into document trees.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for parsing: CommonMark compliant, with the
//! strikethrough and autolink extensions legacy brews rely on.
//!
//! # Element Mapping
//!
//! | Markdown                 | Tree                                  |
//! |--------------------------|---------------------------------------|
//! | Paragraph                | paragraph                             |
//! | `#`..`######`            | heading (`level`)                     |
//! | `>` quote                | blockquote                            |
//! | `-` / `1.` lists         | bulletList / orderedList (`start`)    |
//! | Fenced/indented code     | codeBlock (`language` from info)      |
//! | `---`                    | horizontalRule                        |
//! | Raw HTML block           | parsed through the HTML importer      |
//! | `*em*`, `**strong**`     | italic, bold marks                    |
//! | `~~strike~~`             | strike mark                           |
//! | `` `code` ``             | code mark                             |
//! | `[text](url)`            | link mark (unsafe schemes dropped)    |
//! | hard break, `<br>`       | hardBreak                             |
//! | inline icon `<span>`     | icon (when registered)                |
//! | soft break               | a space                               |
//!
//! # Lossy Conversions
//!
//! - Images keep only their alt text
//! - Inline HTML tags are dropped unless they are inline atoms on their own
//!   (`<br>`, icon spans); text between tags stays
//! - Link reference definitions are consumed by the parser and vanish
//! - Homebrewery extensions (`\page`, `{{ }}` blocks) come through as text

pub mod parser;

pub use parser::parse_from_markdown;
