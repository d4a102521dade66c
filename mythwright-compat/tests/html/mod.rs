//! HTML format tests
//!
//! Tree → markup, markup → tree and tree → plain text.

mod export;
mod import;
mod plain_text;
