//! Label normalization

use crate::common::whitespace::collapse_whitespace;

/// Normalizes a variable display label.
///
/// Trims the label and collapses every internal whitespace run (newlines
/// included) to a single space.
pub fn normalize_var_name(label: &str) -> String {
    collapse_whitespace(label)
}
