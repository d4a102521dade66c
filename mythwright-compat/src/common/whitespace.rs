//! Whitespace normalization.

/// Collapses every whitespace run to a single space and trims the edges.
///
/// Newlines count as whitespace, so multi-line input comes out on one line.
pub fn collapse_whitespace(s: &str) -> String {
    let mut normalized = String::with_capacity(s.len());
    for segment in s.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Collapses runs of markup whitespace (space, tab, CR, LF, FF) to one space
/// without trimming. Used for inline text imported from HTML.
pub fn collapse_markup_whitespace(s: &str) -> String {
    let mut collapsed = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C') {
            if !in_run {
                collapsed.push(' ');
                in_run = true;
            }
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\n b\t c  "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_collapse_markup_whitespace_keeps_edges() {
        assert_eq!(collapse_markup_whitespace("\n  a  b \n"), " a b ");
    }

    #[test]
    fn test_markup_whitespace_leaves_nbsp() {
        assert_eq!(collapse_markup_whitespace("a\u{a0}\u{a0}b"), "a\u{a0}\u{a0}b");
    }
}
