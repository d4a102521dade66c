//! Label normalizer properties

use mythwright_compat::normalize_var_name;
use proptest::prelude::*;

#[test]
fn test_examples() {
    assert_eq!(normalize_var_name("  My   Var  "), "My Var");
    assert_eq!(normalize_var_name("a\tb\nc"), "a b c");
    assert_eq!(normalize_var_name("   "), "");
}

proptest! {
    #[test]
    fn normalized_labels_have_no_irregular_whitespace(label in "\\PC*") {
        let normalized = normalize_var_name(&label);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
        prop_assert!(!normalized.chars().any(|c| c.is_whitespace() && c != ' '));
    }

    #[test]
    fn normalization_is_idempotent(label in "[ \\ta-zA-Z\\n]{0,40}") {
        let once = normalize_var_name(&label);
        prop_assert_eq!(normalize_var_name(&once), once);
    }
}
