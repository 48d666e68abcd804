//! Property-based tests for alias normalization
//!
//! Tests invariants:
//! - `normalize(normalize(x)) == normalize(x)`
//! - Output holds alphanumeric characters only
//! - Case and separators never change the key

use proptest::prelude::*;

use crate::core::normalize::AliasNormalizer;

/// Latin text with accents, apostrophes and the usual separators.
fn alias_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,'()&éèêüöçñáíóúÅØ-]{0,40}"
}

proptest! {
    #[test]
    fn prop_country_normalize_is_idempotent(text in alias_text()) {
        let normalizer = AliasNormalizer::country();
        let once = normalizer.normalize(&text);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn prop_continent_normalize_is_idempotent(text in alias_text()) {
        let normalizer = AliasNormalizer::continent();
        let once = normalizer.normalize(&text);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn prop_output_is_alphanumeric(text in "\\PC{0,40}") {
        let key = AliasNormalizer::country().normalize(&text);
        prop_assert!(key.chars().all(char::is_alphanumeric), "key {:?}", key);
    }

    #[test]
    fn prop_case_and_separators_do_not_matter(words in prop::collection::vec("[a-z]{1,8}", 1..4)) {
        let normalizer = AliasNormalizer::plain();
        let spaced = words.join(" ");
        let dashed = words.join("-").to_uppercase();
        prop_assert_eq!(normalizer.normalize(&spaced), normalizer.normalize(&dashed));
    }
}
