//! Property-based tests for index token filtering
//!
//! Tests invariants:
//! - Every surviving token passes `is_valid_token`
//! - No two surviving tokens are equal ignoring case
//! - Filtering an already filtered list changes nothing

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::search::tokens::{filter_valid_tokens, is_valid_token};

/// Fragments mixing Latin, digits, ideographs, symbols and markup names.
fn raw_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9]{0,6}",
        "[-*#{}<> ]{0,3}[a-zA-Z]{1,4}[-*#{}<> ]{0,3}",
        "[北京上海饭店酒店豪华区]{1,4}",
        Just("div".to_string()),
        Just("BR".to_string()),
        Just("- -a".to_string()),
        "\\PC{0,5}",
    ]
}

proptest! {
    #[test]
    fn prop_kept_tokens_are_valid(tokens in prop::collection::vec(raw_token(), 0..20)) {
        for token in filter_valid_tokens(&tokens) {
            prop_assert!(is_valid_token(&token), "invalid token {:?}", token);
        }
    }

    #[test]
    fn prop_no_case_insensitive_duplicates(tokens in prop::collection::vec(raw_token(), 0..20)) {
        let kept = filter_valid_tokens(&tokens);
        let unique: HashSet<String> = kept.iter().map(|t| t.to_lowercase()).collect();
        prop_assert_eq!(unique.len(), kept.len());
    }

    #[test]
    fn prop_filter_is_idempotent(tokens in prop::collection::vec(raw_token(), 0..20)) {
        let once = filter_valid_tokens(&tokens);
        let twice = filter_valid_tokens(&once);
        prop_assert_eq!(twice, once);
    }
}
