//! Property-based tests for fuzzy spelling correction
//!
//! Tests invariants:
//! - A four-letter wrong form tolerates exactly one edit
//! - The exact wrong form is always a direct hit

use proptest::prelude::*;

use crate::core::preprocess::{MatchKind, SpellCheckRule, SpellCorrectionEngine, DOMAIN_ALL};

const CORRECTION: &str = "fixed";

fn single_rule_engine(wrong: &str) -> SpellCorrectionEngine {
    SpellCorrectionEngine::with_rules(vec![SpellCheckRule::new("probe", [wrong], [CORRECTION])])
}

fn substitute(word: &str, position: usize, replacement: char) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| if i == position { replacement } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_exact_form_is_direct(word in "[a-z]{4}") {
        let engine = single_rule_engine(&word);
        let correction = engine.correct_with_details(&word, DOMAIN_ALL);
        prop_assert!(correction.is_some());
        let correction = correction.unwrap();
        prop_assert_eq!(correction.kind, MatchKind::Direct);
        prop_assert_eq!(correction.corrected, CORRECTION);
    }

    #[test]
    fn prop_one_substitution_is_corrected(
        word in "[a-z]{4}",
        position in 0usize..4,
        replacement in "[a-z]",
    ) {
        let replacement = replacement.chars().next().unwrap();
        let typo = substitute(&word, position, replacement);
        prop_assume!(typo != word);

        let engine = single_rule_engine(&word);
        let correction = engine.correct_with_details(&typo, DOMAIN_ALL);
        prop_assert!(correction.is_some(), "{:?} not corrected to rule {:?}", typo, word);
        let correction = correction.unwrap();
        prop_assert_eq!(correction.kind, MatchKind::Fuzzy);
        prop_assert_eq!(correction.edit_distance, 1);
        prop_assert_eq!(engine.get_correction(&typo, DOMAIN_ALL), CORRECTION);
    }

    #[test]
    fn prop_two_digit_substitutions_are_not_corrected(
        word in "[a-z]{4}",
        first in 0usize..4,
        offset in 1usize..4,
        digits in "[0-9]{2}",
    ) {
        let second = (first + offset) % 4;
        let mut digits = digits.chars();
        let typo = substitute(&word, first, digits.next().unwrap());
        let typo = substitute(&typo, second, digits.next().unwrap());

        let engine = single_rule_engine(&word);
        prop_assert!(engine.correct_with_details(&typo, DOMAIN_ALL).is_none());
        prop_assert_eq!(engine.get_correction(&typo, DOMAIN_ALL), typo);
    }
}
