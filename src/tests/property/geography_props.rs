//! Property-based tests for geography resolution
//!
//! Tests invariants:
//! - Every catalog row resolves by its own code, Chinese and English name
//! - Every declared alias resolves to its row as written, upper-cased and padded
//! - ASCII case and surrounding whitespace never change the result

use proptest::prelude::*;

use crate::core::geography::GeographyResolver;

/// Re-case ASCII letters from a bit mask.
fn recase(text: &str, mask: u64) -> String {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 64)) != 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

#[test]
fn test_every_row_resolves_exactly() {
    let resolver = GeographyResolver::global();
    for entry in resolver.entries() {
        assert_eq!(resolver.resolve_by_code(entry.code).map(|c| c.code), Some(entry.code));
        // SX and XM share a Chinese name; the first row keeps it
        assert_eq!(
            resolver.resolve_by_chinese_name(entry.name_cn).map(|c| c.name_cn),
            Some(entry.name_cn),
            "chinese name {}",
            entry.name_cn
        );
        assert_eq!(
            resolver.resolve_by_english_name(entry.name_en).map(|c| c.code),
            Some(entry.code),
            "english name {}",
            entry.name_en
        );
        assert!(resolver.continent_of(entry).is_some(), "continent of {}", entry.code);
    }
}

#[test]
fn test_every_alias_resolves_to_its_row() {
    let resolver = GeographyResolver::global();
    for entry in resolver.entries() {
        for alias in entry.aliases {
            for query in [alias.to_string(), alias.to_uppercase(), format!(" {} ", alias)] {
                assert_eq!(
                    resolver.resolve_by_english_name(&query).map(|c| c.code),
                    Some(entry.code),
                    "alias {:?} of {}",
                    query,
                    entry.code
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_code_lookup_ignores_case_and_padding(
        index in any::<prop::sample::Index>(),
        mask in any::<u64>(),
        left in padding(),
        right in padding(),
    ) {
        let resolver = GeographyResolver::global();
        let entry = index.get(resolver.entries());
        let query = format!("{}{}{}", left, recase(entry.code, mask), right);
        prop_assert_eq!(resolver.resolve_by_code(&query).map(|c| c.code), Some(entry.code));
    }

    #[test]
    fn prop_english_lookup_ignores_case_and_padding(
        index in any::<prop::sample::Index>(),
        mask in any::<u64>(),
        left in padding(),
        right in padding(),
    ) {
        let resolver = GeographyResolver::global();
        let entry = index.get(resolver.entries());
        let query = format!("{}{}{}", left, recase(entry.name_en, mask), right);
        prop_assert_eq!(
            resolver.resolve_by_english_name(&query).map(|c| c.code),
            Some(entry.code),
            "query {:?}",
            query
        );
    }

    #[test]
    fn prop_chinese_lookup_ignores_padding(
        index in any::<prop::sample::Index>(),
        left in padding(),
        right in padding(),
    ) {
        let resolver = GeographyResolver::global();
        let entry = index.get(resolver.entries());
        let query = format!("{}{}{}", left, entry.name_cn, right);
        prop_assert_eq!(
            resolver.resolve_country(Some(&query), None).map(|c| c.name_cn),
            Some(entry.name_cn)
        );
    }
}
