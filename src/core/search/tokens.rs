//! Token Cleaning
//!
//! Filters raw fragments before they reach an index field: symbol stripping,
//! hyphen cleanup, markup-tag and noise rejection, case-insensitive dedup.

use std::collections::HashSet;

/// Tag names left behind when markup is stripped from provider text.
const MARKUP_TAGS: &[&str] = &[
    "br", "p", "div", "span", "a", "img", "b", "i", "u", "strong", "em", "h1", "h2", "h3", "h4",
    "h5", "h6", "ul", "ol", "li", "table", "tr", "td", "th", "thead", "tbody", "tfoot", "form",
    "input", "button", "select", "option", "header", "footer", "nav", "section", "article",
    "script", "style", "link", "meta",
];

/// CJK ideographs including the supplementary extension blocks.
pub fn is_chinese(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FA5
        | 0x3400..=0x4DBF
        | 0x20000..=0x2A6DF
        | 0x2A700..=0x2B73F
        | 0x2B740..=0x2B81F
        | 0x2B820..=0x2CEAF
        | 0xF900..=0xFAFF
        | 0x2F800..=0x2FA1F)
}

pub fn is_markup_tag(token: &str) -> bool {
    let lower = token.to_lowercase();
    MARKUP_TAGS.contains(&lower.as_str())
}

/// Trim leading and trailing hyphens and collapse hyphen runs.
pub fn clean_hyphens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_hyphen = false;
    for c in text.trim_matches('-').chars() {
        if c == '-' {
            if !previous_hyphen {
                out.push(c);
            }
            previous_hyphen = true;
        } else {
            out.push(c);
            previous_hyphen = false;
        }
    }
    out
}

/// Strip everything but letters, digits, CJK, spaces and hyphens.
///
/// Returns `None` when nothing meaningful is left.
pub fn clean_token(token: &str) -> Option<String> {
    let kept: String = token
        .chars()
        .filter(|&c| c.is_alphanumeric() || is_chinese(c) || c == ' ' || c == '-')
        .collect();
    // Edges are trimmed together so "- -a" settles on "a" in one pass.
    let kept = kept.trim_matches(|c| c == ' ' || c == '-');
    if kept.is_empty() {
        return None;
    }
    Some(clean_hyphens(kept))
}

/// Accept tokens that carry a letter or ideograph and are not markup or noise.
pub fn is_valid_token(token: &str) -> bool {
    if token.is_empty() || is_markup_tag(token) {
        return false;
    }
    if !token.chars().any(|c| c.is_alphabetic() || is_chinese(c)) {
        return false;
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(only), None) => is_chinese(only),
        _ => true,
    }
}

/// Clean, validate and deduplicate (case-insensitively, first casing kept).
pub fn filter_valid_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        let Some(cleaned) = clean_token(token) else {
            continue;
        };
        if is_valid_token(&cleaned) && seen.insert(cleaned.to_lowercase()) {
            out.push(cleaned);
        }
    }
    out
}
