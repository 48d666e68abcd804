//! Text Analyzer Capability
//!
//! Segmentation, part-of-speech tagging, keyword extraction and
//! transliteration are delegated to a [`TextAnalyzer`] backend. The
//! enrichment engine treats every backend call as fallible and substitutes
//! a naive result when one fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("{0} is not supported by this analyzer")]
    Unsupported(&'static str),

    #[error("Analyzer backend failed: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

// ============================================================================
// Analyzer Output Types
// ============================================================================

/// Part-of-speech tags the enrichment engine filters on.
pub mod tags {
    pub const PLACE: &str = "ns";
    pub const ORGANIZATION: &str = "nt";
    pub const OTHER_PROPER_NOUN: &str = "nz";
    pub const PERSON: &str = "nr";
    pub const BRAND: &str = "nb";
    pub const PUNCTUATION: &str = "w";
    pub const URL: &str = "ws";
    pub const TIME: &str = "wt";
}

/// A word with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedTerm {
    pub word: String,
    pub tag: String,
}

impl TaggedTerm {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// A token with character offsets into the analyzed text.
///
/// Offsets are `None` when the token came from the naive fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetToken {
    pub token: String,
    pub begin: Option<usize>,
    pub end: Option<usize>,
}

impl OffsetToken {
    pub fn new(token: impl Into<String>, begin: usize, end: usize) -> Self {
        Self {
            token: token.into(),
            begin: Some(begin),
            end: Some(end),
        }
    }

    pub fn unanchored(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            begin: None,
            end: None,
        }
    }
}

/// A runtime dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWord {
    pub word: String,
    /// Part-of-speech tag, e.g. "nb" for a brand
    #[serde(default)]
    pub tag: Option<String>,
    /// Dictionary frequency; the backend suggests one when absent
    #[serde(default)]
    pub freq: Option<usize>,
}

impl CustomWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().trim().to_string(),
            tag: None,
            freq: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_freq(mut self, freq: usize) -> Self {
        self.freq = Some(freq);
        self
    }
}

// ============================================================================
// Analyzer Trait
// ============================================================================

/// External Chinese/English text analysis capability.
pub trait TextAnalyzer: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Fine-grained word segmentation
    fn segment(&self, text: &str) -> Result<Vec<String>>;

    /// Search-mode segmentation with character offsets
    fn index_segment(&self, text: &str) -> Result<Vec<OffsetToken>>;

    /// Segmentation with part-of-speech tags
    fn tag(&self, text: &str) -> Result<Vec<TaggedTerm>>;

    /// Top keywords, most relevant first
    fn keywords(&self, text: &str, top_k: usize) -> Result<Vec<String>>;

    /// Full pinyin, one entry per syllable or non-Chinese word
    fn to_pinyin(&self, text: &str) -> Result<Vec<String>>;

    /// Pinyin initials, one letter per Chinese character
    fn to_pinyin_initials(&self, text: &str) -> Result<String>;

    fn to_traditional(&self, text: &str) -> Result<String>;

    fn to_simplified(&self, text: &str) -> Result<String>;

    /// Add or update a word in the runtime dictionary
    fn add_custom_word(&self, _word: &CustomWord) -> Result<()> {
        Err(AnalyzerError::Unsupported("custom dictionary"))
    }

    /// Remove a runtime word; `Ok(false)` when it was never added
    fn remove_custom_word(&self, _word: &str) -> Result<bool> {
        Err(AnalyzerError::Unsupported("custom dictionary"))
    }
}

// ============================================================================
// Naive Backend
// ============================================================================

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\u{4e00}-\u{9fa5}A-Za-z0-9]+").expect("valid split pattern"));

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{4e00}-\u{9fa5}A-Za-z0-9]+").expect("valid word pattern"));

/// Split on runs of characters outside common CJK, ASCII letters and digits.
pub fn simple_split(text: &str) -> Vec<String> {
    NON_WORD
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Always-available backend that only segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveAnalyzer;

impl TextAnalyzer for NaiveAnalyzer {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(simple_split(text))
    }

    fn index_segment(&self, text: &str) -> Result<Vec<OffsetToken>> {
        let tokens = WORD
            .find_iter(text)
            .map(|m| {
                let begin = text[..m.start()].chars().count();
                let end = begin + m.as_str().chars().count();
                OffsetToken::new(m.as_str(), begin, end)
            })
            .collect();
        Ok(tokens)
    }

    fn tag(&self, _text: &str) -> Result<Vec<TaggedTerm>> {
        Err(AnalyzerError::Unsupported("part-of-speech tagging"))
    }

    fn keywords(&self, _text: &str, _top_k: usize) -> Result<Vec<String>> {
        Err(AnalyzerError::Unsupported("keyword extraction"))
    }

    fn to_pinyin(&self, _text: &str) -> Result<Vec<String>> {
        Err(AnalyzerError::Unsupported("pinyin"))
    }

    fn to_pinyin_initials(&self, _text: &str) -> Result<String> {
        Err(AnalyzerError::Unsupported("pinyin initials"))
    }

    fn to_traditional(&self, _text: &str) -> Result<String> {
        Err(AnalyzerError::Unsupported("traditional conversion"))
    }

    fn to_simplified(&self, _text: &str) -> Result<String> {
        Err(AnalyzerError::Unsupported("simplified conversion"))
    }
}
