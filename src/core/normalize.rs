//! Alias Normalization
//!
//! Reduces free-form geographic names and spelling-rule keys to a compact
//! comparison key: lowercase, diacritics stripped, separators removed and a
//! small set of filler words elided.

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Filler words dropped from country names ("Republic of Korea" -> "korea").
pub const DEFAULT_COUNTRY_STOPWORDS: &[&str] =
    &["the", "and", "of", "republic", "federation", "state"];

/// Filler words dropped from continent names.
pub const DEFAULT_CONTINENT_STOPWORDS: &[&str] = &["the", "and"];

/// Apostrophes are elided rather than treated as word breaks.
const APOSTROPHES: &[char] = &['\'', '\u{2019}', '\u{2018}', '`', '\u{00B4}'];

/// Pure text normalizer used to build and query alias indexes.
#[derive(Debug, Clone)]
pub struct AliasNormalizer {
    stopwords: HashSet<String>,
}

impl AliasNormalizer {
    /// Create a normalizer with the given stopwords.
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Normalizer preset for country names.
    pub fn country() -> Self {
        Self::new(DEFAULT_COUNTRY_STOPWORDS)
    }

    /// Normalizer preset for continent names.
    pub fn continent() -> Self {
        Self::new(DEFAULT_CONTINENT_STOPWORDS)
    }

    /// Normalizer that elides nothing.
    pub fn plain() -> Self {
        Self::new(std::iter::empty::<&str>())
    }

    pub fn stopwords(&self) -> impl Iterator<Item = &str> {
        self.stopwords.iter().map(String::as_str)
    }

    /// Normalize `text` into a comparison key.
    ///
    /// `normalize(normalize(x)) == normalize(x)` for every input.
    pub fn normalize(&self, text: &str) -> String {
        let mut key = self.normalize_once(text);
        // Case mapping can surface new decompositions; settle on a fixed point.
        for _ in 0..3 {
            let next = self.normalize_once(&key);
            if next == key {
                break;
            }
            key = next;
        }
        key
    }

    fn normalize_once(&self, text: &str) -> String {
        let folded: String = text
            .to_lowercase()
            .nfd()
            .filter(|c| !is_combining_mark(*c) && !APOSTROPHES.contains(c))
            .collect();

        let key: String = folded
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty() && !self.stopwords.contains(*word))
            .collect();

        if self.stopwords.contains(&key) {
            String::new()
        } else {
            key
        }
    }
}

impl Default for AliasNormalizer {
    fn default() -> Self {
        Self::country()
    }
}

/// Normalize with the country preset.
pub fn normalize_alias(text: &str) -> String {
    AliasNormalizer::country().normalize(text)
}
