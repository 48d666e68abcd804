//! Enrichment Configuration
//!
//! Limits and backend selection for search-field enrichment.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::analyzer::{CustomWord, NaiveAnalyzer, TextAnalyzer};

// ============================================================================
// Limits
// ============================================================================

/// Smallest and largest keyword count a caller may ask for
pub const MIN_KEYWORDS: usize = 1;
pub const MAX_KEYWORDS: usize = 10;
/// Keywords extracted from a hotel name for the index
pub const DEFAULT_KEYWORD_TOP_K: usize = 5;
/// Cap on entities returned per tag
pub const DEFAULT_ENTITY_LIMIT: usize = 20;

// ============================================================================
// Analyzer Selection
// ============================================================================

/// Which analyzer backend to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    /// Segmentation only; everything else degrades to fallbacks
    #[default]
    Naive,
    /// jieba segmentation, tagging and keywords with pinyin/zhconv transliteration
    Jieba,
}

impl AnalyzerKind {
    /// Build the backend. Falls back to the naive analyzer when the
    /// requested backend is not compiled in.
    pub fn build(self) -> Arc<dyn TextAnalyzer> {
        match self {
            Self::Naive => Arc::new(NaiveAnalyzer),
            #[cfg(feature = "jieba")]
            Self::Jieba => Arc::new(super::jieba::JiebaAnalyzer::new()),
            #[cfg(not(feature = "jieba"))]
            Self::Jieba => {
                log::warn!("jieba analyzer requested but not compiled in; using naive analyzer");
                Arc::new(NaiveAnalyzer)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    pub keyword_top_k: usize,
    pub entity_limit: usize,
    pub analyzer: AnalyzerKind,
    /// Words added to the analyzer dictionary at startup
    pub custom_words: Vec<CustomWord>,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            keyword_top_k: DEFAULT_KEYWORD_TOP_K,
            entity_limit: DEFAULT_ENTITY_LIMIT,
            analyzer: AnalyzerKind::default(),
            custom_words: Vec::new(),
        }
    }
}

/// Clamp a requested keyword count into the supported range.
pub fn clamp_top_k(top_k: usize) -> usize {
    top_k.clamp(MIN_KEYWORDS, MAX_KEYWORDS)
}
