//! Search Enrichment
//!
//! Index-field derivation and query analysis on top of a pluggable text
//! analyzer.

pub mod analyzer;
pub mod config;
pub mod enrichment;
#[cfg(feature = "jieba")]
pub mod jieba;
pub mod tokens;

pub use analyzer::{
    simple_split, AnalyzerError, CustomWord, NaiveAnalyzer, OffsetToken, TaggedTerm, TextAnalyzer,
};
pub use config::{AnalyzerKind, EnrichmentConfig};
pub use enrichment::{
    normalize_text, token_kind, EnrichedSearchFields, HotelEntities, QueryAnalysis,
    SearchEnrichmentEngine, TokenKind,
};
pub use tokens::filter_valid_tokens;
