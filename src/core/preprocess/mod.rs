//! Text Preprocessing
//!
//! Spelling correction applied to indexed text and user queries before
//! segmentation.

pub mod config;
pub mod error;
pub mod paths;
pub mod rules;
pub mod source;
pub mod spellcheck;

pub use config::SpellCheckConfig;
pub use error::{PreprocessError, PreprocessResult};
pub use rules::{default_rules, normalize_spelling, SpellCheckRule, DOMAIN_ALL};
pub use source::{FileRuleSource, RuleSource, StaticRuleSource};
pub use spellcheck::{Correction, MatchKind, SpellCheckStatistics, SpellCorrectionEngine};
