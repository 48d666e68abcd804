//! Spelling-correction configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths;

/// Upper bound on the fuzzy edit-distance threshold.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellCheckConfig {
    /// Explicit rule file; when unset the usual locations are searched.
    pub rules_path: Option<PathBuf>,
    /// Serve the built-in rules when no rule file exists.
    pub use_default_rules: bool,
    /// Cap for `len(wrong_form) / 3` when matching fuzzily.
    pub max_distance_cap: usize,
}

impl Default for SpellCheckConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            use_default_rules: true,
            max_distance_cap: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl SpellCheckConfig {
    /// Configured rule file, or the first existing default location.
    pub fn resolve_rules_path(&self) -> Option<PathBuf> {
        self.rules_path
            .clone()
            .or_else(|| paths::get_rules_path(None))
    }

    /// Fuzzy threshold for a wrong form of `len` characters.
    pub fn max_distance_for(&self, len: usize) -> usize {
        let cap = self.max_distance_cap.max(1);
        (len / 3).clamp(1, cap)
    }
}
