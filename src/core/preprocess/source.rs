//! Where spelling rules come from.

use std::path::{Path, PathBuf};

use super::error::{PreprocessError, PreprocessResult};
use super::rules::{default_rules, parse_rules, SpellCheckRule};

/// A reloadable supplier of spelling rules.
pub trait RuleSource: Send + Sync {
    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;

    /// Produce the full rule set. Individual bad entries are skipped, not fatal.
    fn load(&self) -> PreprocessResult<Vec<SpellCheckRule>>;
}

/// Rules read from a line-oriented rule file.
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
    fallback_to_defaults: bool,
}

impl FileRuleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fallback_to_defaults: false,
        }
    }

    /// Serve the built-in rules while the file does not exist.
    pub fn with_default_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_defaults = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RuleSource for FileRuleSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> PreprocessResult<Vec<SpellCheckRule>> {
        if !self.path.exists() {
            if self.fallback_to_defaults {
                log::info!(
                    "Rule file {} missing, using built-in rules",
                    self.path.display()
                );
                return Ok(default_rules());
            }
            return Err(PreprocessError::RulesNotFound(self.path.clone()));
        }

        let text = std::fs::read_to_string(&self.path).map_err(|source| PreprocessError::Io {
            path: self.path.clone(),
            source,
        })?;
        let parsed = parse_rules(&text);
        if !parsed.skipped.is_empty() {
            log::warn!(
                "{} malformed rule lines skipped in {}",
                parsed.skipped.len(),
                self.path.display()
            );
        }
        Ok(parsed.rules)
    }
}

/// Fixed in-memory rules.
#[derive(Debug, Clone, Default)]
pub struct StaticRuleSource {
    rules: Vec<SpellCheckRule>,
}

impl StaticRuleSource {
    pub fn new(rules: Vec<SpellCheckRule>) -> Self {
        Self { rules }
    }

    /// Built-in rule set.
    pub fn defaults() -> Self {
        Self::new(default_rules())
    }
}

impl RuleSource for StaticRuleSource {
    fn describe(&self) -> String {
        format!("{} in-memory rules", self.rules.len())
    }

    fn load(&self) -> PreprocessResult<Vec<SpellCheckRule>> {
        Ok(self.rules.clone())
    }
}
