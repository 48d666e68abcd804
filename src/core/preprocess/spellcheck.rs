//! Spelling Correction Engine
//!
//! Weighted, domain-scoped correction of whole input strings against a
//! reloadable rule set. Lookup is a direct hit on the flattened wrong-form
//! index first, then a fuzzy scan in weight order.
//!
//! The rule set lives behind one `RwLock` as an immutable snapshot. Readers
//! clone the `Arc` and release the lock immediately; writers build the next
//! snapshot and swap it in. Rule files are read before the write lock is
//! taken.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use super::config::SpellCheckConfig;
use super::error::PreprocessResult;
use super::rules::{normalize_domain, normalize_spelling, SpellCheckRule};
use super::source::{FileRuleSource, RuleSource, StaticRuleSource};

/// How an input matched a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Direct,
    Fuzzy,
}

/// A correction applied to an input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    /// Input as given
    pub original: String,
    /// Replacement text
    pub corrected: String,
    pub rule_id: String,
    pub kind: MatchKind,
    /// Edit distance between the normalized input and the matched wrong form
    pub edit_distance: usize,
}

/// Snapshot of engine state for monitoring.
#[derive(Debug, Clone, Serialize)]
pub struct SpellCheckStatistics {
    pub total_rules: usize,
    pub direct_mappings: usize,
    /// Rule count per business domain
    pub business_domains: BTreeMap<String, usize>,
    /// Successful corrections per rule id
    pub usage: IndexMap<String, u64>,
    pub corrections_served: u64,
}

// ============================================================================
// Rule Snapshot
// ============================================================================

#[derive(Debug, Default)]
struct RuleUsage {
    count: AtomicU64,
    /// Milliseconds since the epoch, 0 when never used
    last_used_ms: AtomicI64,
}

impl RuleUsage {
    fn seeded(rule: &SpellCheckRule) -> Self {
        Self {
            count: AtomicU64::new(rule.usage_count),
            last_used_ms: AtomicI64::new(rule.last_used.map_or(0, |t| t.timestamp_millis())),
        }
    }

    fn record(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.last_used_ms
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }

    fn last_used(&self) -> Option<DateTime<Utc>> {
        match self.last_used_ms.load(Ordering::Relaxed) {
            0 => None,
            ms => Utc.timestamp_millis_opt(ms).single(),
        }
    }
}

#[derive(Debug)]
struct RuleEntry {
    rule: SpellCheckRule,
    /// Normalized wrong forms with their length in characters
    keys: Vec<(String, usize)>,
    usage: Arc<RuleUsage>,
}

impl RuleEntry {
    fn new(rule: SpellCheckRule, usage: Option<Arc<RuleUsage>>) -> Self {
        let keys = rule
            .wrong_forms
            .iter()
            .map(|w| normalize_spelling(w))
            .filter(|k| !k.is_empty())
            .map(|k| {
                let len = k.chars().count();
                (k, len)
            })
            .collect();
        let usage = usage.unwrap_or_else(|| Arc::new(RuleUsage::seeded(&rule)));
        Self { rule, keys, usage }
    }

    /// Rule with its live counters folded in.
    fn snapshot(&self) -> SpellCheckRule {
        let mut rule = self.rule.clone();
        rule.usage_count = self.usage.count.load(Ordering::Relaxed);
        rule.last_used = self.usage.last_used();
        rule
    }
}

#[derive(Debug, Default)]
struct RuleSet {
    entries: IndexMap<String, RuleEntry>,
    /// Normalized wrong form -> entry index
    direct: HashMap<String, usize>,
    /// Entry indexes by weight, heaviest first
    by_weight: Vec<usize>,
}

impl RuleSet {
    fn build(entries: IndexMap<String, RuleEntry>) -> Self {
        let mut by_weight: Vec<usize> = (0..entries.len()).collect();
        by_weight.sort_by_key(|&idx| std::cmp::Reverse(entries[idx].rule.weight));

        let mut direct = HashMap::new();
        for &idx in &by_weight {
            for (key, _) in &entries[idx].keys {
                direct.entry(key.clone()).or_insert(idx);
            }
        }

        Self {
            entries,
            direct,
            by_weight,
        }
    }

    fn from_rules(rules: Vec<SpellCheckRule>, previous: Option<&RuleSet>) -> Self {
        let mut entries = IndexMap::with_capacity(rules.len());
        for rule in rules {
            if let Err(e) = rule.validate() {
                log::warn!("Dropping spelling rule: {}", e);
                continue;
            }
            let usage = previous
                .and_then(|p| p.entries.get(&rule.id))
                .map(|e| Arc::clone(&e.usage));
            entries.insert(rule.id.clone(), RuleEntry::new(rule, usage));
        }
        Self::build(entries)
    }

    /// Copy of the entries, sharing usage counters.
    fn cloned_entries(&self) -> IndexMap<String, RuleEntry> {
        self.entries
            .iter()
            .map(|(id, e)| {
                (
                    id.clone(),
                    RuleEntry {
                        rule: e.rule.clone(),
                        keys: e.keys.clone(),
                        usage: Arc::clone(&e.usage),
                    },
                )
            })
            .collect()
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Hot-reloadable weighted spelling correction.
pub struct SpellCorrectionEngine {
    rules: RwLock<Arc<RuleSet>>,
    source: Box<dyn RuleSource>,
    config: SpellCheckConfig,
    corrections_served: AtomicU64,
}

impl std::fmt::Debug for SpellCorrectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellCorrectionEngine")
            .field("source", &self.source.describe())
            .field("rules", &self.len())
            .finish()
    }
}

impl SpellCorrectionEngine {
    /// Create an engine and load its rules. A failed load starts empty.
    pub fn new(source: Box<dyn RuleSource>, config: SpellCheckConfig) -> Self {
        let engine = Self {
            rules: RwLock::new(Arc::new(RuleSet::default())),
            source,
            config,
            corrections_served: AtomicU64::new(0),
        };
        if let Err(e) = engine.reload() {
            log::warn!(
                "Spelling rules unavailable from {}: {}",
                engine.source.describe(),
                e
            );
        }
        engine
    }

    /// Engine backed by the configured or discovered rule file.
    pub fn from_config(config: SpellCheckConfig) -> Self {
        let source: Box<dyn RuleSource> = match config.resolve_rules_path() {
            Some(path) => {
                Box::new(FileRuleSource::new(path).with_default_fallback(config.use_default_rules))
            }
            None if config.use_default_rules => Box::new(StaticRuleSource::defaults()),
            None => Box::new(StaticRuleSource::default()),
        };
        Self::new(source, config)
    }

    pub fn with_rules(rules: Vec<SpellCheckRule>) -> Self {
        Self::new(
            Box::new(StaticRuleSource::new(rules)),
            SpellCheckConfig::default(),
        )
    }

    pub fn with_default_rules() -> Self {
        Self::new(
            Box::new(StaticRuleSource::defaults()),
            SpellCheckConfig::default(),
        )
    }

    pub fn empty() -> Self {
        Self::with_rules(Vec::new())
    }

    fn snapshot(&self) -> Arc<RuleSet> {
        Arc::clone(&self.rules.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn replace<F>(&self, next: F)
    where
        F: FnOnce(&RuleSet) -> RuleSet,
    {
        let mut guard = self.rules.write().unwrap_or_else(PoisonError::into_inner);
        let rebuilt = next(&guard);
        *guard = Arc::new(rebuilt);
    }

    pub fn len(&self) -> usize {
        self.snapshot().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Corrected text for `text`, or `text` unchanged when nothing matches.
    pub fn get_correction(&self, text: &str, domain: &str) -> String {
        self.correct_with_details(text, domain)
            .map(|c| c.corrected)
            .unwrap_or_else(|| text.to_string())
    }

    /// Look up a correction with match details.
    pub fn correct_with_details(&self, text: &str, domain: &str) -> Option<Correction> {
        let normalized = normalize_spelling(text);
        if normalized.is_empty() {
            return None;
        }
        let rules = self.snapshot();

        let hit = rules
            .direct
            .get(&normalized)
            .map(|&idx| (idx, MatchKind::Direct, 0))
            .or_else(|| self.fuzzy_match(&rules, &normalized, domain));

        let (idx, kind, edit_distance) = hit?;
        let (_, entry) = rules.entries.get_index(idx)?;
        let corrected = entry.rule.primary_correction()?.to_string();

        entry.usage.record();
        self.corrections_served.fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "Spelling correction '{}' -> '{}' via {} ({:?}, distance {})",
            text,
            corrected,
            entry.rule.id,
            kind,
            edit_distance
        );

        Some(Correction {
            original: text.to_string(),
            corrected,
            rule_id: entry.rule.id.clone(),
            kind,
            edit_distance,
        })
    }

    fn fuzzy_match(
        &self,
        rules: &RuleSet,
        normalized: &str,
        domain: &str,
    ) -> Option<(usize, MatchKind, usize)> {
        let domain = normalize_domain(domain);
        let input_len = normalized.chars().count();

        for &idx in &rules.by_weight {
            let entry = &rules.entries[idx];
            if !entry.rule.applies_to(&domain) {
                continue;
            }
            for (key, len) in &entry.keys {
                let threshold = self.config.max_distance_for(*len);
                // Length difference is a lower bound on edit distance.
                if input_len.abs_diff(*len) > threshold {
                    continue;
                }
                let distance = strsim::levenshtein(normalized, key);
                if distance <= threshold {
                    return Some((idx, MatchKind::Fuzzy, distance));
                }
            }
        }
        None
    }

    // ========================================================================
    // Administration
    // ========================================================================

    /// Add or replace a rule by id.
    pub fn add_rule(&self, rule: SpellCheckRule) -> PreprocessResult<()> {
        rule.validate()?;
        log::info!("Adding spelling rule {}", rule.id);
        self.replace(|current| {
            let mut entries = current.cloned_entries();
            let usage = entries.get(&rule.id).map(|e| Arc::clone(&e.usage));
            entries.insert(rule.id.clone(), RuleEntry::new(rule, usage));
            RuleSet::build(entries)
        });
        Ok(())
    }

    /// Remove a rule; returns whether it existed.
    pub fn remove_rule(&self, id: &str) -> bool {
        let mut removed = false;
        self.replace(|current| {
            let mut entries = current.cloned_entries();
            removed = entries.shift_remove(id).is_some();
            RuleSet::build(entries)
        });
        if removed {
            log::info!("Removed spelling rule {}", id);
        }
        removed
    }

    /// Re-read the rule source and swap in the new rule set.
    ///
    /// On failure the current rules stay in place.
    pub fn reload(&self) -> PreprocessResult<usize> {
        let rules = self.source.load()?;
        let mut count = 0;
        self.replace(|current| {
            let next = RuleSet::from_rules(rules, Some(current));
            count = next.entries.len();
            next
        });
        log::info!(
            "Loaded {} spelling rules from {}",
            count,
            self.source.describe()
        );
        Ok(count)
    }

    /// Current rules with usage counters.
    pub fn rules(&self) -> Vec<SpellCheckRule> {
        self.snapshot()
            .entries
            .values()
            .map(RuleEntry::snapshot)
            .collect()
    }

    /// Rules stored under exactly `domain`. `ALL` rules are not included
    /// for other domains.
    pub fn rules_for_domain(&self, domain: &str) -> Vec<SpellCheckRule> {
        let domain = normalize_domain(domain);
        self.snapshot()
            .entries
            .values()
            .filter(|entry| entry.rule.domain == domain)
            .map(RuleEntry::snapshot)
            .collect()
    }

    /// Serialize all rules as a JSON array.
    pub fn export_rules(&self) -> PreprocessResult<String> {
        Ok(serde_json::to_string_pretty(&self.rules())?)
    }

    /// Add every valid rule from a JSON array; returns how many were added.
    pub fn import_rules(&self, payload: &str) -> PreprocessResult<usize> {
        let incoming: Vec<SpellCheckRule> = serde_json::from_str(payload)?;
        let mut imported = 0;
        self.replace(|current| {
            let mut entries = current.cloned_entries();
            for rule in incoming {
                if let Err(e) = rule.validate() {
                    log::warn!("Skipping imported rule: {}", e);
                    continue;
                }
                let usage = entries.get(&rule.id).map(|e| Arc::clone(&e.usage));
                entries.insert(rule.id.clone(), RuleEntry::new(rule, usage));
                imported += 1;
            }
            RuleSet::build(entries)
        });
        log::info!("Imported {} spelling rules", imported);
        Ok(imported)
    }

    pub fn statistics(&self) -> SpellCheckStatistics {
        let rules = self.snapshot();
        let mut business_domains = BTreeMap::new();
        let mut usage = IndexMap::with_capacity(rules.entries.len());
        for (id, entry) in &rules.entries {
            *business_domains.entry(entry.rule.domain.clone()).or_insert(0) += 1;
            usage.insert(id.clone(), entry.usage.count.load(Ordering::Relaxed));
        }
        SpellCheckStatistics {
            total_rules: rules.entries.len(),
            direct_mappings: rules.direct.len(),
            business_domains,
            usage,
            corrections_served: self.corrections_served.load(Ordering::Relaxed),
        }
    }
}

impl Default for SpellCorrectionEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
