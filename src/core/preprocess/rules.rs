//! Spelling Rules
//!
//! Rule model, the line-oriented rule file format and the built-in rule set.
//!
//! Rule file lines look like
//!
//! ```text
//! geo.beijing = 北亰,北平 | 北京 | 9 | ALL | Beijing misspellings
//! 希尔敦 -> 希尔顿 | 7
//! ```
//!
//! Weight, domain and description are optional. `#` and `!` start comments.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::error::{PreprocessError, PreprocessResult};

/// Domain that applies to every lookup.
pub const DOMAIN_ALL: &str = "ALL";
pub const DEFAULT_WEIGHT: i32 = 5;
pub const MIN_WEIGHT: i32 = 1;
pub const MAX_WEIGHT: i32 = 10;

/// Characters removed before matching, besides whitespace.
const STRIPPED_PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '“', '”', '‘', '’', '（', '）', '【', '】', '、', ',', '.',
    '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']',
];

/// One weighted correction rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCheckRule {
    pub id: String,
    pub wrong_forms: IndexSet<String>,
    pub correct_forms: Vec<String>,
    #[serde(default = "default_weight")]
    pub weight: i32,
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

fn default_weight() -> i32 {
    DEFAULT_WEIGHT
}

fn default_domain() -> String {
    DOMAIN_ALL.to_string()
}

impl SpellCheckRule {
    pub fn new<W, C>(id: impl Into<String>, wrong_forms: W, correct_forms: C) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            id: id.into(),
            wrong_forms: clean_forms(wrong_forms).into_iter().collect(),
            correct_forms: clean_forms(correct_forms),
            weight: DEFAULT_WEIGHT,
            domain: default_domain(),
            description: String::new(),
            usage_count: 0,
            last_used: None,
        }
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_domain(mut self, domain: impl AsRef<str>) -> Self {
        self.domain = normalize_domain(domain.as_ref());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// First correct form; the one every match resolves to.
    pub fn primary_correction(&self) -> Option<&str> {
        self.correct_forms.first().map(String::as_str)
    }

    /// Whether this rule is consulted for `domain`.
    pub fn applies_to(&self, domain: &str) -> bool {
        self.domain == DOMAIN_ALL || self.domain.eq_ignore_ascii_case(domain.trim())
    }

    pub fn validate(&self) -> PreprocessResult<()> {
        let invalid = |reason: &str| PreprocessError::InvalidRule {
            id: self.id.clone(),
            reason: reason.to_string(),
        };
        if self.id.trim().is_empty() {
            return Err(invalid("empty id"));
        }
        if self.wrong_forms.iter().all(|w| normalize_spelling(w).is_empty()) {
            return Err(invalid("no wrong forms"));
        }
        if self.correct_forms.iter().all(|c| c.trim().is_empty()) {
            return Err(invalid("no correct forms"));
        }
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&self.weight) {
            return Err(invalid(&format!(
                "weight {} outside {}..={}",
                self.weight, MIN_WEIGHT, MAX_WEIGHT
            )));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Matching key: case-folded, whitespace and punctuation removed.
pub fn normalize_spelling(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim();
    if domain.is_empty() {
        default_domain()
    } else {
        domain.to_uppercase()
    }
}

fn clean_forms<I>(forms: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for form in forms {
        let form = form.as_ref().trim();
        if !form.is_empty() && !out.iter().any(|f| f == form) {
            out.push(form.to_string());
        }
    }
    out
}

fn split_forms(list: &str) -> Vec<String> {
    clean_forms(list.split([',', '，']))
}

// ============================================================================
// Rule File Parsing
// ============================================================================

/// A rule line that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: String,
}

/// Outcome of parsing a rule file.
#[derive(Debug, Default)]
pub struct ParsedRules {
    pub rules: Vec<SpellCheckRule>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a single line. Comments and blank lines yield `Ok(None)`.
pub fn parse_rule_line(line: &str) -> Result<Option<SpellCheckRule>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return Ok(None);
    }

    let (key, body) = match line.split_once('=') {
        Some((key, body)) if !key.contains('|') && !key.contains("->") => {
            (Some(key.trim()), body.trim())
        }
        _ => (None, line),
    };

    let (wrong, correct, rest) = if let Some((wrong, tail)) = body.split_once("->") {
        let mut parts = tail.splitn(4, '|');
        let correct = parts.next().unwrap_or_default();
        (wrong, correct, parts.collect::<Vec<_>>())
    } else {
        let mut parts = body.splitn(5, '|');
        let wrong = parts.next().unwrap_or_default();
        let correct = parts
            .next()
            .ok_or_else(|| "expected 'wrong | correct'".to_string())?;
        (wrong, correct, parts.collect::<Vec<_>>())
    };

    let wrong_forms = split_forms(wrong);
    let correct_forms = split_forms(correct);

    let weight = match rest.first().map(|w| w.trim()) {
        None | Some("") => DEFAULT_WEIGHT,
        Some(w) => w
            .parse::<i32>()
            .map_err(|_| format!("weight '{}' is not a number", w))?,
    };
    let domain = rest.get(1).map(|d| normalize_domain(d)).unwrap_or_else(default_domain);
    let description = rest.get(2).map(|d| d.trim().to_string()).unwrap_or_default();

    let id = match key {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => wrong_forms.join(","),
    };

    let rule = SpellCheckRule::new(id, wrong_forms, correct_forms)
        .with_weight(weight)
        .with_domain(domain)
        .with_description(description);
    rule.validate().map_err(|e| e.to_string())?;
    Ok(Some(rule))
}

/// Parse a whole rule file, skipping and logging bad lines.
pub fn parse_rules(text: &str) -> ParsedRules {
    let mut parsed = ParsedRules::default();
    for (idx, line) in text.lines().enumerate() {
        match parse_rule_line(line) {
            Ok(Some(rule)) => parsed.rules.push(rule),
            Ok(None) => {}
            Err(reason) => {
                log::warn!("Skipping spelling rule on line {}: {}", idx + 1, reason);
                parsed.skipped.push(SkippedLine {
                    line: idx + 1,
                    reason,
                });
            }
        }
    }
    parsed
}

// ============================================================================
// Built-in Rules
// ============================================================================

const DEFAULT_RULES: &[(&str, &[&str], &[&str], i32, &str, &str)] = &[
    ("geo.beijing", &["北亰", "北平"], &["北京"], 9, "ALL", "Beijing misspellings and former name"),
    ("geo.shenzhen", &["深坳", "深壕"], &["深圳"], 8, "CN", "Shenzhen misspellings"),
    ("airport.pek", &["首都机场", "PEK"], &["北京首都国际机场"], 8, "ALL", "Beijing Capital airport"),
    ("airport.pvg", &["浦东机场", "PVG"], &["上海浦东国际机场"], 8, "ALL", "Shanghai Pudong airport"),
    ("brand.hilton", &["希尔敦", "Hilton Hotel"], &["希尔顿"], 7, "ALL", "Hilton brand"),
    ("brand.marriott", &["万豪酒店", "Marriott Hotel"], &["万豪"], 7, "ALL", "Marriott brand"),
    ("brand.intercontinental", &["洲际酒店", "InterContinental Hotel"], &["洲际"], 7, "ALL", "InterContinental brand"),
];

/// Rules served when no rule file is available.
pub fn default_rules() -> Vec<SpellCheckRule> {
    DEFAULT_RULES
        .iter()
        .map(|(id, wrong, correct, weight, domain, description)| {
            SpellCheckRule::new(*id, wrong.iter(), correct.iter())
                .with_weight(*weight)
                .with_domain(domain)
                .with_description(*description)
        })
        .collect()
}
