//! Search Enrichment
//!
//! Derives index fields from a normalized hotel record and analyzes user
//! queries. Every public method is total: analyzer failures are logged at
//! debug level and replaced with a naive result.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::analyzer::{
    simple_split, tags, CustomWord, NaiveAnalyzer, OffsetToken, TaggedTerm, TextAnalyzer,
};
use super::config::{clamp_top_k, EnrichmentConfig};
use super::tokens::filter_valid_tokens;
use crate::core::language::{contains_cjk, BilingualField};
use crate::core::preprocess::{Correction, SpellCorrectionEngine, DOMAIN_ALL};
use crate::core::record::{BusinessDomain, NormalizedHotelRecord};

// ============================================================================
// Domain Vocabulary
// ============================================================================

static NUMBER_WITH_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\s*(星级?|级|公里|米|km|m|分钟|小时)$").expect("valid number-unit pattern")
});

/// Substrings marking a hotel brand or lodging type.
const BRAND_MARKERS: &[&str] = &[
    "酒店", "宾馆", "饭店", "度假村", "希尔顿", "万豪", "洲际", "凯悦", "香格里拉", "四季", "喜来登",
    "威斯汀", "瑞吉", "假日", "民宿", "快捷", "连锁", "旅馆", "客栈",
];

/// Suffixes and words marking a place.
const LOCATION_MARKERS: &[&str] = &[
    "市", "区", "县", "省", "路", "街", "大道", "广场", "中心", "站", "机场", "码头", "公园", "景区",
    "景点", "商圈", "步行街", "夜市", "地标", "地铁",
];

/// Verbs too common to carry meaning in a hotel text.
const STOP_VERBS: &[&str] = &["是", "有", "在"];

/// Tags never kept as domain tokens.
const NOISE_TAGS: &[&str] = &[tags::PUNCTUATION, tags::URL, tags::TIME, tags::OTHER_PROPER_NOUN];

/// Coarse class of a segmented word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// "5星级", "3公里"
    NumberWithUnit,
    Brand,
    Location,
    Plain,
}

pub fn token_kind(word: &str) -> TokenKind {
    if NUMBER_WITH_UNIT.is_match(word) {
        TokenKind::NumberWithUnit
    } else if BRAND_MARKERS.iter().any(|m| word.contains(m)) {
        TokenKind::Brand
    } else if LOCATION_MARKERS.iter().any(|m| word.contains(m)) {
        TokenKind::Location
    } else {
        TokenKind::Plain
    }
}

fn is_brand_term(term: &TaggedTerm) -> bool {
    term.tag == tags::BRAND
        || ((term.tag == tags::ORGANIZATION || term.tag == tags::OTHER_PROPER_NOUN)
            && token_kind(&term.word) == TokenKind::Brand)
}

/// Nouns without digits and longer than one character, verbs other than
/// the stop verbs, and adjectives.
fn is_valuable_term(word: &str, tag: &str) -> bool {
    if tag.starts_with('n') {
        !word.chars().any(|c| c.is_ascii_digit()) && word.chars().count() > 1
    } else if tag.starts_with('v') {
        !STOP_VERBS.contains(&word)
    } else {
        tag.starts_with('a')
    }
}

/// Trim, turn non-breaking spaces into spaces and collapse whitespace runs.
pub fn normalize_text(text: &str) -> String {
    text.replace('\u{00A0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn distinct<I: IntoIterator<Item = String>>(items: I) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

// ============================================================================
// Output Types
// ============================================================================

/// Derived index fields. Recomputed from the record, never edited directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedSearchFields {
    pub name_tokens: Vec<String>,
    pub address_tokens: Vec<String>,
    pub name_keywords: Vec<String>,
    /// Place entities found in the address
    pub place_entities: Vec<String>,
    /// Brand entities found in the brand field
    pub brand_entities: Vec<String>,
    /// Brand entities found in name and brand together
    pub brand_names: Vec<String>,
    pub name_pinyin: Option<String>,
    pub name_initials: Option<String>,
    pub name_traditional: Option<String>,
    pub address_pinyin: Option<String>,
    pub address_initials: Option<String>,
    pub address_traditional: Option<String>,
    /// Continent, country, city, region
    pub geo_hierarchy: Vec<String>,
}

/// Entities pulled from one tagging pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelEntities {
    pub place_names: Vec<String>,
    pub organization_names: Vec<String>,
    pub person_names: Vec<String>,
    pub facility_keywords: Vec<String>,
    pub brand_keywords: Vec<String>,
}

impl HotelEntities {
    pub fn all(&self) -> Vec<String> {
        self.place_names
            .iter()
            .chain(&self.organization_names)
            .chain(&self.person_names)
            .chain(&self.facility_keywords)
            .chain(&self.brand_keywords)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Query-path analysis of raw user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryAnalysis {
    pub original: String,
    pub normalized: String,
    pub corrected: String,
    pub correction: Option<Correction>,
    pub tokens: Vec<String>,
    pub keywords: Vec<String>,
}

// ============================================================================
// Engine
// ============================================================================

/// Tokenization, keyword/entity extraction and transliteration for index
/// fields and queries.
#[derive(Clone)]
pub struct SearchEnrichmentEngine {
    spellcheck: Arc<SpellCorrectionEngine>,
    analyzer: Arc<dyn TextAnalyzer>,
    config: EnrichmentConfig,
}

impl std::fmt::Debug for SearchEnrichmentEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEnrichmentEngine")
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .finish()
    }
}

impl SearchEnrichmentEngine {
    pub fn new(
        spellcheck: Arc<SpellCorrectionEngine>,
        analyzer: Arc<dyn TextAnalyzer>,
        config: EnrichmentConfig,
    ) -> Self {
        Self {
            spellcheck,
            analyzer,
            config,
        }
    }

    /// Engine with the analyzer named in `config`.
    pub fn from_config(spellcheck: Arc<SpellCorrectionEngine>, config: EnrichmentConfig) -> Self {
        let analyzer = config.analyzer.build();
        let engine = Self::new(spellcheck, analyzer, config);
        for word in &engine.config.custom_words {
            if !engine.add_custom_word(word.clone()) {
                log::warn!(
                    "Custom word {:?} not added to {} analyzer",
                    word.word,
                    engine.analyzer_name()
                );
            }
        }
        engine
    }

    pub fn spellcheck(&self) -> &SpellCorrectionEngine {
        &self.spellcheck
    }

    pub fn analyzer_name(&self) -> &'static str {
        self.analyzer.name()
    }

    fn correct(&self, text: &str) -> String {
        self.spellcheck.get_correction(text, DOMAIN_ALL)
    }

    /// Normalize and spell-correct once; `None` for blank input.
    fn prepare(&self, text: &str) -> Option<String> {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            None
        } else {
            Some(self.correct(&normalized))
        }
    }

    fn degraded(&self, operation: &str, error: impl std::fmt::Display) {
        log::debug!(
            "[{}] {} degraded: {}",
            self.analyzer.name(),
            operation,
            error
        );
    }

    // ------------------------------------------------------------------------
    // Tokens and keywords
    // ------------------------------------------------------------------------

    /// Spell-correct, segment and post-process. Falls back to a naive split.
    pub fn tokenize_fine(&self, text: &str) -> Vec<String> {
        self.prepare(text)
            .map(|corrected| self.segment_corrected(&corrected))
            .unwrap_or_default()
    }

    fn segment_corrected(&self, corrected: &str) -> Vec<String> {
        if corrected.is_empty() {
            return Vec::new();
        }
        match self.analyzer.segment(corrected) {
            Ok(tokens) => tokens
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            Err(e) => {
                self.degraded("tokenize_fine", e);
                simple_split(corrected)
            }
        }
    }

    /// Top `top_k` keywords (clamped to 1..=10). Falls back to the first
    /// distinct tokens of a naive split.
    pub fn extract_keywords(&self, text: &str, top_k: usize) -> Vec<String> {
        self.prepare(text)
            .map(|corrected| self.keywords_corrected(&corrected, top_k))
            .unwrap_or_default()
    }

    fn keywords_corrected(&self, corrected: &str, top_k: usize) -> Vec<String> {
        let k = clamp_top_k(top_k);
        if corrected.is_empty() {
            return Vec::new();
        }
        match self.analyzer.keywords(corrected, k) {
            Ok(mut keywords) => {
                keywords.truncate(k);
                keywords
            }
            Err(e) => {
                self.degraded("extract_keywords", e);
                distinct(simple_split(corrected)).into_iter().take(k).collect()
            }
        }
    }

    /// Search-mode tokens with offsets; offsets are absent on fallback.
    pub fn index_tokens(&self, text: &str) -> Vec<OffsetToken> {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return Vec::new();
        }
        match self.analyzer.index_segment(&normalized) {
            Ok(tokens) => tokens,
            Err(e) => {
                self.degraded("index_tokens", e);
                simple_split(&normalized)
                    .into_iter()
                    .map(OffsetToken::unanchored)
                    .collect()
            }
        }
    }

    // ------------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------------

    fn tagged(&self, text: &str, operation: &str) -> Option<Vec<TaggedTerm>> {
        if text.is_empty() {
            return None;
        }
        match self.analyzer.tag(text) {
            Ok(terms) => Some(terms),
            Err(e) => {
                self.degraded(operation, e);
                None
            }
        }
    }

    fn entities<F>(&self, text: &str, operation: &str, keep: F) -> Vec<String>
    where
        F: Fn(&TaggedTerm) -> bool,
    {
        self.prepare(text)
            .map(|corrected| self.entities_corrected(&corrected, operation, keep))
            .unwrap_or_default()
    }

    fn entities_corrected<F>(&self, corrected: &str, operation: &str, keep: F) -> Vec<String>
    where
        F: Fn(&TaggedTerm) -> bool,
    {
        let Some(terms) = self.tagged(corrected, operation) else {
            return Vec::new();
        };
        let words = terms
            .iter()
            .filter(|term| keep(term))
            .map(|term| term.word.trim().to_string())
            .filter(|word| !word.is_empty());
        distinct(words)
            .into_iter()
            .take(self.config.entity_limit)
            .collect()
    }

    pub fn ner_places(&self, text: &str) -> Vec<String> {
        self.entities(text, "ner_places", |t| t.tag == tags::PLACE)
    }

    pub fn ner_orgs(&self, text: &str) -> Vec<String> {
        self.entities(text, "ner_orgs", |t| t.tag == tags::ORGANIZATION)
    }

    pub fn ner_persons(&self, text: &str) -> Vec<String> {
        self.entities(text, "ner_persons", |t| t.tag == tags::PERSON)
    }

    /// Brand-tagged words, plus proper nouns carrying a brand marker.
    pub fn ner_brands(&self, text: &str) -> Vec<String> {
        self.entities(text, "ner_brands", is_brand_term)
    }

    /// Places, organizations, persons, facilities and brands in one pass.
    pub fn extract_hotel_entities(&self, text: &str) -> HotelEntities {
        let Some(terms) = self
            .prepare(text)
            .and_then(|corrected| self.tagged(&corrected, "extract_hotel_entities"))
        else {
            return HotelEntities::default();
        };
        let mut entities = HotelEntities::default();
        for term in terms {
            let word = term.word.trim();
            if word.is_empty() {
                continue;
            }
            match term.tag.as_str() {
                tags::PLACE => entities.place_names.push(word.to_string()),
                tags::ORGANIZATION | tags::OTHER_PROPER_NOUN => {
                    entities.organization_names.push(word.to_string())
                }
                tags::PERSON => entities.person_names.push(word.to_string()),
                _ => {}
            }
            match token_kind(word) {
                TokenKind::NumberWithUnit => entities.facility_keywords.push(word.to_string()),
                TokenKind::Brand => entities.brand_keywords.push(word.to_string()),
                TokenKind::Location | TokenKind::Plain => {}
            }
        }
        HotelEntities {
            place_names: distinct(entities.place_names),
            organization_names: distinct(entities.organization_names),
            person_names: distinct(entities.person_names),
            facility_keywords: distinct(entities.facility_keywords),
            brand_keywords: distinct(entities.brand_keywords),
        }
    }

    // ------------------------------------------------------------------------
    // Part-of-speech filtered tokens
    // ------------------------------------------------------------------------

    /// Spell-corrected tagged words minus punctuation, URLs, times and
    /// other proper nouns, deduplicated. Falls back to a naive split.
    pub fn hotel_domain_tokens(&self, text: &str) -> Vec<String> {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return Vec::new();
        }
        let corrected = self.correct(&normalized);
        match self.analyzer.tag(&corrected) {
            Ok(terms) => distinct(
                terms
                    .into_iter()
                    .filter(|t| !NOISE_TAGS.contains(&t.tag.as_str()))
                    .map(|t| t.word.trim().to_string())
                    .filter(|w| !w.is_empty()),
            ),
            Err(e) => {
                self.degraded("hotel_domain_tokens", e);
                simple_split(&normalized)
            }
        }
    }

    /// Nouns, meaningful verbs and adjectives of the text as written. Falls
    /// back to a naive split.
    pub fn smart_token_filter(&self, text: &str) -> Vec<String> {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return Vec::new();
        }
        match self.analyzer.tag(&normalized) {
            Ok(terms) => terms
                .iter()
                .map(|t| (t.word.trim(), t.tag.as_str()))
                .filter(|(word, tag)| !word.is_empty() && is_valuable_term(word, tag))
                .map(|(word, _)| word.to_string())
                .collect(),
            Err(e) => {
                self.degraded("smart_token_filter", e);
                simple_split(&normalized)
            }
        }
    }

    // ------------------------------------------------------------------------
    // Runtime dictionary
    // ------------------------------------------------------------------------

    /// Add a word to the analyzer dictionary. False for blank words or
    /// backends without a runtime dictionary.
    pub fn add_custom_word(&self, mut word: CustomWord) -> bool {
        word.word = word.word.trim().to_string();
        if word.word.is_empty() {
            return false;
        }
        match self.analyzer.add_custom_word(&word) {
            Ok(()) => {
                log::info!("[{}] added custom word {}", self.analyzer.name(), word.word);
                true
            }
            Err(e) => {
                self.degraded("add_custom_word", e);
                false
            }
        }
    }

    /// Remove a runtime word. False when it was never added or the backend
    /// has no runtime dictionary.
    pub fn remove_custom_word(&self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.analyzer.remove_custom_word(word).unwrap_or_else(|e| {
            self.degraded("remove_custom_word", e);
            false
        })
    }

    // ------------------------------------------------------------------------
    // Transliteration
    // ------------------------------------------------------------------------

    /// Space-separated pinyin; the input unchanged on failure.
    pub fn to_pinyin(&self, text: &str) -> String {
        match self.analyzer.to_pinyin(text) {
            Ok(syllables) => syllables.join(" "),
            Err(e) => {
                self.degraded("to_pinyin", e);
                text.to_string()
            }
        }
    }

    /// Pinyin initials; the input unchanged on failure.
    pub fn to_pinyin_head(&self, text: &str) -> String {
        self.analyzer.to_pinyin_initials(text).unwrap_or_else(|e| {
            self.degraded("to_pinyin_head", e);
            text.to_string()
        })
    }

    pub fn to_traditional(&self, text: &str) -> String {
        self.analyzer.to_traditional(text).unwrap_or_else(|e| {
            self.degraded("to_traditional", e);
            text.to_string()
        })
    }

    pub fn to_simplified(&self, text: &str) -> String {
        self.analyzer.to_simplified(text).unwrap_or_else(|e| {
            self.degraded("to_simplified", e);
            text.to_string()
        })
    }

    // ------------------------------------------------------------------------
    // Record and query entry points
    // ------------------------------------------------------------------------

    /// Derive all index fields for a record.
    ///
    /// Each source field is spell-corrected once and shared by every field
    /// derived from it.
    pub fn enrich(&self, record: &NormalizedHotelRecord) -> EnrichedSearchFields {
        let name = record.name.preferred().unwrap_or_default();
        let address = record.address.preferred().unwrap_or_default();
        let brand = record.brand.preferred().unwrap_or_default();

        let name_fixed = self.prepare(name).unwrap_or_default();
        let address_fixed = self.prepare(address).unwrap_or_default();
        let brand_fixed = self.prepare(brand).unwrap_or_default();
        let name_and_brand = format!("{} {}", name_fixed, brand_fixed);

        let mut fields = EnrichedSearchFields {
            name_tokens: filter_valid_tokens(self.segment_corrected(&name_fixed)),
            address_tokens: filter_valid_tokens(self.segment_corrected(&address_fixed)),
            name_keywords: filter_valid_tokens(
                self.keywords_corrected(&name_fixed, self.config.keyword_top_k),
            ),
            place_entities: filter_valid_tokens(self.entities_corrected(
                &address_fixed,
                "ner_places",
                |t| t.tag == tags::PLACE,
            )),
            brand_entities: filter_valid_tokens(self.entities_corrected(
                &brand_fixed,
                "ner_brands",
                is_brand_term,
            )),
            brand_names: self.entities_corrected(
                name_and_brand.trim(),
                "ner_brands",
                is_brand_term,
            ),
            geo_hierarchy: geo_hierarchy(record),
            ..Default::default()
        };

        if contains_cjk(name) {
            fields.name_pinyin = self.romanize(name);
            fields.name_initials = self.initials(name);
            fields.name_traditional = Some(self.to_traditional(name));
        }
        if contains_cjk(address) {
            fields.address_pinyin = self.romanize(address);
            fields.address_initials = self.initials(address);
            fields.address_traditional = Some(self.to_traditional(address));
        }
        fields
    }

    // Index fields stay empty rather than duplicating the source text.
    fn romanize(&self, text: &str) -> Option<String> {
        self.analyzer
            .to_pinyin(text)
            .map(|syllables| syllables.join(" "))
            .map_err(|e| self.degraded("pinyin", e))
            .ok()
    }

    fn initials(&self, text: &str) -> Option<String> {
        self.analyzer
            .to_pinyin_initials(text)
            .map_err(|e| self.degraded("pinyin initials", e))
            .ok()
    }

    /// Correct, tokenize and extract keywords from raw user input. The
    /// query is corrected once.
    pub fn analyze_query(&self, text: &str) -> QueryAnalysis {
        let normalized = normalize_text(text);
        let correction = self.spellcheck.correct_with_details(&normalized, DOMAIN_ALL);
        let corrected = correction
            .as_ref()
            .map(|c| c.corrected.clone())
            .unwrap_or_else(|| normalized.clone());
        QueryAnalysis {
            original: text.to_string(),
            tokens: self.segment_corrected(&corrected),
            keywords: self.keywords_corrected(&corrected, self.config.keyword_top_k),
            normalized,
            corrected,
            correction,
        }
    }
}

impl Default for SearchEnrichmentEngine {
    /// Built-in spelling rules over the naive analyzer.
    fn default() -> Self {
        Self::new(
            Arc::new(SpellCorrectionEngine::with_default_rules()),
            Arc::new(NaiveAnalyzer),
            EnrichmentConfig::default(),
        )
    }
}

/// Continent, country, city, region in the record's working language.
pub fn geo_hierarchy(record: &NormalizedHotelRecord) -> Vec<String> {
    let chinese_first = record.business_domain == BusinessDomain::Domestic;
    [
        &record.continent,
        &record.country,
        &record.city,
        &record.region,
    ]
    .into_iter()
    .filter_map(|field| pick(field, chinese_first))
    .map(str::to_string)
    .collect()
}

fn pick(field: &BilingualField, chinese_first: bool) -> Option<&str> {
    if chinese_first {
        field.chinese().or(field.english())
    } else {
        field.english().or(field.chinese())
    }
}
