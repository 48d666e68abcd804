//! Country and continent lookup over a shared catalog.

use std::sync::Arc;

use super::catalog::{GeographyCatalog, NameIndex};
use super::data::{ContinentEntry, CountryEntry, LEGACY_CODES};

/// Read-only resolver handle. Cheap to clone; all clones share one catalog.
#[derive(Debug, Clone)]
pub struct GeographyResolver {
    catalog: Arc<GeographyCatalog>,
}

impl GeographyResolver {
    pub fn new(catalog: Arc<GeographyCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolver over the process-wide catalog.
    pub fn global() -> Self {
        Self::new(GeographyCatalog::global())
    }

    pub fn catalog(&self) -> &GeographyCatalog {
        &self.catalog
    }

    /// Case-insensitive code lookup. Legacy codes map to their replacement.
    pub fn resolve_by_code(&self, code: &str) -> Option<&'static CountryEntry> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return None;
        }
        let code = LEGACY_CODES
            .iter()
            .find(|(legacy, _)| *legacy == code)
            .map(|(_, current)| (*current).to_string())
            .unwrap_or(code);

        self.catalog
            .codes
            .get(&code)
            .and_then(|&row| self.catalog.country_at(row))
    }

    /// Exact Chinese-name lookup.
    pub fn resolve_by_chinese_name(&self, name: &str) -> Option<&'static CountryEntry> {
        self.catalog
            .country_names
            .chinese
            .get(name.trim())
            .and_then(|&row| self.catalog.country_at(row))
    }

    /// English-name lookup: canonical name, then alias, then normalized alias key.
    pub fn resolve_by_english_name(&self, name: &str) -> Option<&'static CountryEntry> {
        let normalizer = &self.catalog.country_normalizer;
        lookup_english(&self.catalog.country_names, name, |s| normalizer.normalize(s))
            .and_then(|row| self.catalog.country_at(row))
    }

    /// Chinese name first, English name second.
    pub fn resolve_country(
        &self,
        name_cn: Option<&str>,
        name_en: Option<&str>,
    ) -> Option<&'static CountryEntry> {
        name_cn
            .and_then(|cn| self.resolve_by_chinese_name(cn))
            .or_else(|| name_en.and_then(|en| self.resolve_by_english_name(en)))
    }

    pub fn resolve_continent_by_chinese_name(&self, name: &str) -> Option<&'static ContinentEntry> {
        self.catalog
            .continent_names
            .chinese
            .get(name.trim())
            .and_then(|&row| self.catalog.continent_at(row))
    }

    pub fn resolve_continent_by_english_name(&self, name: &str) -> Option<&'static ContinentEntry> {
        let normalizer = &self.catalog.continent_normalizer;
        lookup_english(&self.catalog.continent_names, name, |s| normalizer.normalize(s))
            .and_then(|row| self.catalog.continent_at(row))
    }

    pub fn resolve_continent(
        &self,
        name_cn: Option<&str>,
        name_en: Option<&str>,
    ) -> Option<&'static ContinentEntry> {
        name_cn
            .and_then(|cn| self.resolve_continent_by_chinese_name(cn))
            .or_else(|| name_en.and_then(|en| self.resolve_continent_by_english_name(en)))
    }

    /// Continent row for a resolved country, used to backfill records.
    pub fn continent_of(&self, country: &CountryEntry) -> Option<&'static ContinentEntry> {
        self.catalog.continent(country.continent)
    }

    pub fn continent_of_code(&self, code: &str) -> Option<&'static ContinentEntry> {
        self.resolve_by_code(code)
            .and_then(|country| self.continent_of(country))
    }

    /// All country rows in catalog order.
    pub fn entries(&self) -> &'static [CountryEntry] {
        self.catalog.countries()
    }
}

impl Default for GeographyResolver {
    fn default() -> Self {
        Self::global()
    }
}

fn lookup_english(
    index: &NameIndex,
    name: &str,
    normalize: impl Fn(&str) -> String,
) -> Option<usize> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if let Some(&row) = index.canonical.get(&lowered) {
        return Some(row);
    }
    if let Some(&row) = index.alias.get(&lowered) {
        return Some(row);
    }
    let key = normalize(trimmed);
    if key.is_empty() {
        return None;
    }
    index.normalized.get(&key).copied()
}
