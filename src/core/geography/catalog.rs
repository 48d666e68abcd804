//! Immutable catalog plus the lookup indexes derived from it.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::data::{ContinentEntry, CountryEntry, CONTINENTS, COUNTRIES};
use super::Continent;
use crate::core::normalize::AliasNormalizer;

static GLOBAL_CATALOG: Lazy<Arc<GeographyCatalog>> =
    Lazy::new(|| Arc::new(GeographyCatalog::build()));

/// Two different rows produced the same normalized alias key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCollision {
    pub key: String,
    /// Row that held the key before
    pub replaced: &'static str,
    /// Row that now owns the key
    pub winner: &'static str,
}

/// Exact and normalized lookup tables over one set of rows.
#[derive(Debug, Default)]
pub(super) struct NameIndex {
    /// Lowercased canonical English name, first row wins
    pub canonical: HashMap<String, usize>,
    /// Lowercased alias, first row wins
    pub alias: HashMap<String, usize>,
    /// Normalized key over canonical names and aliases, last row wins
    pub normalized: HashMap<String, usize>,
    /// Exact Chinese name, first row wins
    pub chinese: HashMap<&'static str, usize>,
}

impl NameIndex {
    fn insert_exact(map: &mut HashMap<String, usize>, name: &str, row: usize) {
        let key = name.trim().to_lowercase();
        if !key.is_empty() {
            map.entry(key).or_insert(row);
        }
    }
}

/// Country and continent rows with their alias indexes.
///
/// Built once and never mutated, so it can be shared freely across threads.
#[derive(Debug)]
pub struct GeographyCatalog {
    countries: &'static [CountryEntry],
    continents: &'static [ContinentEntry],
    pub(super) country_normalizer: AliasNormalizer,
    pub(super) continent_normalizer: AliasNormalizer,
    pub(super) codes: HashMap<String, usize>,
    pub(super) country_names: NameIndex,
    pub(super) continent_names: NameIndex,
    collisions: Vec<AliasCollision>,
}

impl GeographyCatalog {
    /// Shared process-wide catalog over the embedded tables.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_CATALOG)
    }

    /// Build a fresh catalog over the embedded tables.
    pub fn build() -> Self {
        Self::build_with(
            COUNTRIES,
            CONTINENTS,
            AliasNormalizer::country(),
            AliasNormalizer::continent(),
        )
    }

    /// Build over the embedded tables with custom stopword normalizers.
    pub fn with_normalizers(country: AliasNormalizer, continent: AliasNormalizer) -> Self {
        Self::build_with(COUNTRIES, CONTINENTS, country, continent)
    }

    /// Build a catalog over arbitrary rows.
    pub fn build_with(
        countries: &'static [CountryEntry],
        continents: &'static [ContinentEntry],
        country_normalizer: AliasNormalizer,
        continent_normalizer: AliasNormalizer,
    ) -> Self {
        let mut codes = HashMap::with_capacity(countries.len());
        let mut country_names = NameIndex::default();
        let mut collisions = Vec::new();

        for (row, entry) in countries.iter().enumerate() {
            let code = entry.code.trim().to_uppercase();
            if let Some(&first) = codes.get(&code) {
                log::warn!(
                    "Duplicate country code {} (rows {} and {}); keeping the first",
                    code,
                    first,
                    row
                );
                continue;
            }
            codes.insert(code, row);

            country_names.chinese.entry(entry.name_cn).or_insert(row);
            NameIndex::insert_exact(&mut country_names.canonical, entry.name_en, row);
            for alias in entry.aliases {
                NameIndex::insert_exact(&mut country_names.alias, alias, row);
            }

            for name in std::iter::once(&entry.name_en).chain(entry.aliases.iter()) {
                let key = country_normalizer.normalize(name);
                if key.is_empty() {
                    continue;
                }
                if let Some(previous) = country_names.normalized.insert(key.clone(), row) {
                    if previous != row {
                        let collision = AliasCollision {
                            key,
                            replaced: countries[previous].code,
                            winner: entry.code,
                        };
                        log::warn!(
                            "Alias key '{}' moves from {} to {}",
                            collision.key,
                            collision.replaced,
                            collision.winner
                        );
                        collisions.push(collision);
                    }
                }
            }
        }

        let mut continent_names = NameIndex::default();
        for (row, entry) in continents.iter().enumerate() {
            continent_names.chinese.entry(entry.name_cn).or_insert(row);
            NameIndex::insert_exact(&mut continent_names.canonical, entry.name_en, row);
            for alias in entry.aliases {
                NameIndex::insert_exact(&mut continent_names.alias, alias, row);
            }
            for name in std::iter::once(&entry.name_en).chain(entry.aliases.iter()) {
                let key = continent_normalizer.normalize(name);
                if !key.is_empty() {
                    continent_names.normalized.insert(key, row);
                }
            }
        }

        log::debug!(
            "Geography catalog built: {} countries, {} continents, {} alias keys",
            codes.len(),
            continents.len(),
            country_names.normalized.len()
        );

        Self {
            countries,
            continents,
            country_normalizer,
            continent_normalizer,
            codes,
            country_names,
            continent_names,
            collisions,
        }
    }

    pub fn countries(&self) -> &'static [CountryEntry] {
        self.countries
    }

    pub fn continents(&self) -> &'static [ContinentEntry] {
        self.continents
    }

    pub(super) fn country_at(&self, row: usize) -> Option<&'static CountryEntry> {
        self.countries.get(row)
    }

    pub(super) fn continent_at(&self, row: usize) -> Option<&'static ContinentEntry> {
        self.continents.get(row)
    }

    /// Row for a continent reference, if the catalog declares it.
    pub fn continent(&self, continent: Continent) -> Option<&'static ContinentEntry> {
        self.continents.iter().find(|c| c.continent == continent)
    }

    /// Alias keys claimed by more than one row during the build.
    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }
}
