//! Elong Extractor
//!
//! Domestic provider schema. Every attribute sits under `Result.Detail` with
//! separate Chinese and English keys. Resolved geography overwrites the
//! provider's names; a payload with no country at all is treated as
//! mainland China.

use serde_json::Value;

use super::payload::{first_non_blank, text_at};
use super::provider::{business_domain_of, Provider, ProviderExtractor};
use crate::core::geography::{CountryEntry, GeographyResolver};
use crate::core::language::{merge, BilingualField};
use crate::core::record::{GeoPoint, NormalizedHotelRecord};

/// Country assumed when the payload names none.
pub const DEFAULT_COUNTRY_CODE: &str = "CN";

#[derive(Debug, Clone, Default)]
pub struct ElongExtractor {
    resolver: GeographyResolver,
}

impl ElongExtractor {
    pub fn new(resolver: GeographyResolver) -> Self {
        Self { resolver }
    }

    fn backfill_geography(&self, record: &mut NormalizedHotelRecord, raw_code: Option<String>) {
        let resolved = self
            .resolver
            .resolve_country(record.country.chinese(), record.country.english())
            .or_else(|| raw_code.as_deref().and_then(|c| self.resolver.resolve_by_code(c)));

        match resolved {
            Some(country) => self.apply_canonical(record, country),
            None if record.country.is_empty() => {
                record.country_code = Some(DEFAULT_COUNTRY_CODE.to_string());
                if let Some(continent) = self.resolver.continent_of_code(DEFAULT_COUNTRY_CODE) {
                    record.continent = BilingualField::new(
                        Some(continent.name_cn.to_string()),
                        Some(continent.name_en.to_string()),
                    );
                }
            }
            None => {
                log::debug!(
                    "[elong] unresolved country {:?}",
                    record.country.preferred().unwrap_or_default()
                );
                record.country_code = raw_code.map(|c| c.trim().to_uppercase());
            }
        }
    }

    fn apply_canonical(&self, record: &mut NormalizedHotelRecord, country: &CountryEntry) {
        record.country = BilingualField::new(
            Some(country.name_cn.to_string()),
            Some(country.name_en.to_string()),
        );
        record.country_code = Some(country.code.to_string());
        if let Some(continent) = self.resolver.continent_of(country) {
            record.continent = BilingualField::new(
                Some(continent.name_cn.to_string()),
                Some(continent.name_en.to_string()),
            );
        }
    }
}

fn detail(root: &Value, key: &str) -> Option<String> {
    text_at(root, &format!("Result.Detail.{}", key))
}

fn pair(root: &Value, cn_key: &str, en_key: &str) -> BilingualField {
    let chinese = detail(root, cn_key);
    let english = detail(root, en_key);
    merge(chinese.as_deref(), english.as_deref(), None)
}

impl ProviderExtractor for ElongExtractor {
    fn provider(&self) -> Provider {
        Provider::Elong
    }

    fn extract(&self, root: &Value) -> NormalizedHotelRecord {
        let mut record = NormalizedHotelRecord::empty(Provider::Elong.as_str());
        record.source_id = detail(root, "HotelId");
        record.name = pair(root, "HotelName", "HotelNameEn");
        record.country = pair(root, "CountryName", "CountryNameEn");
        record.city = pair(root, "CityName", "CityNameEn");
        record.region = pair(root, "DistrictName", "DistrictNameEn");
        record.address = pair(root, "Address", "AddressEn");
        record.group = pair(root, "GroupName", "GroupNameEn");
        record.brand = pair(root, "BrandName", "BrandNameEn");

        let description_cn = first_non_blank(detail(root, "IntroEditor"), detail(root, "Description"));
        let description_en =
            first_non_blank(detail(root, "IntroEditorEn"), detail(root, "DescriptionEn"));
        record.description = merge(description_cn.as_deref(), description_en.as_deref(), None);

        record.location = GeoPoint::parse(
            detail(root, "GoogleLat").as_deref(),
            detail(root, "GoogleLon").as_deref(),
        );

        self.backfill_geography(&mut record, detail(root, "CountryCode"));
        record.business_domain = business_domain_of(&record, |name| {
            self.resolver.resolve_by_english_name(name).map(|c| c.code)
        });
        record
    }
}
