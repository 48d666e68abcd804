//! Agoda Extractor
//!
//! International provider schema. Values arrive in a single language per
//! attribute and are split by script; resolved geography only fills sides
//! the provider left empty.

use serde_json::Value;

use super::payload::{first_non_blank, join_non_blank, text_at};
use super::provider::{business_domain_of, Provider, ProviderExtractor};
use crate::core::geography::GeographyResolver;
use crate::core::language::{assign, assign_from_priority_list, BilingualField};
use crate::core::record::{GeoPoint, NormalizedHotelRecord};

#[derive(Debug, Clone, Default)]
pub struct AgodaExtractor {
    resolver: GeographyResolver,
}

fn assign_opt(text: Option<String>) -> BilingualField {
    text.as_deref().map(assign).unwrap_or_default()
}

fn fill(side: &mut Option<String>, value: &str) {
    if side.is_none() {
        *side = Some(value.to_string());
    }
}

impl AgodaExtractor {
    pub fn new(resolver: GeographyResolver) -> Self {
        Self { resolver }
    }

    fn backfill_geography(&self, record: &mut NormalizedHotelRecord) {
        let resolver = &self.resolver;
        let country = record
            .country
            .english()
            .and_then(|name| resolver.resolve_by_english_name(name))
            .or_else(|| {
                record
                    .country
                    .chinese()
                    .and_then(|name| resolver.resolve_by_chinese_name(name))
            })
            .or_else(|| {
                record
                    .country_code
                    .as_deref()
                    .and_then(|code| resolver.resolve_by_code(code))
            });

        let Some(country) = country else {
            if !record.country.is_empty() {
                log::debug!(
                    "[agoda] unresolved country {:?}",
                    record.country.preferred().unwrap_or_default()
                );
            }
            return;
        };

        fill(&mut record.country.chinese, country.name_cn);
        fill(&mut record.country.english, country.name_en);
        if record.country_code.is_none() {
            record.country_code = Some(country.code.to_string());
        }
        if let Some(continent) = resolver.continent_of(country) {
            fill(&mut record.continent.chinese, continent.name_cn);
            fill(&mut record.continent.english, continent.name_en);
        }
    }
}

impl ProviderExtractor for AgodaExtractor {
    fn provider(&self) -> Provider {
        Provider::Agoda
    }

    fn extract(&self, root: &Value) -> NormalizedHotelRecord {
        let text = |path: &str| text_at(root, path);

        let mut record = NormalizedHotelRecord::empty(Provider::Agoda.as_str());
        record.source_id = first_non_blank(text("propertyId"), text("summary.propertyId"));

        let english_name = text("summary.propertyName.englishName");
        let local_name = text("summary.propertyName.localName");
        record.name = assign_from_priority_list([english_name.as_deref(), local_name.as_deref()]);

        record.address = assign_opt(join_non_blank(
            text("summary.address.address1"),
            text("summary.address.address2"),
        ));
        record.city = assign_opt(text("summary.address.cityName"));
        record.region = assign_opt(text("summary.address.areaName"));
        record.country = assign_opt(text("summary.address.countryName"));
        record.continent = assign_opt(text("summary.address.regionName"));
        record.country_code = text("summary.countryCode").map(|c| c.trim().to_uppercase());
        record.description = assign_opt(first_non_blank(
            text("description.long"),
            text("description.short"),
        ));
        record.location = GeoPoint::parse(
            text("summary.coordinate.lat").as_deref(),
            text("summary.coordinate.lng").as_deref(),
        );

        self.backfill_geography(&mut record);
        record.business_domain = business_domain_of(&record, |name| {
            self.resolver.resolve_by_english_name(name).map(|c| c.code)
        });
        record
    }
}
