//! Ingestion Pipeline Unit Tests
//!
//! Full payload-to-index-fields runs over the fixture payloads, plus batch
//! behavior when one record brings the analyzer down.

use std::sync::Arc;

use crate::core::geography::GeographyResolver;
use crate::core::preprocess::SpellCorrectionEngine;
use crate::core::record::{BusinessDomain, GeoPoint};
use crate::core::search::config::EnrichmentConfig;
use crate::core::search::SearchEnrichmentEngine;
use crate::ingestion::{split_lines, EnrichedHotel, IngestionPipeline, Provider};
use crate::tests::common::{agoda_paris, elong_beijing, escaped};
use crate::tests::mocks::PanickingAnalyzer;

fn pipeline() -> IngestionPipeline {
    IngestionPipeline::new(GeographyResolver::global(), SearchEnrichmentEngine::default())
}

fn panicking_pipeline(trigger: &'static str) -> IngestionPipeline {
    let enrichment = SearchEnrichmentEngine::new(
        Arc::new(SpellCorrectionEngine::with_default_rules()),
        Arc::new(PanickingAnalyzer { trigger }),
        EnrichmentConfig::default(),
    );
    IngestionPipeline::new(GeographyResolver::global(), enrichment)
}

// ============================================================================
// Single Records
// ============================================================================

#[test]
fn test_elong_fixture_end_to_end() {
    let hotel = pipeline().process(Provider::Elong, &elong_beijing());
    let record = &hotel.record;

    assert_eq!(record.provider, "elong");
    assert_eq!(record.source_id.as_deref(), Some("00101234"));
    assert_eq!(record.name.chinese(), Some("北亰王府井希尔顿酒店"));
    assert_eq!(record.name.english(), Some("Hilton Beijing Wangfujing"));
    assert_eq!(record.country_code.as_deref(), Some("CN"));
    assert_eq!(record.country.english(), Some("China"));
    assert_eq!(record.brand.english(), Some("Hilton"));
    assert_eq!(record.description.chinese(), Some("酒店位于王府井商圈"));
    assert_eq!(record.location, GeoPoint::validated(39.914, 116.413));
    assert_eq!(record.business_domain, BusinessDomain::Domestic);

    assert_eq!(hotel.search.geo_hierarchy, vec!["亚洲", "中国", "北京", "东城区"]);
    assert_eq!(hotel.search.name_tokens, vec!["北亰王府井希尔顿酒店"]);
    assert!(!hotel.search.address_tokens.is_empty());
}

#[test]
fn test_agoda_fixture_end_to_end() {
    let hotel = pipeline().process(Provider::Agoda, &agoda_paris());
    let record = &hotel.record;

    assert_eq!(record.source_id.as_deref(), Some("778899"));
    assert_eq!(record.name.english(), Some("Hotel Le Meurice"));
    assert_eq!(record.name.chinese(), Some("莫里斯酒店"));
    assert_eq!(record.address.english(), Some("228 Rue de Rivoli, 1st arr."));
    assert_eq!(record.country.chinese(), Some("法国"));
    assert_eq!(record.continent.chinese(), Some("欧洲"));
    assert_eq!(record.continent.english(), Some("Europe"));
    assert_eq!(record.business_domain, BusinessDomain::International);
    assert_eq!(record.location, GeoPoint::validated(48.8651, 2.3281));

    assert_eq!(hotel.search.geo_hierarchy, vec!["Europe", "France", "Paris", "Louvre"]);
    // Bare numbers are not index tokens.
    assert_eq!(hotel.search.address_tokens, vec!["Rue", "de", "Rivoli", "1st", "arr"]);
}

#[test]
fn test_escaped_payload_matches_plain() {
    let pipeline = pipeline();
    let plain = pipeline.process(Provider::Elong, &elong_beijing());
    let wrapped = pipeline.process(Provider::Elong, &escaped(&elong_beijing()));
    assert_eq!(plain, wrapped);
}

#[test]
fn test_enriched_hotel_json_is_flat() {
    let hotel = pipeline().process(Provider::Agoda, &agoda_paris());
    let value = serde_json::to_value(&hotel).unwrap();
    assert_eq!(value["provider"], "agoda");
    assert_eq!(value["country_code"], "FR");
    assert_eq!(value["business_domain"], "international");
    assert!(value["search"]["geo_hierarchy"].is_array());

    let back: EnrichedHotel = serde_json::from_value(value).unwrap();
    assert_eq!(back, hotel);
}

// ============================================================================
// Batches
// ============================================================================

#[test]
fn test_batch_isolates_panicking_record() {
    let elong = |name: &str| {
        format!(r#"{{"Result":{{"Detail":{{"HotelName":"{}","CountryName":"日本"}}}}}}"#, name)
    };
    let items = vec![
        (Provider::Elong, elong("东京 酒店")),
        (Provider::Elong, elong("爆炸 酒店")),
        (Provider::Elong, elong("大阪 酒店")),
    ];

    let out = panicking_pipeline("爆炸")
        .with_workers(2)
        .unwrap()
        .process_batch(&items);

    assert_eq!(out.len(), 3);
    assert_eq!(out[0].record.country_code.as_deref(), Some("JP"));
    assert_eq!(out[0].search.name_tokens, vec!["东京", "酒店"]);
    assert_eq!(out[1], EnrichedHotel::empty(Provider::Elong));
    assert_eq!(out[2].record.name.chinese(), Some("大阪 酒店"));
    assert_eq!(out[2].search.name_tokens, vec!["大阪", "酒店"]);
}

#[test]
fn test_batch_from_lines_keeps_order() {
    let input = format!(
        "{}\n\n{}\n",
        agoda_paris().replace('\n', " "),
        r#"{"summary":{"countryCode":"JP"}}"#
    );
    let items = split_lines(&input, Provider::Agoda);
    let out = pipeline().process_batch(&items);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].record.country_code.as_deref(), Some("FR"));
    assert_eq!(out[1].record.country_code.as_deref(), Some("JP"));
    assert_eq!(out[1].record.country.chinese(), Some("日本"));
}

#[test]
fn test_empty_batch() {
    assert!(pipeline().process_batch(&[]).is_empty());
}
