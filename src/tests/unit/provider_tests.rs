//! Provider Unit Tests
//!
//! Provider name parsing and the geography each extractor settles on for
//! the country shapes seen in real payloads.

use rstest::rstest;
use serde_json::{json, Map, Value};

use crate::core::record::BusinessDomain;
use crate::ingestion::{AgodaExtractor, ElongExtractor, IngestionError, Provider, ProviderExtractor};
use crate::tests::common::{elong_minimal_china, escaped};

// ============================================================================
// Test Fixtures
// ============================================================================

fn insert(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn elong_payload(name_cn: Option<&str>, name_en: Option<&str>, code: Option<&str>) -> Value {
    let mut detail = Map::new();
    detail.insert("HotelName".into(), json!("测试酒店"));
    insert(&mut detail, "CountryName", name_cn);
    insert(&mut detail, "CountryNameEn", name_en);
    insert(&mut detail, "CountryCode", code);
    json!({ "Result": { "Detail": detail } })
}

fn agoda_payload(country_name: Option<&str>, code: Option<&str>) -> Value {
    let mut address = Map::new();
    address.insert("cityName".into(), json!("Somewhere"));
    insert(&mut address, "countryName", country_name);
    let mut summary = Map::new();
    summary.insert("address".into(), Value::Object(address));
    insert(&mut summary, "countryCode", code);
    json!({ "propertyId": 1, "summary": summary })
}

// ============================================================================
// Provider Names
// ============================================================================

#[rstest]
#[case("elong", Provider::Elong)]
#[case("ELONG", Provider::Elong)]
#[case(" agoda ", Provider::Agoda)]
#[case("Agoda", Provider::Agoda)]
fn test_provider_parses(#[case] name: &str, #[case] expected: Provider) {
    assert_eq!(name.parse::<Provider>().unwrap(), expected);
    assert_eq!(Provider::lenient(name), expected);
}

#[rstest]
#[case("booking")]
#[case("")]
#[case("e-long")]
fn test_unknown_provider(#[case] name: &str) {
    assert!(matches!(
        name.parse::<Provider>(),
        Err(IngestionError::UnknownProvider(_))
    ));
    assert_eq!(Provider::lenient(name), Provider::Agoda);
}

#[test]
fn test_provider_serde_names() {
    assert_eq!(serde_json::to_string(&Provider::Elong).unwrap(), "\"elong\"");
    let parsed: Provider = serde_json::from_str("\"agoda\"").unwrap();
    assert_eq!(parsed, Provider::Agoda);
    assert_eq!(Provider::default(), Provider::Agoda);
}

// ============================================================================
// Elong Country Handling
// ============================================================================

#[rstest]
#[case::chinese_name(Some("中国"), None, None, Some("CN"), BusinessDomain::Domestic)]
#[case::english_name(None, Some("Japan"), None, Some("JP"), BusinessDomain::International)]
#[case::english_alias(None, Some("Hong Kong SAR"), None, Some("HK"), BusinessDomain::Territory)]
#[case::code_only(None, None, Some("mo"), Some("MO"), BusinessDomain::Territory)]
#[case::nothing(None, None, None, Some("CN"), BusinessDomain::Domestic)]
#[case::unknown_name(Some("火星"), None, None, None, BusinessDomain::International)]
fn test_elong_country(
    #[case] name_cn: Option<&str>,
    #[case] name_en: Option<&str>,
    #[case] code: Option<&str>,
    #[case] expected_code: Option<&str>,
    #[case] expected_domain: BusinessDomain,
) {
    let record = ElongExtractor::default().extract(&elong_payload(name_cn, name_en, code));
    assert_eq!(record.country_code.as_deref(), expected_code);
    assert_eq!(record.business_domain, expected_domain);
    if expected_code.is_some() {
        assert!(record.continent.is_complete(), "continent backfilled");
    }
}

#[test]
fn test_elong_unknown_name_is_kept() {
    let record = ElongExtractor::default().extract(&elong_payload(Some("火星"), None, None));
    assert_eq!(record.country.chinese(), Some("火星"));
    assert!(record.continent.is_empty());
}

// ============================================================================
// Agoda Country Handling
// ============================================================================

#[rstest]
#[case::english_with_code(Some("France"), Some("FR"), Some("FR"), BusinessDomain::International)]
#[case::chinese_name(Some("中国"), None, Some("CN"), BusinessDomain::Domestic)]
#[case::lowercase_code(None, Some("tw"), Some("TW"), BusinessDomain::Territory)]
#[case::unknown_name(Some("Atlantis"), None, None, BusinessDomain::International)]
#[case::nothing(None, None, None, BusinessDomain::International)]
fn test_agoda_country(
    #[case] country_name: Option<&str>,
    #[case] code: Option<&str>,
    #[case] expected_code: Option<&str>,
    #[case] expected_domain: BusinessDomain,
) {
    let record = AgodaExtractor::default().extract(&agoda_payload(country_name, code));
    assert_eq!(record.country_code.as_deref(), expected_code);
    assert_eq!(record.business_domain, expected_domain);
}

#[test]
fn test_agoda_keeps_provider_spelling() {
    let record = AgodaExtractor::default().extract(&agoda_payload(Some("france"), None));
    assert_eq!(record.country.english(), Some("france"));
    assert_eq!(record.country.chinese(), Some("法国"));
    assert_eq!(record.continent.english(), Some("Europe"));
}

// ============================================================================
// Same Country, Both Providers
// ============================================================================

#[rstest]
#[case::elong_plain(Provider::Elong, false)]
#[case::elong_escaped(Provider::Elong, true)]
#[case::agoda_plain(Provider::Agoda, false)]
#[case::agoda_escaped(Provider::Agoda, true)]
fn test_china_resolves_identically(#[case] provider: Provider, #[case] escape: bool) {
    let payload = match provider {
        Provider::Elong => elong_minimal_china(),
        Provider::Agoda => agoda_payload(Some("中国"), None).to_string(),
    };
    let raw = if escape { escaped(&payload) } else { payload };

    let record = match provider {
        Provider::Elong => ElongExtractor::default().extract_raw(&raw),
        Provider::Agoda => AgodaExtractor::default().extract_raw(&raw),
    };

    assert_eq!(record.provider, provider.as_str());
    assert_eq!(record.country_code.as_deref(), Some("CN"));
    assert_eq!(record.country.chinese(), Some("中国"));
    assert_eq!(record.country.english(), Some("China"));
    assert_eq!(record.continent.chinese(), Some("亚洲"));
    assert_eq!(record.continent.english(), Some("Asia"));
    assert_eq!(record.business_domain, BusinessDomain::Domestic);
}
