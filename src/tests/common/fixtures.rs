//! Test Fixtures
//!
//! Representative provider payloads and rule files.

use std::io::Write;

use tempfile::NamedTempFile;

// =============================================================================
// Provider Payloads
// =============================================================================

/// Elong payload for a Beijing hotel with a misspelled city in the name.
pub fn elong_beijing() -> String {
    r#"{
        "Result": {
            "Detail": {
                "HotelId": "00101234",
                "HotelName": "北亰王府井希尔顿酒店",
                "HotelNameEn": "Hilton Beijing Wangfujing",
                "CountryName": "中国",
                "CityName": "北京",
                "CityNameEn": "Beijing",
                "DistrictName": "东城区",
                "DistrictNameEn": "Dongcheng",
                "Address": "北京市东城区王府井东街8号",
                "AddressEn": "8 Wangfujing East Street",
                "GoogleLat": "39.9140",
                "GoogleLon": "116.4130",
                "GroupName": "希尔顿集团",
                "GroupNameEn": "Hilton Worldwide",
                "BrandName": "希尔顿",
                "BrandNameEn": "Hilton",
                "IntroEditor": "酒店位于王府井商圈",
                "DescriptionEn": "Steps from Wangfujing shopping street"
            }
        }
    }"#
    .to_string()
}

/// Minimal Elong payload carrying only the Chinese country name.
pub fn elong_minimal_china() -> String {
    r#"{"Result":{"Detail":{"HotelName":"测试酒店","CountryName":"中国"}}}"#.to_string()
}

/// Agoda payload for a Paris hotel.
pub fn agoda_paris() -> String {
    r#"{
        "propertyId": 778899,
        "summary": {
            "propertyName": { "englishName": "Hotel Le Meurice", "localName": "莫里斯酒店" },
            "address": {
                "address1": "228 Rue de Rivoli",
                "address2": "1st arr.",
                "cityName": "Paris",
                "areaName": "Louvre",
                "countryName": "France",
                "regionName": "Europe"
            },
            "countryCode": "FR",
            "coordinate": { "lat": 48.8651, "lng": 2.3281 }
        },
        "description": { "long": "Palace hotel facing the Tuileries Garden" }
    }"#
    .to_string()
}

/// Wrap a payload in one level of JSON string escaping.
pub fn escaped(payload: &str) -> String {
    serde_json::to_string(payload).unwrap()
}

// =============================================================================
// Spelling Rules
// =============================================================================

/// Rule file with one malformed line between two valid ones.
pub const RULES_WITH_BAD_LINE: &str = "\
# city typos
city.beijing = 北亰,北平 | 北京 | 9 | ALL | capital
this line is not a rule
brand.shangrila = shangrila,shangri la | 香格里拉 | 7 | INTL
";

/// Write `contents` to a temporary rule file kept alive by the handle.
pub fn rule_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
