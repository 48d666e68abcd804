//! Normalized Hotel Record
//!
//! Canonical bilingual hotel representation produced by provider extraction.

use serde::{Deserialize, Serialize};

use crate::core::language::BilingualField;

/// Coarse routing label derived from a hotel's country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessDomain {
    /// Mainland China
    Domestic,
    /// Hong Kong, Macau, Taiwan
    Territory,
    #[default]
    International,
}

/// Country codes tagged as territory.
pub const TERRITORY_CODES: &[&str] = &["HK", "MO", "TW"];
pub const DOMESTIC_CODE: &str = "CN";

impl BusinessDomain {
    pub fn from_country_code(code: &str) -> Self {
        let code = code.trim();
        if code.eq_ignore_ascii_case(DOMESTIC_CODE) {
            Self::Domestic
        } else if TERRITORY_CODES.iter().any(|c| c.eq_ignore_ascii_case(code)) {
            Self::Territory
        } else {
            Self::International
        }
    }

    /// Spelling-rule domain scoped to this label.
    pub fn as_rule_domain(&self) -> &'static str {
        match self {
            Self::Domestic => "CN",
            Self::Territory => "HMT",
            Self::International => "INTL",
        }
    }
}

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Both values must be finite and in range; otherwise there is no point.
    pub fn validated(lat: f64, lon: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        valid.then_some(Self { lat, lon })
    }

    /// Parse provider text; any unparseable or out-of-range value yields `None`.
    pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Option<Self> {
        let lat = lat?.trim().parse::<f64>().ok()?;
        let lon = lon?.trim().parse::<f64>().ok()?;
        Self::validated(lat, lon)
    }
}

/// Canonical hotel record. Produced once per payload and not modified after.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedHotelRecord {
    /// Provider the payload came from
    pub provider: String,
    pub source_id: Option<String>,
    pub name: BilingualField,
    pub country: BilingualField,
    pub country_code: Option<String>,
    pub city: BilingualField,
    pub region: BilingualField,
    pub continent: BilingualField,
    pub address: BilingualField,
    pub group: BilingualField,
    pub brand: BilingualField,
    pub description: BilingualField,
    pub location: Option<GeoPoint>,
    pub business_domain: BusinessDomain,
}

impl NormalizedHotelRecord {
    /// Record returned when a payload cannot be read at all.
    pub fn empty(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}
