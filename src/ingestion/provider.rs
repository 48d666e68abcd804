//! Provider Selection
//!
//! Upstream schema identifiers and the extractor trait each schema
//! implements.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::IngestionError;
use super::payload;
use crate::core::record::{BusinessDomain, NormalizedHotelRecord};

/// Upstream travel-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Domestic schema (`Result.Detail.*`)
    Elong,
    /// International schema (`summary.*`)
    #[default]
    Agoda,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Elong, Provider::Agoda];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elong => "elong",
            Self::Agoda => "agoda",
        }
    }

    /// Case-insensitive lookup; unknown or blank names select Agoda.
    pub fn lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("Unknown provider {:?}; using agoda", name);
            Self::Agoda
        })
    }
}

impl FromStr for Provider {
    type Err = IngestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| IngestionError::UnknownProvider(s.to_string()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps one provider's payload tree into a canonical record.
pub trait ProviderExtractor: Send + Sync {
    fn provider(&self) -> Provider;

    /// Extract from a decoded payload. Never fails; missing paths stay empty.
    fn extract(&self, root: &Value) -> NormalizedHotelRecord;

    /// Decode then extract. Undecodable payloads yield an empty record.
    fn extract_raw(&self, raw: &str) -> NormalizedHotelRecord {
        match payload::decode(raw) {
            Ok(root) => self.extract(&root),
            Err(e) => {
                log::debug!("[{}] payload not decodable: {}", self.provider(), e);
                NormalizedHotelRecord::empty(self.provider().as_str())
            }
        }
    }
}

/// Business domain for an extracted record: code first, then the English
/// country name resolved through `resolve_code`.
pub(crate) fn business_domain_of<F>(record: &NormalizedHotelRecord, resolve_code: F) -> BusinessDomain
where
    F: Fn(&str) -> Option<&'static str>,
{
    if let Some(code) = record.country_code.as_deref() {
        return BusinessDomain::from_country_code(code);
    }
    record
        .country
        .english()
        .and_then(resolve_code)
        .map(BusinessDomain::from_country_code)
        .unwrap_or_default()
}
