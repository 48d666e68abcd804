//! Geography Resolution
//!
//! Static country/continent catalog with an alias index built once per
//! process. Lookups never fail loudly: a miss is `None`.

mod catalog;
mod data;
mod resolver;

pub use catalog::{AliasCollision, GeographyCatalog};
pub use data::{ContinentEntry, CountryEntry, CONTINENTS, COUNTRIES, LEGACY_CODES};
pub use resolver::GeographyResolver;

use serde::{Deserialize, Serialize};

/// Continent reference carried by every country row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Continent {
    Asia,
    Europe,
    Africa,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}
