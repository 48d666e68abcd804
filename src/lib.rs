/// hotel-enrich - Hotel Record Normalization & Search Enrichment
///
/// Turns heterogeneous provider payloads into canonical bilingual hotel
/// records and derives the tokens, keywords, entities and transliterations
/// the search index needs.

pub mod config;
pub mod core;
pub mod ingestion;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
