//! Provider Ingestion
//!
//! Turns raw upstream payloads into canonical, enriched hotel records.

pub mod agoda;
pub mod elong;
pub mod error;
pub mod payload;
pub mod pipeline;
pub mod provider;

pub use agoda::AgodaExtractor;
pub use elong::ElongExtractor;
pub use error::{IngestionError, Result};
pub use pipeline::{read_payload, split_lines, EnrichedHotel, IngestionPipeline};
pub use provider::{Provider, ProviderExtractor};
