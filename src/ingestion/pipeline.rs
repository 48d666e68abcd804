//! Ingestion Pipeline
//!
//! Raw payload → provider extraction → search enrichment. Records are
//! independent, so batches fan out over a rayon pool; one bad record never
//! affects its neighbours.

use std::io::Read;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::agoda::AgodaExtractor;
use super::elong::ElongExtractor;
use super::error::{IngestionError, Result};
use super::provider::{Provider, ProviderExtractor};
use crate::config::AppConfig;
use crate::core::geography::GeographyResolver;
use crate::core::preprocess::SpellCorrectionEngine;
use crate::core::record::NormalizedHotelRecord;
use crate::core::search::{EnrichedSearchFields, SearchEnrichmentEngine};

/// A canonical record with its derived search fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedHotel {
    #[serde(flatten)]
    pub record: NormalizedHotelRecord,
    pub search: EnrichedSearchFields,
}

impl EnrichedHotel {
    pub fn empty(provider: Provider) -> Self {
        Self {
            record: NormalizedHotelRecord::empty(provider.as_str()),
            search: EnrichedSearchFields::default(),
        }
    }
}

#[derive(Debug)]
pub struct IngestionPipeline {
    elong: ElongExtractor,
    agoda: AgodaExtractor,
    enrichment: SearchEnrichmentEngine,
    pool: Option<rayon::ThreadPool>,
}

impl IngestionPipeline {
    pub fn new(resolver: GeographyResolver, enrichment: SearchEnrichmentEngine) -> Self {
        Self {
            elong: ElongExtractor::new(resolver.clone()),
            agoda: AgodaExtractor::new(resolver),
            enrichment,
            pool: None,
        }
    }

    /// Build every component from application config.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let resolver = config.normalizer.resolver();
        let spellcheck = Arc::new(SpellCorrectionEngine::from_config(config.spellcheck.clone()));
        let enrichment = SearchEnrichmentEngine::from_config(spellcheck, config.enrichment.clone());
        Self::new(resolver, enrichment).with_workers(config.ingestion.workers)
    }

    /// Dedicated pool of `workers` threads; 0 keeps rayon's global pool.
    pub fn with_workers(mut self, workers: usize) -> Result<Self> {
        if workers > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("ingest-{}", i))
                .build()
                .map_err(|e| IngestionError::WorkerPool(e.to_string()))?;
            self.pool = Some(pool);
        }
        Ok(self)
    }

    pub fn enrichment(&self) -> &SearchEnrichmentEngine {
        &self.enrichment
    }

    pub fn extractor(&self, provider: Provider) -> &dyn ProviderExtractor {
        match provider {
            Provider::Elong => &self.elong,
            Provider::Agoda => &self.agoda,
        }
    }

    pub fn extract(&self, provider: Provider, raw: &str) -> NormalizedHotelRecord {
        self.extractor(provider).extract_raw(raw)
    }

    pub fn process(&self, provider: Provider, raw: &str) -> EnrichedHotel {
        let record = self.extract(provider, raw);
        let search = self.enrichment.enrich(&record);
        EnrichedHotel { record, search }
    }

    /// Process records in parallel. Output order matches input order; a
    /// record that panics is replaced by an empty one.
    #[instrument(skip_all, fields(records = items.len()))]
    pub fn process_batch(&self, items: &[(Provider, String)]) -> Vec<EnrichedHotel> {
        let failed = AtomicUsize::new(0);
        let run = || {
            items
                .par_iter()
                .enumerate()
                .map(|(index, (provider, raw))| {
                    self.process_isolated(index, *provider, raw)
                        .unwrap_or_else(|| {
                            failed.fetch_add(1, Ordering::Relaxed);
                            EnrichedHotel::empty(*provider)
                        })
                })
                .collect()
        };
        let hotels: Vec<EnrichedHotel> = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };
        info!(
            processed = hotels.len(),
            failed = failed.load(Ordering::Relaxed),
            "batch complete"
        );
        hotels
    }

    fn process_isolated(&self, index: usize, provider: Provider, raw: &str) -> Option<EnrichedHotel> {
        match catch_unwind(AssertUnwindSafe(|| self.process(provider, raw))) {
            Ok(hotel) => Some(hotel),
            Err(_) => {
                warn!(%provider, index, "record panicked during processing");
                None
            }
        }
    }
}

/// Read a payload from `path`, or stdin when the path is absent or `-`.
pub fn read_payload(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| IngestionError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| IngestionError::Io {
                    path: PathBuf::from("-"),
                    source,
                })?;
            Ok(buffer)
        }
    }
}

/// One payload per non-blank line.
pub fn split_lines(input: &str, provider: Provider) -> Vec<(Provider, String)> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| (provider, line.to_string()))
        .collect()
}
