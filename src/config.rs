use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::geography::{GeographyCatalog, GeographyResolver};
use crate::core::normalize::{
    AliasNormalizer, DEFAULT_CONTINENT_STOPWORDS, DEFAULT_COUNTRY_STOPWORDS,
};
use crate::core::preprocess::SpellCheckConfig;
use crate::core::search::EnrichmentConfig;
use crate::ingestion::Provider;

const APP_DIR: &str = "hotel-enrich";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub normalizer: NormalizerConfig,
    pub spellcheck: SpellCheckConfig,
    pub enrichment: EnrichmentConfig,
    pub ingestion: IngestionConfig,
    pub logging: LoggingConfig,
}

/// Stopwords elided from geography alias keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub country_stopwords: Vec<String>,
    pub continent_stopwords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Provider used when none is given on the command line.
    pub default_provider: Provider,
    /// Batch worker threads; 0 uses rayon's global pool.
    pub workers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    /// Write JSON logs to daily files under the data directory.
    pub json_file: bool,
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            country_stopwords: DEFAULT_COUNTRY_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            continent_stopwords: DEFAULT_CONTINENT_STOPWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl NormalizerConfig {
    /// Resolver over the shared catalog, or over a private one when the
    /// stopwords differ from the built-in sets.
    pub fn resolver(&self) -> GeographyResolver {
        if *self == Self::default() {
            return GeographyResolver::global();
        }
        log::info!("Building geography catalog with custom stopwords");
        let catalog = GeographyCatalog::with_normalizers(
            AliasNormalizer::new(&self.country_stopwords),
            AliasNormalizer::new(&self.continent_stopwords),
        );
        GeographyResolver::new(catalog.into())
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            default_provider: Provider::Agoda,
            workers: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_file: true,
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/hotel-enrich/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        if !config_path.exists() {
            log::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. Unlike [`AppConfig::load`], failures are
    /// reported to the caller.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.logging.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
