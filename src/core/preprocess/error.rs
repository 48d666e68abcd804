//! Preprocessing error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("Rule file not found: {0}")]
    RulesNotFound(PathBuf),

    #[error("Failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid serialized rules: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid rule '{id}': {reason}")]
    InvalidRule { id: String, reason: String },
}

pub type PreprocessResult<T> = std::result::Result<T, PreprocessError>;
