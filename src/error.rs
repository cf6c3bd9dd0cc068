use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to write fixture file {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read fixture file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type FixtureResult<T> = Result<T, FixtureError>;
