mod exporter;

use std::path::PathBuf;

use thiserror::Error;

pub use exporter::{ExportOutcome, Exporter};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("filesystem error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
