use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProofsheetError {
    #[error("Unknown file type for file {path:?}")]
    UnknownFileType { path: PathBuf },

    #[error("Error parsing font: {0}")]
    ParseFailed(#[from] skrifa::raw::ReadError),

    #[error("Font parse did not finish within {millis}ms")]
    ParseTimeout { millis: u64 },

    #[error("Font parser stopped without producing a result")]
    ParseAborted,

    #[error("IO Error: {0}")]
    IO(#[from] io::Error),

    #[error("Error reading or writing proof state: {0}")]
    Persist(#[from] serde_json::Error),
}
