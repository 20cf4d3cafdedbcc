//! Custom error types for hnscrape.
//!
//! Every failure in a run maps to one of these variants. None of them are
//! recoverable: the pipeline stops at the first one and hands it to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hnscrape operations.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Invalid flag combination or empty term list
    #[error("Config error: {0}")]
    Config(String),

    /// Word list file could not be read
    #[error("Input error: reading {path:?}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Word list file is not a JSON array of strings
    #[error("Input error: parsing {path:?}: {source}")]
    InputFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Search API answered with a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Status text or response body
        message: String,
    },

    /// Search API body is not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Output file could not be created or written
    #[error("Output error: {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias using `ScrapeError`
pub type Result<T> = std::result::Result<T, ScrapeError>;
