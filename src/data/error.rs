//! Error types for report ingestion

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a report
#[derive(Debug, Error)]
pub enum DataError {
    /// Report file could not be opened
    #[error("Cannot open report '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Header row lacks a required column
    #[error("Report is missing required column '{0}'")]
    MissingColumn(String),

    /// A record could not be converted into a typed row
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    /// Low-level CSV failure (bad quoting, I/O while reading)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No row matched the requested creative id
    #[error("No creative matches '{0}'")]
    NotFound(String),

    /// An id suffix matched more than one row
    #[error("'{query}' matches {count} creatives; use a longer id")]
    Ambiguous { query: String, count: usize },
}
