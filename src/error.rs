//! Error types for salesboard
//!
//! Provider and sink failures are fatal for a run. `EmptyGroup` never leaves
//! the engine: it is turned into a "no data" marker on the affected row.

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A mode reducer was asked for the most frequent key of zero lines
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no order lines to compute the most frequent {statistic} from")]
pub struct EmptyGroup {
    pub statistic: &'static str,
}

/// The record provider could not deliver the roster or the order lines
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Missing table: {0}")]
    MissingTable(String),
}

impl ProviderError {
    pub fn database<E: fmt::Display>(err: E) -> Self {
        Self::Database(err.to_string())
    }
}

/// The report sink could not persist the assembled table
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {target} after {attempts} attempts. Last error: {last_error}")]
    RetriesExhausted {
        target: String,
        attempts: u32,
        last_error: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}
