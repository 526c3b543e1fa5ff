//! Report sinks
//!
//! A sink persists the assembled rows. Rows are borrowed so a failed write
//! leaves the in-memory table intact for another attempt.

pub mod csv_file;
pub mod json_file;
pub mod retry;
pub mod table;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::SinkError;
use crate::models::EmployeeReportRow;

pub use csv_file::CsvSink;
pub use json_file::JsonSink;
pub use retry::write_with_retry;
pub use table::{render_table, StdoutSink};

#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Persist all rows, in the order given
    async fn write(&self, rows: &[EmployeeReportRow]) -> Result<(), SinkError>;

    /// Where the rows end up, for logs and messages
    fn describe(&self) -> String;
}

/// On-disk report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("Unsupported report format: {other}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Build the file sink for `format` writing to `path`
pub fn file_sink(format: ReportFormat, path: PathBuf, deterministic: bool) -> Box<dyn ReportSink> {
    match format {
        ReportFormat::Csv => Box::new(CsvSink::new(path)),
        ReportFormat::Json => Box::new(JsonSink::new(path).deterministic(deterministic)),
    }
}

/// Write `bytes` to `path`, creating parent directories as needed
pub(crate) async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), SinkError> {
    let io_err = |source| SinkError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    tokio::fs::write(path, bytes).await.map_err(io_err)
}
