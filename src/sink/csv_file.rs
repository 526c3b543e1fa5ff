use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use super::{write_file, ReportSink};
use crate::error::SinkError;
use crate::models::EmployeeReportRow;

/// Writes the report as a CSV file with a header row
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Encode rows without touching the filesystem
    pub fn encode(rows: &[EmployeeReportRow]) -> Result<Vec<u8>, SinkError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(EmployeeReportRow::HEADERS)?;
        for row in rows {
            writer.write_record(row.cells())?;
        }
        writer.into_inner().map_err(|err| SinkError::Io {
            path: "<buffer>".to_string(),
            source: err.into_error(),
        })
    }
}

#[async_trait]
impl ReportSink for CsvSink {
    async fn write(&self, rows: &[EmployeeReportRow]) -> Result<(), SinkError> {
        let bytes = Self::encode(rows)?;
        write_file(&self.path, &bytes).await?;
        info!("Wrote {} rows to {}", rows.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
