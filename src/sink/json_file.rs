use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use super::{write_file, ReportSink};
use crate::error::SinkError;
use crate::models::EmployeeReportRow;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<DateTime<Utc>>,
    rows: &'a [EmployeeReportRow],
}

/// Writes the report as a pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
    deterministic: bool,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            deterministic: false,
        }
    }

    /// Leave out the generation timestamp so reruns produce identical files
    pub fn deterministic(mut self, deterministic: bool) -> Self {
        self.deterministic = deterministic;
        self
    }

    pub fn encode(&self, rows: &[EmployeeReportRow]) -> Result<Vec<u8>, SinkError> {
        let report = JsonReport {
            generated_at: (!self.deterministic).then(Utc::now),
            rows,
        };
        let mut bytes = serde_json::to_vec_pretty(&report)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[async_trait]
impl ReportSink for JsonSink {
    async fn write(&self, rows: &[EmployeeReportRow]) -> Result<(), SinkError> {
        let bytes = self.encode(rows)?;
        write_file(&self.path, &bytes).await?;
        info!("Wrote {} rows to {}", rows.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ReportEngine;
    use crate::models::Employee;
    use crate::testing::scenario_records;

    #[test]
    fn test_encode_uses_report_headers_and_nulls() {
        let mut records = scenario_records();
        records.employees.push(Employee::new(2, "Fuller", "Andrew"));
        let rows = ReportEngine::default().assemble(&records);

        let sink = JsonSink::new("unused.json").deterministic(true);
        let value: serde_json::Value =
            serde_json::from_slice(&sink.encode(&rows).unwrap()).unwrap();

        assert!(value.get("generated_at").is_none());
        assert_eq!(value["rows"][0]["Most Sold Cust. ID"], "C1");
        assert_eq!(value["rows"][0]["No. of Orders"], 2);
        assert!(value["rows"][1]["Most Sold Item ID"].is_null());
    }

    #[test]
    fn test_timestamp_included_by_default() {
        let rows = ReportEngine::default().assemble(&scenario_records());
        let value: serde_json::Value =
            serde_json::from_slice(&JsonSink::new("unused.json").encode(&rows).unwrap()).unwrap();
        assert!(value["generated_at"].is_string());
    }
}
