//! End-to-end report runs: provider, engine and sink wired from a [`Config`]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::{Config, SourceConfig, SourceKind};
use crate::engine::ReportEngine;
use crate::error::{Error, Result};
use crate::models::EmployeeReportRow;
use crate::provider::{CsvProvider, RecordProvider, RecordSet};
use crate::sink::{file_sink, write_with_retry, ReportFormat, ReportSink};

/// Outcome of a completed report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub rows: usize,
    pub order_lines: usize,
    pub destination: String,
    pub format: ReportFormat,
}

/// Create the record provider described by `source`
pub async fn build_provider(source: &SourceConfig) -> Result<Box<dyn RecordProvider>> {
    match source.kind {
        SourceKind::Csv => Ok(Box::new(CsvProvider::new(&source.data_dir))),
        SourceKind::Sqlite => connect_sqlite(source).await,
    }
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(source: &SourceConfig) -> Result<Box<dyn RecordProvider>> {
    let url = source.database_url.as_deref().ok_or_else(|| {
        Error::Config("source.database_url is required for the sqlite source".to_string())
    })?;
    let provider = crate::provider::SqliteProvider::connect(url).await?;
    Ok(Box::new(provider))
}

#[cfg(not(feature = "sqlite"))]
async fn connect_sqlite(_source: &SourceConfig) -> Result<Box<dyn RecordProvider>> {
    Err(Error::Config(
        "this build has no sqlite support; rebuild with --features sqlite".to_string(),
    ))
}

/// Load all records and assemble the report rows in roster order
pub async fn assemble_rows(
    config: &Config,
    provider: &dyn RecordProvider,
) -> Result<(Vec<EmployeeReportRow>, usize)> {
    let records = RecordSet::load(provider).await?;
    let order_lines = records.lines.len();
    let engine = ReportEngine::new(config.engine.concurrency);

    let rows = if config.engine.parallel {
        engine.assemble_parallel(Arc::new(records)).await?
    } else {
        engine.assemble(&records)
    };
    Ok((rows, order_lines))
}

/// Run the whole pipeline and persist the report through `sink`
pub async fn run_report_with(
    config: &Config,
    provider: &dyn RecordProvider,
    sink: &dyn ReportSink,
) -> Result<ReportSummary> {
    config.validate()?;
    let (rows, order_lines) = assemble_rows(config, provider).await?;

    write_with_retry(
        sink,
        &rows,
        config.report.sink_retries,
        Duration::from_millis(config.report.retry_delay_ms),
    )
    .await?;

    let summary = ReportSummary {
        rows: rows.len(),
        order_lines,
        destination: sink.describe(),
        format: config.report.resolved_format(),
    };
    info!(
        "Report complete: {} employees, {} order lines -> {}",
        summary.rows, summary.order_lines, summary.destination
    );
    Ok(summary)
}

/// Run the pipeline using the provider and file sink named in `config`
pub async fn run_report(config: &Config) -> Result<ReportSummary> {
    config.validate()?;
    let provider = build_provider(&config.source).await?;
    let sink = file_sink(
        config.report.resolved_format(),
        PathBuf::from(&config.report.output),
        config.report.deterministic,
    );
    run_report_with(config, provider.as_ref(), sink.as_ref()).await
}
