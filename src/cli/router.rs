//! Command routing and execution
//!
//! This module handles routing CLI commands to their implementations.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing::debug;

use crate::cli::args::Commands;
use crate::config::{Config, ConfigLoader};
use crate::pipeline::{assemble_rows, build_provider, run_report};
use crate::sink::{ReportSink, StdoutSink};

/// Load the configuration a command runs with
pub async fn load_config(path: Option<&Path>) -> Result<Config> {
    ConfigLoader::new()
        .load(path)
        .await
        .context("Failed to load configuration")
}

/// Execute a CLI command against an already-loaded configuration
pub async fn execute_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Report {
            source,
            output,
            format,
            parallel,
            concurrency,
            retries,
            deterministic,
        } => {
            source.apply(&mut config);
            if let Some(output) = output {
                config.report.output = output;
            }
            if format.is_some() {
                config.report.format = format;
            }
            if let Some(retries) = retries {
                config.report.sink_retries = retries;
            }
            if let Some(concurrency) = concurrency {
                config.engine.concurrency = concurrency;
            }
            config.engine.parallel |= parallel;
            config.report.deterministic |= deterministic;

            run_report_command(&config).await
        }
        Commands::Show { source, employee } => {
            source.apply(&mut config);
            run_show_command(&config, employee).await
        }
        Commands::Config { source } => {
            source.apply(&mut config);
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            print!("{rendered}");
            Ok(())
        }
    }
}

async fn run_report_command(config: &Config) -> Result<()> {
    debug!("Running report with {:?}", config);
    let summary = run_report(config).await.context("Report run failed")?;
    println!(
        "Wrote {} employee rows ({} order lines) to {} as {}",
        summary.rows, summary.order_lines, summary.destination, summary.format
    );
    Ok(())
}

async fn run_show_command(config: &Config, employee: Option<i64>) -> Result<()> {
    config.validate()?;
    let provider = build_provider(&config.source).await?;
    let (mut rows, _) = assemble_rows(config, provider.as_ref())
        .await
        .context("Failed to compute statistics")?;

    if let Some(employee_id) = employee {
        rows.retain(|row| row.employee_id == employee_id);
        if rows.is_empty() {
            return Err(anyhow!("Employee {} not found in roster", employee_id));
        }
    }

    StdoutSink.write(&rows).await?;
    Ok(())
}
