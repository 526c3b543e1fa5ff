//! Configuration for salesboard runs
//!
//! Values come from a TOML file, then `SALESBOARD_*` environment variables,
//! then command-line flags, each layer overriding the previous one.

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

use crate::sink::ReportFormat;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "salesboard.toml";

pub fn get_global_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "salesboard", "salesboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow!("Could not determine home directory"))
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    pub source: SourceConfig,
    pub report: ReportConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Csv,
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Directory holding employees.csv, orders.csv and order_details.csv
    pub data_dir: PathBuf,
    /// e.g. `sqlite://Northwind.db`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub output: PathBuf,
    /// Defaults to the output file extension, then CSV
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    pub sink_retries: u32,
    pub retry_delay_ms: u64,
    /// Omit run timestamps so identical input yields identical files
    pub deterministic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub parallel: bool,
    pub concurrency: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Csv,
            data_dir: PathBuf::from("data"),
            database_url: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("Employee_Stats.csv"),
            format: None,
            sink_retries: 2,
            retry_delay_ms: 500,
            deterministic: false,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            concurrency: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

impl ReportConfig {
    pub fn resolved_format(&self) -> ReportFormat {
        self.format
            .or_else(|| ReportFormat::from_path(&self.output))
            .unwrap_or_default()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, which maps variable names to values
    pub fn merge_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_dir) = lookup("SALESBOARD_DATA_DIR") {
            self.source.data_dir = PathBuf::from(data_dir);
        }

        if let Some(url) = lookup("SALESBOARD_DATABASE_URL") {
            self.source.kind = SourceKind::Sqlite;
            self.source.database_url = Some(url);
        }

        if let Some(output) = lookup("SALESBOARD_OUTPUT") {
            self.report.output = PathBuf::from(output);
        }

        if let Some(format) = lookup("SALESBOARD_FORMAT") {
            match format.parse::<ReportFormat>() {
                Ok(format) => self.report.format = Some(format),
                Err(err) => tracing::warn!("Ignoring SALESBOARD_FORMAT: {}", err),
            }
        }

        if let Some(log_level) = lookup("SALESBOARD_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.engine.concurrency == 0 {
            return Err(crate::Error::Config(
                "engine.concurrency must be at least 1".to_string(),
            ));
        }

        if self.source.kind == SourceKind::Sqlite {
            if self.source.database_url.is_none() {
                return Err(crate::Error::Config(
                    "source.database_url is required for the sqlite source".to_string(),
                ));
            }
            if !cfg!(feature = "sqlite") {
                return Err(crate::Error::Config(
                    "this build has no sqlite support; rebuild with --features sqlite".to_string(),
                ));
            }
        }

        Ok(())
    }
}
