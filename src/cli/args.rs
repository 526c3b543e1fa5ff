//! CLI argument structures
//!
//! This module defines the command-line interface of salesboard.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, SourceKind};
use crate::sink::ReportFormat;

/// Per-salesperson performance statistics from order records
#[derive(Parser)]
#[command(name = "salesboard")]
#[command(
    about = "salesboard - Per-salesperson performance statistics from order records",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute employee statistics and write the report file
    #[command(name = "report")]
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Report file to write
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Report format (csv or json); defaults to the output extension
        #[arg(short = 'f', long)]
        format: Option<ReportFormat>,

        /// Compute employees concurrently
        #[arg(long)]
        parallel: bool,

        /// Number of employees computed at once with --parallel
        #[arg(long)]
        concurrency: Option<usize>,

        /// Retry attempts when writing the report fails
        #[arg(long)]
        retries: Option<u32>,

        /// Leave timestamps out of the report so reruns are identical
        #[arg(long)]
        deterministic: bool,
    },

    /// Print the statistics table to stdout
    #[command(name = "show")]
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Only show this employee
        #[arg(short = 'e', long, value_name = "EMPLOYEE_ID")]
        employee: Option<i64>,
    },

    /// Print the effective configuration as TOML
    #[command(name = "config")]
    Config {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where records are read from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory with employees.csv, orders.csv and order_details.csv
    #[arg(short = 'd', long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// SQLite database URL (e.g. sqlite://Northwind.db)
    #[arg(long, value_name = "URL", conflicts_with = "data_dir")]
    pub database: Option<String>,
}

impl SourceArgs {
    /// Apply these flags on top of `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(data_dir) = &self.data_dir {
            config.source.kind = SourceKind::Csv;
            config.source.data_dir = data_dir.clone();
        }
        if let Some(url) = &self.database {
            config.source.kind = SourceKind::Sqlite;
            config.source.database_url = Some(url.clone());
        }
    }
}
