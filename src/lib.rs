//! # Salesboard
//!
//! Computes per-salesperson performance statistics from order-line records
//! and writes them out as a report table.
//!
//! ## Usage
//!
//! ```bash
//! salesboard report [--data-dir DIR | --database URL] [-o FILE] [--format csv|json] [--parallel]
//! ```
//!
//! ## Modules
//!
//! - `models` - Employee, order-line and report row types
//! - `engine` - Per-employee filtering, reducers and report assembly
//! - `provider` - Record providers (in-memory, CSV tables, SQLite)
//! - `sink` - Report sinks (CSV, JSON, terminal table) and write retries
//! - `pipeline` - End-to-end runs wired from configuration
//! - `config` - Configuration loading and environment overrides
//! - `cli` - Command-line argument parsing and command routing
//! - `testing` - Fixtures and test doubles
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod provider;
pub mod sink;

pub mod testing;

#[cfg(test)]
mod property_tests;

pub use error::{Error, Result};
