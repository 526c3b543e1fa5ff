//! Testing utilities and fixtures
//!
//! This module provides record builders, canned scenarios and an in-memory
//! sink for testing the salesboard pipeline.

pub mod fixtures;

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::error::SinkError;
use crate::models::EmployeeReportRow;
use crate::sink::ReportSink;

pub use fixtures::{line, scenario_lines, scenario_records, synthetic_records, RecordSetBuilder};

/// Sink that keeps written rows in memory and can fail a number of times first
#[derive(Default)]
pub struct MemorySink {
    rows: Mutex<Vec<EmployeeReportRow>>,
    failures_left: AtomicU32,
    attempts: AtomicU32,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the first `failures` writes with an I/O error
    pub fn failing(failures: u32) -> Self {
        Self {
            failures_left: AtomicU32::new(failures),
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<EmployeeReportRow> {
        self.rows.lock().map(|rows| rows.clone()).unwrap_or_default()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportSink for MemorySink {
    async fn write(&self, rows: &[EmployeeReportRow]) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let should_fail = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(SinkError::Io {
                path: self.describe(),
                source: std::io::Error::other("simulated write failure"),
            });
        }

        if let Ok(mut stored) = self.rows.lock() {
            *stored = rows.to_vec();
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
