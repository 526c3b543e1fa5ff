//! Common test utilities and helpers

use anyhow::Result;
use salesboard::provider::RecordSet;
use salesboard::testing::fixtures::write_csv_tables;
use salesboard::testing::RecordSetBuilder;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary data directory holding Northwind-style CSV tables
pub struct DataDir {
    temp_dir: TempDir,
}

impl DataDir {
    pub fn with_records(records: &RecordSet) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        write_csv_tables(temp_dir.path(), records)?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A path inside the directory for report output
    pub fn output(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// Three employees; Janet Leverling has no orders
pub fn small_northwind() -> RecordSet {
    RecordSetBuilder::new()
        .with_employee(1, "Davolio", "Nancy")
        .with_employee(2, "Fuller", "Andrew")
        .with_employee(3, "Leverling", "Janet")
        .with_order(10248, 2, "VINET", "France")
        .with_line(11, 14.0, 12, 0.0)
        .with_line(42, 9.8, 10, 0.0)
        .with_line(72, 34.8, 5, 0.0)
        .with_order(10249, 1, "TOMSP", "Germany")
        .with_line(14, 18.6, 9, 0.0)
        .with_line(51, 42.4, 40, 0.0)
        .with_order(10250, 1, "HANAR", "Brazil")
        .with_line(41, 7.7, 10, 0.0)
        .with_line(51, 42.4, 35, 0.15)
        .with_line(65, 16.8, 15, 0.15)
        .with_order(10251, 1, "TOMSP", "Germany")
        .with_line(22, 16.8, 6, 0.05)
        .build()
}
