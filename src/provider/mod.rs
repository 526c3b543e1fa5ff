//! Record providers
//!
//! A provider supplies the employee roster and the joined order lines. Both
//! are materialized in full before the engine runs.

pub mod csv_file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use async_trait::async_trait;
use tracing::info;

use crate::error::ProviderError;
use crate::models::{Employee, OrderLine};

pub use csv_file::CsvProvider;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteProvider;

/// Source of the roster and order-line records
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Every order line, joined with its parent order
    async fn all_order_lines(&self) -> Result<Vec<OrderLine>, ProviderError>;

    /// The employee roster in its stable listing order
    async fn all_employees(&self) -> Result<Vec<Employee>, ProviderError>;

    /// Human-readable description of the source, for logs
    fn name(&self) -> String;
}

/// Fully materialized input for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub employees: Vec<Employee>,
    pub lines: Vec<OrderLine>,
}

impl RecordSet {
    /// Pull the roster and all order lines from `provider`
    pub async fn load(provider: &dyn RecordProvider) -> Result<Self, ProviderError> {
        let employees = provider.all_employees().await?;
        let lines = provider.all_order_lines().await?;

        info!(
            "Loaded {} employees and {} order lines from {}",
            employees.len(),
            lines.len(),
            provider.name()
        );

        Ok(Self { employees, lines })
    }
}

/// Provider over records already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    records: RecordSet,
}

impl From<RecordSet> for InMemoryProvider {
    fn from(records: RecordSet) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordProvider for InMemoryProvider {
    async fn all_order_lines(&self) -> Result<Vec<OrderLine>, ProviderError> {
        Ok(self.records.lines.clone())
    }

    async fn all_employees(&self) -> Result<Vec<Employee>, ProviderError> {
        Ok(self.records.employees.clone())
    }

    fn name(&self) -> String {
        "in-memory records".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::scenario_records;

    struct BrokenProvider;

    #[async_trait]
    impl RecordProvider for BrokenProvider {
        async fn all_order_lines(&self) -> Result<Vec<OrderLine>, ProviderError> {
            Err(ProviderError::MissingTable("Order Details".to_string()))
        }

        async fn all_employees(&self) -> Result<Vec<Employee>, ProviderError> {
            Ok(vec![Employee::new(1, "Smith", "Ann")])
        }

        fn name(&self) -> String {
            "broken".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_from_memory() {
        let provider = InMemoryProvider::from(scenario_records());
        let records = RecordSet::load(&provider).await.unwrap();
        assert_eq!(records, scenario_records());
    }

    #[tokio::test]
    async fn test_load_fails_when_lines_unavailable() {
        let err = RecordSet::load(&BrokenProvider).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingTable(table) if table == "Order Details"));
    }
}
