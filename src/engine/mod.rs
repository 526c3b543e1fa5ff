//! Report engine
//!
//! Groups order lines by employee and runs the four reducers against each
//! employee's lines, producing one report row per roster entry.

pub mod filter;
pub mod reducers;

use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{EmptyGroup, Result};
use crate::models::{Employee, EmployeeReportRow, EmployeeStats, OrderLine};
use crate::provider::RecordSet;

pub use filter::lines_for_employee;

/// Computes per-employee statistics from a materialized record set
#[derive(Debug, Clone)]
pub struct ReportEngine {
    concurrency: usize,
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ReportEngine {
    /// Create an engine; `concurrency` bounds in-flight employees for
    /// [`ReportEngine::assemble_parallel`]
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Build the report sequentially, one row per employee in roster order
    pub fn assemble(&self, records: &RecordSet) -> Vec<EmployeeReportRow> {
        let rows: Vec<EmployeeReportRow> = records
            .employees
            .iter()
            .map(|employee| build_row(&records.lines, employee))
            .collect();

        info!(
            "Assembled {} report rows from {} order lines",
            rows.len(),
            records.lines.len()
        );
        rows
    }

    /// Build the report with employees computed concurrently
    ///
    /// Rows come back in roster order regardless of completion order.
    pub async fn assemble_parallel(
        &self,
        records: Arc<RecordSet>,
    ) -> Result<Vec<EmployeeReportRow>> {
        let tasks = (0..records.employees.len()).map(|idx| {
            let records = Arc::clone(&records);
            tokio::task::spawn_blocking(move || build_row(&records.lines, &records.employees[idx]))
        });

        let rows: Vec<EmployeeReportRow> = stream::iter(tasks)
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        info!(
            "Assembled {} report rows from {} order lines ({} workers)",
            rows.len(),
            records.lines.len(),
            self.concurrency
        );
        Ok(rows)
    }
}

/// Statistics for a single employee, scanning the full line collection
pub fn employee_stats(lines: &[OrderLine], employee: &Employee) -> EmployeeStats {
    let own = lines_for_employee(lines, employee.employee_id);
    compute_stats(employee, &own)
}

fn build_row(lines: &[OrderLine], employee: &Employee) -> EmployeeReportRow {
    EmployeeReportRow::new(employee, employee_stats(lines, employee))
}

/// Run all reducers over lines already filtered to `employee`
fn compute_stats(employee: &Employee, own: &[OrderLine]) -> EmployeeStats {
    let totals = reducers::totals(own);
    if !totals.revenue.is_finite() {
        warn!(
            "Employee {} revenue is {} (malformed order line values)",
            employee.employee_id, totals.revenue
        );
    }

    let stats = EmployeeStats {
        totals,
        top_product: no_data_on_empty(employee, reducers::top_product(own)),
        top_customer: no_data_on_empty(employee, reducers::top_customer(own)),
        top_country: no_data_on_empty(employee, reducers::top_country(own)),
    };

    debug!(
        "Employee {} ({} {}): {} lines, {} orders, {} items, revenue {:.2}",
        employee.employee_id,
        employee.first_name,
        employee.last_name,
        own.len(),
        stats.totals.order_count,
        stats.totals.item_count,
        stats.totals.revenue
    );
    stats
}

fn no_data_on_empty<T>(
    employee: &Employee,
    result: std::result::Result<T, EmptyGroup>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("Employee {}: {}", employee.employee_id, err);
            None
        }
    }
}
