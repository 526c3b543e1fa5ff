//! CSV table provider
//!
//! Reads `employees.csv`, `orders.csv` and `order_details.csv` from a data
//! directory and joins details to their orders on `OrderID`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::RecordProvider;
use crate::error::ProviderError;
use crate::models::{Employee, OrderLine};

pub const EMPLOYEES_FILE: &str = "employees.csv";
pub const ORDERS_FILE: &str = "orders.csv";
pub const ORDER_DETAILS_FILE: &str = "order_details.csv";

#[derive(Debug, Deserialize)]
struct EmployeeRecord {
    #[serde(rename = "EmployeeID")]
    employee_id: i64,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "FirstName")]
    first_name: String,
}

#[derive(Debug, Deserialize)]
struct OrderRecord {
    #[serde(rename = "OrderID")]
    order_id: i64,
    #[serde(rename = "EmployeeID")]
    employee_id: i64,
    #[serde(rename = "CustomerID")]
    customer_id: String,
    #[serde(rename = "ShipCountry")]
    ship_country: String,
}

#[derive(Debug, Deserialize)]
struct OrderDetailRecord {
    #[serde(rename = "OrderID")]
    order_id: i64,
    #[serde(rename = "ProductID")]
    product_id: i64,
    #[serde(rename = "UnitPrice")]
    unit_price: f64,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "Discount")]
    discount: f64,
}

/// Provider reading Northwind-style CSV exports from a directory
#[derive(Debug, Clone)]
pub struct CsvProvider {
    data_dir: PathBuf,
}

impl CsvProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn read_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, ProviderError> {
        let path = self.data_dir.join(file);
        let path_str = path.display().to_string();

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ProviderError::Io {
                path: path_str.clone(),
                source,
            })?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes.as_slice());

        let records = reader
            .deserialize()
            .collect::<Result<Vec<T>, _>>()
            .map_err(|source| ProviderError::Csv {
                path: path_str.clone(),
                source,
            })?;

        debug!("Read {} rows from {}", records.len(), path_str);
        Ok(records)
    }
}

#[async_trait]
impl RecordProvider for CsvProvider {
    async fn all_order_lines(&self) -> Result<Vec<OrderLine>, ProviderError> {
        let orders: Vec<OrderRecord> = self.read_table(ORDERS_FILE).await?;
        let details: Vec<OrderDetailRecord> = self.read_table(ORDER_DETAILS_FILE).await?;

        let mut by_id: HashMap<i64, OrderRecord> = HashMap::with_capacity(orders.len());
        for order in orders {
            if by_id.contains_key(&order.order_id) {
                warn!(
                    "Duplicate order {} in {}, keeping the first",
                    order.order_id, ORDERS_FILE
                );
                continue;
            }
            by_id.insert(order.order_id, order);
        }

        let mut unmatched = 0usize;
        let lines: Vec<OrderLine> = details
            .into_iter()
            .filter_map(|detail| {
                let Some(order) = by_id.get(&detail.order_id) else {
                    unmatched += 1;
                    return None;
                };
                Some(OrderLine {
                    order_id: detail.order_id,
                    employee_id: order.employee_id,
                    customer_id: order.customer_id.clone(),
                    ship_country: order.ship_country.clone(),
                    product_id: detail.product_id,
                    unit_price: detail.unit_price,
                    quantity: detail.quantity,
                    discount: detail.discount,
                })
            })
            .collect();

        if unmatched > 0 {
            debug!("Dropped {} order detail rows with no matching order", unmatched);
        }

        Ok(lines)
    }

    async fn all_employees(&self) -> Result<Vec<Employee>, ProviderError> {
        let records: Vec<EmployeeRecord> = self.read_table(EMPLOYEES_FILE).await?;
        Ok(records
            .into_iter()
            .map(|r| Employee::new(r.employee_id, r.last_name, r.first_name))
            .collect())
    }

    fn name(&self) -> String {
        format!("CSV tables in {}", self.data_dir.display())
    }
}
