//! SQLite provider for Northwind databases

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::debug;

use super::RecordProvider;
use crate::error::ProviderError;
use crate::models::{Employee, OrderLine};

const REQUIRED_TABLES: [&str; 3] = ["Employees", "Orders", "Order Details"];

const ORDER_LINES_QUERY: &str = r#"
SELECT o.OrderID AS order_id,
       o.EmployeeID AS employee_id,
       COALESCE(o.CustomerID, '') AS customer_id,
       COALESCE(o.ShipCountry, '') AS ship_country,
       d.ProductID AS product_id,
       CAST(d.UnitPrice AS REAL) AS unit_price,
       CAST(d.Quantity AS INTEGER) AS quantity,
       CAST(d.Discount AS REAL) AS discount
FROM Orders o
JOIN "Order Details" d ON o.OrderID = d.OrderID
ORDER BY d.rowid
"#;

const EMPLOYEES_QUERY: &str =
    "SELECT EmployeeID, LastName, FirstName FROM Employees ORDER BY rowid";

#[derive(Debug, sqlx::FromRow)]
struct LineRow {
    order_id: i64,
    employee_id: i64,
    customer_id: String,
    ship_country: String,
    product_id: i64,
    unit_price: f64,
    quantity: i64,
    discount: f64,
}

impl From<LineRow> for OrderLine {
    fn from(row: LineRow) -> Self {
        Self {
            order_id: row.order_id,
            employee_id: row.employee_id,
            customer_id: row.customer_id,
            ship_country: row.ship_country,
            product_id: row.product_id,
            unit_price: row.unit_price,
            quantity: row.quantity,
            discount: row.discount,
        }
    }
}

/// Provider running the Orders/Order Details join against SQLite
#[derive(Debug, Clone)]
pub struct SqliteProvider {
    pool: SqlitePool,
    url: String,
}

impl SqliteProvider {
    /// Connect and check that the Northwind tables exist
    pub async fn connect(url: &str) -> Result<Self, ProviderError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(ProviderError::database)?;

        let provider = Self {
            pool,
            url: url.to_string(),
        };
        provider.check_tables().await?;
        Ok(provider)
    }

    async fn check_tables(&self) -> Result<(), ProviderError> {
        for table in REQUIRED_TABLES {
            let found: Option<(String,)> =
                sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
                    .bind(table)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(ProviderError::database)?;

            if found.is_none() {
                return Err(ProviderError::MissingTable(table.to_string()));
            }
        }
        debug!("Found Northwind tables in {}", self.url);
        Ok(())
    }
}

#[async_trait]
impl RecordProvider for SqliteProvider {
    async fn all_order_lines(&self) -> Result<Vec<OrderLine>, ProviderError> {
        let rows: Vec<LineRow> = sqlx::query_as(ORDER_LINES_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(ProviderError::database)?;

        Ok(rows.into_iter().map(OrderLine::from).collect())
    }

    async fn all_employees(&self) -> Result<Vec<Employee>, ProviderError> {
        let rows: Vec<(i64, String, String)> = sqlx::query_as(EMPLOYEES_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(ProviderError::database)?;

        Ok(rows
            .into_iter()
            .map(|(employee_id, last_name, first_name)| {
                Employee::new(employee_id, last_name, first_name)
            })
            .collect())
    }

    fn name(&self) -> String {
        format!("SQLite database {}", self.url)
    }
}
