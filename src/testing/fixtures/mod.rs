//! Test fixtures and data builders
//!
//! This module provides record fixtures shared by unit tests, integration
//! tests and benchmarks.

pub mod builders;

use std::path::Path;

use crate::models::{Employee, OrderLine};
use crate::provider::csv_file::{EMPLOYEES_FILE, ORDERS_FILE, ORDER_DETAILS_FILE};
use crate::provider::RecordSet;

pub use builders::RecordSetBuilder;

/// Shorthand for a single order line
#[allow(clippy::too_many_arguments)]
pub fn line(
    order_id: i64,
    employee_id: i64,
    customer_id: &str,
    ship_country: &str,
    product_id: i64,
    unit_price: f64,
    quantity: i64,
    discount: f64,
) -> OrderLine {
    OrderLine {
        order_id,
        employee_id,
        customer_id: customer_id.to_string(),
        ship_country: ship_country.to_string(),
        product_id,
        unit_price,
        quantity,
        discount,
    }
}

/// Ann Smith's three lines over orders 100 and 101
pub fn scenario_lines() -> Vec<OrderLine> {
    vec![
        line(100, 1, "C1", "UK", 1, 10.0, 2, 0.0),
        line(100, 1, "C1", "UK", 2, 5.0, 1, 0.0),
        line(101, 1, "C2", "UK", 1, 10.0, 3, 0.1),
    ]
}

pub fn scenario_records() -> RecordSet {
    RecordSet {
        employees: vec![Employee::new(1, "Smith", "Ann")],
        lines: scenario_lines(),
    }
}

/// Deterministic synthetic record set for load and property checks
///
/// Employee ids run from 1; each order gets `lines_per_order` lines.
pub fn synthetic_records(
    employees: usize,
    orders_per_employee: usize,
    lines_per_order: usize,
) -> RecordSet {
    let countries = ["UK", "USA", "Germany", "France", "Brazil"];
    let mut builder = RecordSetBuilder::new();

    for e in 0..employees {
        let employee_id = e as i64 + 1;
        builder = builder.with_employee(
            employee_id,
            &format!("Last{employee_id}"),
            &format!("First{employee_id}"),
        );
    }

    let mut order_id = 10_000;
    for o in 0..orders_per_employee {
        for e in 0..employees {
            order_id += 1;
            let customer = format!("CUST{}", (o * 7 + e) % 23);
            let country = countries[(o + e) % countries.len()];
            builder = builder.with_order(order_id, e as i64 + 1, &customer, country);
            for l in 0..lines_per_order {
                let product_id = ((o * 31 + l * 17 + e) % 77) as i64 + 1;
                let price = 5.0 + (product_id % 10) as f64 * 2.5;
                let quantity = ((o + l) % 20) as i64 + 1;
                let discount = [0.0, 0.05, 0.1, 0.15, 0.2][(o + l) % 5];
                builder = builder.with_line(product_id, price, quantity, discount);
            }
        }
    }

    builder.build()
}

/// Write `records` as the three Northwind-style CSV tables into `dir`
pub fn write_csv_tables(dir: &Path, records: &RecordSet) -> anyhow::Result<()> {
    let mut employees = csv::Writer::from_path(dir.join(EMPLOYEES_FILE))?;
    employees.write_record(["EmployeeID", "LastName", "FirstName"])?;
    for employee in &records.employees {
        employees.write_record([
            employee.employee_id.to_string(),
            employee.last_name.clone(),
            employee.first_name.clone(),
        ])?;
    }
    employees.flush()?;

    let mut orders = csv::Writer::from_path(dir.join(ORDERS_FILE))?;
    orders.write_record(["OrderID", "EmployeeID", "CustomerID", "ShipCountry"])?;
    let mut written = std::collections::HashSet::new();
    for line in &records.lines {
        if written.insert(line.order_id) {
            orders.write_record([
                line.order_id.to_string(),
                line.employee_id.to_string(),
                line.customer_id.clone(),
                line.ship_country.clone(),
            ])?;
        }
    }
    orders.flush()?;

    let mut details = csv::Writer::from_path(dir.join(ORDER_DETAILS_FILE))?;
    details.write_record(["OrderID", "ProductID", "UnitPrice", "Quantity", "Discount"])?;
    for line in &records.lines {
        details.write_record([
            line.order_id.to_string(),
            line.product_id.to_string(),
            line.unit_price.to_string(),
            line.quantity.to_string(),
            line.discount.to_string(),
        ])?;
    }
    details.flush()?;

    Ok(())
}
