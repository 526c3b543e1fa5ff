//! Test data builders for record sets

use crate::models::{Employee, OrderLine};
use crate::provider::RecordSet;

/// Builder for record sets where every order keeps a single employee,
/// customer and ship country across its lines
#[derive(Default)]
pub struct RecordSetBuilder {
    records: RecordSet,
    current: Option<OrderHeader>,
}

struct OrderHeader {
    order_id: i64,
    employee_id: i64,
    customer_id: String,
    ship_country: String,
}

impl RecordSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(mut self, employee_id: i64, last_name: &str, first_name: &str) -> Self {
        self.records
            .employees
            .push(Employee::new(employee_id, last_name, first_name));
        self
    }

    /// Start a new order; subsequent `with_line` calls belong to it
    pub fn with_order(
        mut self,
        order_id: i64,
        employee_id: i64,
        customer_id: &str,
        ship_country: &str,
    ) -> Self {
        self.current = Some(OrderHeader {
            order_id,
            employee_id,
            customer_id: customer_id.to_string(),
            ship_country: ship_country.to_string(),
        });
        self
    }

    /// Add a line to the current order
    ///
    /// # Panics
    ///
    /// Panics if no order has been started.
    pub fn with_line(
        mut self,
        product_id: i64,
        unit_price: f64,
        quantity: i64,
        discount: f64,
    ) -> Self {
        let header = self
            .current
            .as_ref()
            .expect("with_order must be called before with_line");
        self.records.lines.push(OrderLine {
            order_id: header.order_id,
            employee_id: header.employee_id,
            customer_id: header.customer_id.clone(),
            ship_country: header.ship_country.clone(),
            product_id,
            unit_price,
            quantity,
            discount,
        });
        self
    }

    pub fn build(self) -> RecordSet {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_inherit_order_header() {
        let records = RecordSetBuilder::new()
            .with_employee(5, "Buchanan", "Steven")
            .with_order(10248, 5, "VINET", "France")
            .with_line(11, 14.0, 12, 0.0)
            .with_line(42, 9.8, 10, 0.0)
            .build();

        assert_eq!(records.employees.len(), 1);
        assert_eq!(records.lines.len(), 2);
        assert!(records.lines.iter().all(|l| {
            l.order_id == 10248 && l.customer_id == "VINET" && l.ship_country == "France"
        }));
    }
}
