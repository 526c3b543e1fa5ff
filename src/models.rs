//! Data models for order lines, the employee roster and derived statistics

use serde::{Deserialize, Serialize};

/// A salesperson from the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: i64,
    pub last_name: String,
    pub first_name: String,
}

impl Employee {
    pub fn new(
        employee_id: i64,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }
}

/// One product entry of an order, joined with its parent order
///
/// All lines sharing an `order_id` carry the same employee, customer and
/// ship country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: i64,
    pub employee_id: i64,
    pub customer_id: String,
    pub ship_country: String,
    pub product_id: i64,
    pub unit_price: f64,
    pub quantity: i64,
    pub discount: f64,
}

impl OrderLine {
    /// Currency amount of this line after discount
    pub fn revenue(&self) -> f64 {
        self.unit_price * self.quantity as f64 * (1.0 - self.discount)
    }
}

/// Distinct orders, units and revenue for one employee
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub order_count: u64,
    pub item_count: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCustomer {
    pub customer_id: String,
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCountry {
    pub country: String,
    pub orders: u64,
}

/// Everything computed for a single employee
///
/// The `top_*` fields are `None` when the employee has no order lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub totals: Totals,
    pub top_product: Option<TopProduct>,
    pub top_customer: Option<TopCustomer>,
    pub top_country: Option<TopCountry>,
}

/// One row of the final report, in fixed column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeReportRow {
    #[serde(rename = "Employee ID")]
    pub employee_id: i64,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Total Sales")]
    pub revenue: f64,
    #[serde(rename = "No. Items Sold")]
    pub item_count: i64,
    #[serde(rename = "No. of Orders")]
    pub order_count: u64,
    #[serde(rename = "Most Sold Item ID")]
    pub top_product_id: Option<i64>,
    #[serde(rename = "Most Sold Item Qty")]
    pub top_product_qty: Option<i64>,
    #[serde(rename = "Most Sold Cust. ID")]
    pub top_customer_id: Option<String>,
    #[serde(rename = "Most Sold Cust. Amt")]
    pub top_customer_orders: Option<u64>,
    #[serde(rename = "Most Sold Country")]
    pub top_country: Option<String>,
    #[serde(rename = "Most Sold Country Amt")]
    pub top_country_orders: Option<u64>,
}

impl EmployeeReportRow {
    /// Column headers in report order
    pub const HEADERS: [&'static str; 12] = [
        "Employee ID",
        "Last Name",
        "First Name",
        "Total Sales",
        "No. Items Sold",
        "No. of Orders",
        "Most Sold Item ID",
        "Most Sold Item Qty",
        "Most Sold Cust. ID",
        "Most Sold Cust. Amt",
        "Most Sold Country",
        "Most Sold Country Amt",
    ];

    pub fn new(employee: &Employee, stats: EmployeeStats) -> Self {
        let EmployeeStats {
            totals,
            top_product,
            top_customer,
            top_country,
        } = stats;

        Self {
            employee_id: employee.employee_id,
            last_name: employee.last_name.clone(),
            first_name: employee.first_name.clone(),
            revenue: totals.revenue,
            item_count: totals.item_count,
            order_count: totals.order_count,
            top_product_id: top_product.map(|p| p.product_id),
            top_product_qty: top_product.map(|p| p.quantity),
            top_customer_orders: top_customer.as_ref().map(|c| c.orders),
            top_customer_id: top_customer.map(|c| c.customer_id),
            top_country_orders: top_country.as_ref().map(|c| c.orders),
            top_country: top_country.map(|c| c.country),
        }
    }

    /// Cell values as strings, in header order; missing values are empty
    pub fn cells(&self) -> [String; 12] {
        fn opt<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        [
            self.employee_id.to_string(),
            self.last_name.clone(),
            self.first_name.clone(),
            self.revenue.to_string(),
            self.item_count.to_string(),
            self.order_count.to_string(),
            opt(&self.top_product_id),
            opt(&self.top_product_qty),
            opt(&self.top_customer_id),
            opt(&self.top_customer_orders),
            opt(&self.top_country),
            opt(&self.top_country_orders),
        ]
    }
}
