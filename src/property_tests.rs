//! Property-based tests for report assembly

#[cfg(test)]
mod tests {
    use crate::engine::{lines_for_employee, reducers, ReportEngine};
    use crate::models::{Employee, OrderLine};
    use crate::provider::RecordSet;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const EMPLOYEES: i64 = 4;

    /// Lines where every order has one employee, customer and country
    fn order_lines() -> impl Strategy<Value = Vec<OrderLine>> {
        prop::collection::vec(
            (0i64..30, 1i64..12, 0.0f64..100.0, 0i64..40, 0.0f64..0.5),
            0..120,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(order_id, product_id, unit_price, quantity, discount)| OrderLine {
                    order_id,
                    // Employee 4 never gets an order
                    employee_id: order_id % (EMPLOYEES - 1) + 1,
                    customer_id: format!("CUST{}", order_id % 5),
                    ship_country: ["UK", "USA", "Brazil"][(order_id % 3) as usize].to_string(),
                    product_id,
                    unit_price,
                    quantity,
                    discount,
                })
                .collect()
        })
    }

    fn roster() -> Vec<Employee> {
        (1..=EMPLOYEES)
            .rev()
            .map(|id| Employee::new(id, format!("Last{id}"), format!("First{id}")))
            .collect()
    }

    /// First-seen key among those with the most distinct orders
    fn expected_order_mode(lines: &[OrderLine], key: fn(&OrderLine) -> &str) -> (String, u64) {
        let mut firsts: Vec<&str> = Vec::new();
        for line in lines {
            if !firsts.contains(&key(line)) {
                firsts.push(key(line));
            }
        }
        let orders = |k: &str| -> u64 {
            let ids: HashSet<i64> = lines
                .iter()
                .filter(|l| key(*l) == k)
                .map(|l| l.order_id)
                .collect();
            ids.len() as u64
        };
        let max = firsts.iter().map(|k| orders(*k)).max().unwrap_or(0);
        let expected = firsts
            .iter()
            .find(|k| orders(**k) == max)
            .copied()
            .unwrap_or_default();
        (expected.to_string(), max)
    }

    proptest! {
        #[test]
        fn test_order_count_is_distinct_order_ids(lines in order_lines()) {
            for employee in roster() {
                let own = lines_for_employee(&lines, employee.employee_id);
                let distinct: HashSet<i64> = own.iter().map(|l| l.order_id).collect();
                prop_assert_eq!(reducers::totals(&own).order_count, distinct.len() as u64);
            }
        }

        #[test]
        fn test_revenue_matches_direct_sum(lines in order_lines()) {
            for employee in roster() {
                let own = lines_for_employee(&lines, employee.employee_id);
                let expected: f64 = own
                    .iter()
                    .map(|l| l.unit_price * l.quantity as f64 * (1.0 - l.discount))
                    .sum();
                let revenue = reducers::totals(&own).revenue;
                prop_assert!((revenue - expected).abs() <= 1e-6 * expected.abs().max(1.0));
            }
        }

        #[test]
        fn test_rows_follow_roster_and_rerun_identically(lines in order_lines()) {
            let records = RecordSet { employees: roster(), lines };
            let engine = ReportEngine::default();

            let first = engine.assemble(&records);
            let second = engine.assemble(&records);
            prop_assert_eq!(&first, &second);

            let ids: Vec<i64> = first.iter().map(|r| r.employee_id).collect();
            let roster_ids: Vec<i64> = records.employees.iter().map(|e| e.employee_id).collect();
            prop_assert_eq!(ids, roster_ids);

            let idle = first.iter().find(|r| r.employee_id == EMPLOYEES).unwrap();
            prop_assert_eq!(idle.order_count, 0);
            prop_assert_eq!(idle.item_count, 0);
            prop_assert_eq!(idle.revenue, 0.0);
            prop_assert!(idle.top_product_id.is_none());
            prop_assert!(idle.top_customer_id.is_none());
            prop_assert!(idle.top_country.is_none());
        }

        #[test]
        fn test_top_product_has_max_quantity_and_is_first_seen(lines in order_lines()) {
            prop_assume!(!lines.is_empty());
            let top = reducers::top_product(&lines).unwrap();

            let mut firsts: Vec<i64> = Vec::new();
            for line in &lines {
                if !firsts.contains(&line.product_id) {
                    firsts.push(line.product_id);
                }
            }
            let total = |product: i64| -> i64 {
                lines.iter().filter(|l| l.product_id == product).map(|l| l.quantity).sum()
            };
            let max = firsts.iter().map(|p| total(*p)).max().unwrap();
            let expected = firsts.iter().copied().find(|p| total(*p) == max).unwrap();

            prop_assert_eq!(top.quantity, max);
            prop_assert_eq!(top.product_id, expected);
        }

        #[test]
        fn test_top_customer_has_most_orders_and_is_first_seen(lines in order_lines()) {
            prop_assume!(!lines.is_empty());
            let top = reducers::top_customer(&lines).unwrap();
            let (customer_id, orders) = expected_order_mode(&lines, |l| l.customer_id.as_str());

            prop_assert_eq!(top.customer_id, customer_id);
            prop_assert_eq!(top.orders, orders);
        }

        #[test]
        fn test_top_country_has_most_orders_and_is_first_seen(lines in order_lines()) {
            prop_assume!(!lines.is_empty());
            let top = reducers::top_country(&lines).unwrap();
            let (country, orders) = expected_order_mode(&lines, |l| l.ship_country.as_str());

            prop_assert_eq!(top.country, country);
            prop_assert_eq!(top.orders, orders);
        }
    }
}
