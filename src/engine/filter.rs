use crate::models::OrderLine;

/// Lines taken by `employee_id`, in the order the provider returned them
pub fn lines_for_employee(lines: &[OrderLine], employee_id: i64) -> Vec<OrderLine> {
    lines
        .iter()
        .filter(|line| line.employee_id == employee_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::line;

    #[test]
    fn test_filter_preserves_input_order() {
        let lines = vec![
            line(10, 2, "A", "UK", 7, 1.0, 1, 0.0),
            line(11, 1, "B", "UK", 3, 1.0, 1, 0.0),
            line(12, 2, "C", "US", 5, 1.0, 1, 0.0),
            line(10, 2, "A", "UK", 1, 1.0, 1, 0.0),
        ];

        let own = lines_for_employee(&lines, 2);
        let products: Vec<i64> = own.iter().map(|l| l.product_id).collect();
        assert_eq!(products, vec![7, 5, 1]);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_filter_unknown_employee_is_empty() {
        let lines = vec![line(10, 2, "A", "UK", 7, 1.0, 1, 0.0)];
        assert!(lines_for_employee(&lines, 99).is_empty());
    }
}
