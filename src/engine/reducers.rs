//! Per-employee reducers
//!
//! Each reducer consumes one employee's filtered lines. The mode reducers pick
//! the key with the highest score; on a tie the key seen first in line order
//! wins.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::EmptyGroup;
use crate::models::{OrderLine, TopCountry, TopCustomer, TopProduct, Totals};

/// Insertion-ordered score table
struct Tally<K, S> {
    index: HashMap<K, usize>,
    entries: Vec<(K, S)>,
}

impl<K, S> Tally<K, S>
where
    K: Hash + Eq + Clone,
    S: Copy + Default + PartialOrd,
{
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Score slot for `key`, created at zero on first sight
    fn score_mut(&mut self, key: K) -> &mut S {
        let entries = &mut self.entries;
        let slot = *self.index.entry(key.clone()).or_insert_with(|| {
            entries.push((key, S::default()));
            entries.len() - 1
        });
        &mut self.entries[slot].1
    }

    /// Single forward scan; only a strictly greater score replaces the leader
    fn into_best(self) -> Option<(K, S)> {
        let mut best: Option<(K, S)> = None;
        for (key, score) in self.entries {
            let leads = match &best {
                Some((_, best_score)) => score > *best_score,
                None => true,
            };
            if leads {
                best = Some((key, score));
            }
        }
        best
    }
}

/// Distinct orders, total units and discounted revenue
pub fn totals(lines: &[OrderLine]) -> Totals {
    let mut seen_orders = HashSet::new();
    let mut item_count: i64 = 0;
    let mut revenue = 0.0;

    for line in lines {
        seen_orders.insert(line.order_id);
        item_count = item_count.saturating_add(line.quantity);
        revenue += line.revenue();
    }

    Totals {
        order_count: seen_orders.len() as u64,
        item_count,
        revenue,
    }
}

/// Product with the largest cumulative quantity
pub fn top_product(lines: &[OrderLine]) -> Result<TopProduct, EmptyGroup> {
    let mut tally: Tally<i64, i64> = Tally::new();
    for line in lines {
        let qty = tally.score_mut(line.product_id);
        *qty = qty.saturating_add(line.quantity);
    }

    tally
        .into_best()
        .map(|(product_id, quantity)| TopProduct {
            product_id,
            quantity,
        })
        .ok_or(EmptyGroup {
            statistic: "product",
        })
}

/// Key with the most distinct orders, where `key` reads the grouping field
/// of a line
///
/// An order with several lines is counted once per key.
pub fn distinct_order_mode<'a, K, F>(
    lines: &'a [OrderLine],
    statistic: &'static str,
    key: F,
) -> Result<(K, u64), EmptyGroup>
where
    K: Hash + Eq + Clone,
    F: Fn(&'a OrderLine) -> K,
{
    let mut counted: HashSet<(K, i64)> = HashSet::new();
    let mut tally: Tally<K, u64> = Tally::new();

    for line in lines {
        let k = key(line);
        let orders = tally.score_mut(k.clone());
        if counted.insert((k, line.order_id)) {
            *orders += 1;
        }
    }

    tally.into_best().ok_or(EmptyGroup { statistic })
}

pub fn top_customer(lines: &[OrderLine]) -> Result<TopCustomer, EmptyGroup> {
    distinct_order_mode(lines, "customer", |line| line.customer_id.as_str()).map(
        |(customer_id, orders)| TopCustomer {
            customer_id: customer_id.to_string(),
            orders,
        },
    )
}

pub fn top_country(lines: &[OrderLine]) -> Result<TopCountry, EmptyGroup> {
    distinct_order_mode(lines, "country", |line| line.ship_country.as_str()).map(
        |(country, orders)| TopCountry {
            country: country.to_string(),
            orders,
        },
    )
}
