use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Customer, Order};

pub const TOP_STATES: usize = 7;

/// Number of people (`customer_unique_id`) with more than one order.
///
/// A person counts once however many `customer_id`s they ordered under.
/// Orders whose customer is unknown are ignored.
pub fn repurchase_count(orders: &[Order], customers: &[Customer]) -> usize {
    let person: HashMap<&str, &str> = customers
        .iter()
        .map(|c| (c.customer_id.as_str(), c.customer_unique_id.as_str()))
        .collect();

    let mut per_person: HashMap<&str, usize> = HashMap::new();
    for o in orders {
        if let Some(unique_id) = person.get(o.customer_id.as_str()) {
            *per_person.entry(*unique_id).or_default() += 1;
        }
    }
    per_person.values().filter(|&&n| n > 1).count()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state: String,
    pub customers: usize,
}

/// Customer rows per state, largest first (ties by state code), at most `limit`.
pub fn state_distribution(customers: &[Customer], limit: usize) -> Vec<StateCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for c in customers {
        *counts.entry(c.state.as_str()).or_default() += 1;
    }
    let mut out: Vec<StateCount> = counts
        .into_iter()
        .map(|(state, customers)| StateCount {
            state: state.to_string(),
            customers,
        })
        .collect();
    out.sort_by(|a, b| b.customers.cmp(&a.customers).then_with(|| a.state.cmp(&b.state)));
    out.truncate(limit);
    out
}
