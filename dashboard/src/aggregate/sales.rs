use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::model::{Order, Payment};

/// Sum of every payment in the set.
pub fn total_revenue(payments: &[Payment]) -> f64 {
    payments.iter().map(|p| p.value).sum()
}

/// Total paid per order (several payments may reference one order).
pub fn order_totals(payments: &[Payment]) -> HashMap<&str, f64> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for p in payments {
        *totals.entry(p.order_id.as_str()).or_default() += p.value;
    }
    totals
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    /// Calendar month of purchase, `YYYY-MM`.
    pub month: String,
    pub orders: usize,
    pub revenue: f64,
}

/// Orders and revenue per purchase month, ascending.
///
/// Every order is counted once; an order without payments adds no revenue.
pub fn monthly_series(orders: &[Order], payments: &[Payment]) -> Vec<MonthlyPoint> {
    let totals = order_totals(payments);
    let mut months: BTreeMap<String, (usize, f64)> = BTreeMap::new();

    for o in orders {
        let month = o.purchase_ts.format("%Y-%m").to_string();
        let entry = months.entry(month).or_default();
        entry.0 += 1;
        entry.1 += totals.get(o.order_id.as_str()).copied().unwrap_or(0.0);
    }

    months
        .into_iter()
        .map(|(month, (orders, revenue))| MonthlyPoint {
            month,
            orders,
            revenue,
        })
        .collect()
}
