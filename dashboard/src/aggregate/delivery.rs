use serde::Serialize;

use crate::model::Order;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from approval to customer delivery, floored.
///
/// `None` unless the order is delivered and both timestamps are present.
pub fn delivery_days(order: &Order) -> Option<i64> {
    if !order.is_delivered() {
        return None;
    }
    let elapsed = order.delivered_ts? - order.approved_ts?;
    Some(elapsed.num_seconds().div_euclid(SECONDS_PER_DAY))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryStats {
    /// Orders that entered the computation.
    pub orders: usize,
    pub mean_days: Option<f64>,
    pub median_days: Option<f64>,
}

/// Mean and median delivery time over delivered orders with both timestamps.
/// Orders missing either timestamp are excluded, never counted as zero.
pub fn delivery_stats(orders: &[Order]) -> DeliveryStats {
    let mut days: Vec<i64> = orders.iter().filter_map(delivery_days).collect();
    days.sort_unstable();

    DeliveryStats {
        orders: days.len(),
        mean_days: mean(&days),
        median_days: median_sorted(&days),
    }
}

fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|&d| d as f64).sum::<f64>() / values.len() as f64)
}

fn median_sorted(values: &[i64]) -> Option<f64> {
    let n = values.len();
    match n {
        0 => None,
        _ if n % 2 == 1 => Some(values[n / 2] as f64),
        _ => Some((values[n / 2 - 1] + values[n / 2]) as f64 / 2.0),
    }
}
