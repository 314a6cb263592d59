use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Order, Review};

/// Delivery outcome as shown on the on-time panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DeliveryLabel {
    #[serde(rename = "No Prazo")]
    OnTime,
    #[serde(rename = "Atrasado")]
    Late,
}

impl DeliveryLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTime => "No Prazo",
            Self::Late => "Atrasado",
        }
    }
}

/// On-time iff delivered no later than the estimate (equality is on time).
///
/// `None` for orders that were not delivered or lack a delivery timestamp.
pub fn delivery_label(order: &Order) -> Option<DeliveryLabel> {
    if !order.is_delivered() {
        return None;
    }
    let delivered = order.delivered_ts?;
    Some(if delivered <= order.estimated_delivery_ts {
        DeliveryLabel::OnTime
    } else {
        DeliveryLabel::Late
    })
}

/// Mean review score over every review in the set.
pub fn mean_review_score(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    Some(reviews.iter().map(|r| r.score as f64).sum::<f64>() / reviews.len() as f64)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatisfactionBucket {
    pub label: DeliveryLabel,
    pub reviews: usize,
    pub mean_score: f64,
}

/// Mean review score for on-time vs late deliveries.
///
/// Only labels with at least one review are returned, on-time first.
pub fn on_time_satisfaction(orders: &[Order], reviews: &[Review]) -> Vec<SatisfactionBucket> {
    let labels: HashMap<&str, DeliveryLabel> = orders
        .iter()
        .filter_map(|o| delivery_label(o).map(|l| (o.order_id.as_str(), l)))
        .collect();

    let mut sums: HashMap<DeliveryLabel, (usize, i64)> = HashMap::new();
    for r in reviews {
        if let Some(label) = labels.get(r.order_id.as_str()) {
            let entry = sums.entry(*label).or_default();
            entry.0 += 1;
            entry.1 += r.score as i64;
        }
    }

    let mut buckets: Vec<SatisfactionBucket> = sums
        .into_iter()
        .map(|(label, (count, total))| SatisfactionBucket {
            label,
            reviews: count,
            mean_score: total as f64 / count as f64,
        })
        .collect();
    buckets.sort_by_key(|b| b.label);
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, delivered_order, order, review, sample_dataset};

    #[test]
    fn test_delivered_on_estimate_is_on_time() {
        let o = delivered_order("o1", "c1", day(0), day(5), day(5));
        assert_eq!(delivery_label(&o), Some(DeliveryLabel::OnTime));
        assert_eq!(DeliveryLabel::OnTime.as_str(), "No Prazo");
    }

    #[test]
    fn test_one_second_after_estimate_is_late() {
        let mut o = delivered_order("o1", "c1", day(0), day(5), day(5));
        o.delivered_ts = Some(day(5) + chrono::Duration::seconds(1));
        assert_eq!(delivery_label(&o), Some(DeliveryLabel::Late));
    }

    #[test]
    fn test_undelivered_has_no_label() {
        assert_eq!(delivery_label(&order("o1", "c1", day(0))), None);

        let mut o = delivered_order("o1", "c1", day(0), day(5), day(5));
        o.delivered_ts = None;
        assert_eq!(delivery_label(&o), None);
    }

    #[test]
    fn test_on_time_satisfaction_partitions() {
        let data = sample_dataset();
        let buckets = on_time_satisfaction(&data.orders, &data.reviews);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, DeliveryLabel::OnTime);
        assert_eq!(buckets[0].reviews, 2);
        assert_eq!(buckets[0].mean_score, 4.5);
        assert_eq!(buckets[1].label, DeliveryLabel::Late);
        assert_eq!(buckets[1].reviews, 1);
        assert_eq!(buckets[1].mean_score, 2.0);
    }

    #[test]
    fn test_reviews_of_undelivered_orders_ignored() {
        let orders = vec![order("o1", "c1", day(0))];
        let reviews = vec![review("o1", 1)];
        assert!(on_time_satisfaction(&orders, &reviews).is_empty());
    }

    #[test]
    fn test_mean_review_score() {
        let data = sample_dataset();
        let mean = mean_review_score(&data.reviews).unwrap();
        assert!((mean - 11.0 / 3.0).abs() < 1e-9);
        assert_eq!(mean_review_score(&[]), None);
    }

    #[test]
    fn test_label_serializes_as_display_text() {
        let json = serde_json::to_string(&DeliveryLabel::Late).unwrap();
        assert_eq!(json, "\"Atrasado\"");
    }
}
