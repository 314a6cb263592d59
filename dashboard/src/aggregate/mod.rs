//! Descriptive aggregates over a loaded (and possibly filtered) dataset.
//!
//! Every view is an independent pure function; [`Aggregates::compute`] runs
//! them all in one pass for a page render.

use rand::Rng;
use serde::Serialize;

use crate::model::Dataset;

pub mod category;
pub mod customers;
pub mod delivery;
pub mod freight;
pub mod regional;
pub mod sales;
pub mod satisfaction;

pub use category::{CategoryCount, TOP_CATEGORIES, category_ranking};
pub use customers::{StateCount, TOP_STATES, repurchase_count, state_distribution};
pub use delivery::{DeliveryStats, delivery_days, delivery_stats};
pub use freight::{FreightPoint, FreightSample, TrendLine, fit_trend, freight_sample};
pub use regional::{Route, RouteDelay, is_delayed, regional_delay};
pub use sales::{MonthlyPoint, monthly_series, order_totals, total_revenue};
pub use satisfaction::{
    DeliveryLabel, SatisfactionBucket, delivery_label, mean_review_score, on_time_satisfaction,
};

/// Headline numbers for the KPI row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    /// `None` when the set has no payments.
    pub revenue: Option<f64>,
    pub delivery: DeliveryStats,
    pub mean_review_score: Option<f64>,
    pub repeat_customers: usize,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregates {
    pub headline: Headline,
    pub monthly: Vec<MonthlyPoint>,
    pub satisfaction: Vec<SatisfactionBucket>,
    pub categories: Vec<CategoryCount>,
    pub freight: FreightSample,
    pub states: Vec<StateCount>,
    pub regional: Vec<RouteDelay>,
}

impl Aggregates {
    pub fn compute<R: Rng + ?Sized>(data: &Dataset, sample_cap: usize, rng: &mut R) -> Self {
        let headline = Headline {
            revenue: (!data.payments.is_empty()).then(|| total_revenue(&data.payments)),
            delivery: delivery_stats(&data.orders),
            mean_review_score: mean_review_score(&data.reviews),
            repeat_customers: repurchase_count(&data.orders, &data.customers),
            orders: data.orders.len(),
        };

        Self {
            headline,
            monthly: monthly_series(&data.orders, &data.payments),
            satisfaction: on_time_satisfaction(&data.orders, &data.reviews),
            categories: category_ranking(&data.items, &data.products, TOP_CATEGORIES),
            freight: freight_sample(&data.items, &data.products, sample_cap, rng),
            states: state_distribution(&data.customers, TOP_STATES),
            regional: regional_delay(&data.orders, &data.items, &data.customers, &data.sellers),
        }
    }
}
