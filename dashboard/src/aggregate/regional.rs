use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::model::{Customer, Order, OrderItem, Seller};

/// Whether an item ships within the customer's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Route {
    #[serde(rename = "Interestadual")]
    CrossState,
    #[serde(rename = "Mesmo Estado")]
    SameState,
}

impl Route {
    pub fn between(customer_state: &str, seller_state: &str) -> Self {
        if customer_state == seller_state {
            Self::SameState
        } else {
            Self::CrossState
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrossState => "Interestadual",
            Self::SameState => "Mesmo Estado",
        }
    }
}

/// Delayed iff delivered strictly after the estimate; equality is not a delay.
///
/// `None` for orders that were not delivered or lack a delivery timestamp.
pub fn is_delayed(order: &Order) -> Option<bool> {
    if !order.is_delivered() {
        return None;
    }
    Some(order.delivered_ts? > order.estimated_delivery_ts)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDelay {
    pub route: Route,
    /// Item rows considered.
    pub rows: usize,
    pub delayed: usize,
    /// `delayed / rows * 100`.
    pub delay_pct: f64,
}

/// Delay rate per route over orders ⋈ items ⋈ customers ⋈ sellers.
///
/// The unit is the item row, so an order with several items weighs more.
/// Only routes with at least one row are returned.
pub fn regional_delay(
    orders: &[Order],
    items: &[OrderItem],
    customers: &[Customer],
    sellers: &[Seller],
) -> Vec<RouteDelay> {
    let customer_state: HashMap<&str, &str> = customers
        .iter()
        .map(|c| (c.customer_id.as_str(), c.state.as_str()))
        .collect();
    let seller_state: HashMap<&str, &str> = sellers
        .iter()
        .map(|s| (s.seller_id.as_str(), s.state.as_str()))
        .collect();
    let delivered: HashMap<&str, (&str, bool)> = orders
        .iter()
        .filter_map(|o| {
            let delayed = is_delayed(o)?;
            let state = customer_state.get(o.customer_id.as_str())?;
            Some((o.order_id.as_str(), (*state, delayed)))
        })
        .collect();

    let mut tally: BTreeMap<Route, (usize, usize)> = BTreeMap::new();
    for item in items {
        let Some((c_state, delayed)) = delivered.get(item.order_id.as_str()) else {
            continue;
        };
        let Some(s_state) = seller_state.get(item.seller_id.as_str()) else {
            continue;
        };
        let entry = tally.entry(Route::between(c_state, s_state)).or_default();
        entry.0 += 1;
        if *delayed {
            entry.1 += 1;
        }
    }

    tally
        .into_iter()
        .map(|(route, (rows, delayed))| RouteDelay {
            route,
            rows,
            delayed,
            delay_pct: delayed as f64 / rows as f64 * 100.0,
        })
        .collect()
}
