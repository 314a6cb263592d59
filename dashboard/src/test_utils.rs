//! Fixture builders and in-memory sources shared by unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::model::{
    Customer, Dataset, Order, OrderItem, OrderStatus, Payment, Product, Review, Seller,
};
use crate::source::{DataSource, SourceError};

/// Midnight on 2018-01-01 plus `n` days.
pub fn day(n: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + Duration::days(n)
}

/// A shipped (not yet delivered) order.
pub fn order(id: &str, customer_id: &str, purchase: NaiveDateTime) -> Order {
    Order {
        order_id: id.to_string(),
        customer_id: customer_id.to_string(),
        purchase_ts: purchase,
        approved_ts: None,
        delivered_ts: None,
        estimated_delivery_ts: purchase + Duration::days(20),
        status: OrderStatus::Shipped,
    }
}

/// A delivered order, purchased and approved at `approved`.
pub fn delivered_order(
    id: &str,
    customer_id: &str,
    approved: NaiveDateTime,
    delivered: NaiveDateTime,
    estimated: NaiveDateTime,
) -> Order {
    Order {
        order_id: id.to_string(),
        customer_id: customer_id.to_string(),
        purchase_ts: approved,
        approved_ts: Some(approved),
        delivered_ts: Some(delivered),
        estimated_delivery_ts: estimated,
        status: OrderStatus::Delivered,
    }
}

pub fn customer(id: &str, unique_id: &str, state: &str) -> Customer {
    Customer {
        customer_id: id.to_string(),
        customer_unique_id: unique_id.to_string(),
        state: state.to_string(),
    }
}

pub fn seller(id: &str, state: &str) -> Seller {
    Seller {
        seller_id: id.to_string(),
        state: state.to_string(),
    }
}

pub fn product(id: &str, category: Option<&str>, weight_g: Option<f64>) -> Product {
    Product {
        product_id: id.to_string(),
        category: category.map(str::to_string),
        weight_g,
        length_cm: None,
        height_cm: None,
        width_cm: None,
    }
}

pub fn item(order_id: &str, product_id: &str, seller_id: &str, freight_value: f64) -> OrderItem {
    OrderItem {
        order_id: order_id.to_string(),
        product_id: product_id.to_string(),
        seller_id: seller_id.to_string(),
        price: 100.0,
        freight_value,
    }
}

pub fn payment(order_id: &str, value: f64) -> Payment {
    Payment {
        order_id: order_id.to_string(),
        value,
    }
}

pub fn review(order_id: &str, score: i32) -> Review {
    Review {
        order_id: order_id.to_string(),
        score,
        comment: None,
    }
}

/// Small dataset spanning two states and two months.
///
/// - `u1` (SP) owns `c1` and `c2` with three orders in total (repeat buyer);
/// - `u2` (RJ) owns `c3` with one order;
/// - `o1` delivered exactly on the estimate, `o2` one day late, `o3` early,
///   `o4` still shipped.
pub fn sample_dataset() -> Dataset {
    Dataset {
        orders: vec![
            delivered_order("o1", "c1", day(0), day(5), day(5)),
            delivered_order("o2", "c2", day(2), day(12), day(11)),
            delivered_order("o3", "c3", day(40), day(43), day(50)),
            order("o4", "c1", day(45)),
        ],
        payments: vec![
            payment("o1", 100.0),
            payment("o1", 50.0),
            payment("o2", 200.0),
            payment("o3", 80.0),
            payment("o4", 20.0),
        ],
        reviews: vec![review("o1", 5), review("o2", 2), review("o3", 4)],
        items: vec![
            item("o1", "p1", "s1", 10.0),
            item("o2", "p2", "s2", 20.0),
            item("o3", "p1", "s1", 15.0),
            item("o4", "p3", "s2", 5.0),
        ],
        products: vec![
            product("p1", Some("bebes"), Some(500.0)),
            product("p2", Some("esporte_lazer"), Some(1500.0)),
            product("p3", None, None),
        ],
        customers: vec![
            customer("c1", "u1", "SP"),
            customer("c2", "u1", "SP"),
            customer("c3", "u2", "RJ"),
        ],
        sellers: vec![seller("s1", "SP"), seller("s2", "MG")],
    }
}

/// Serves a fixed dataset and counts loads.
pub struct MemorySource {
    pub data: Dataset,
    pub loads: Arc<AtomicUsize>,
}

impl MemorySource {
    pub fn new(data: Dataset) -> Self {
        Self {
            data,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait::async_trait]
impl DataSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> Result<Dataset, SourceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.data.clone())
    }
}

/// Always fails to connect.
pub struct FailingSource;

#[async_trait::async_trait]
impl DataSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn load(&self) -> Result<Dataset, SourceError> {
        Err(SourceError::Connect("connection refused".to_string()))
    }
}
