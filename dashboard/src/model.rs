use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;

// ---------- order status ----------

/// Olist order status vocabulary. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Created,
    Approved,
    Invoiced,
    Processing,
    Shipped,
    Delivered,
    Canceled,
    Unavailable,
    Other(String),
}

impl OrderStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "created" => Self::Created,
            "approved" => Self::Approved,
            "invoiced" => Self::Invoiced,
            "processing" => Self::Processing,
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            "canceled" => Self::Canceled,
            "unavailable" => Self::Unavailable,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::Approved => "approved",
            Self::Invoiced => "invoiced",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Canceled => "canceled",
            Self::Unavailable => "unavailable",
            Self::Other(s) => s.as_str(),
        }
    }
}

// ---------- records ----------

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub purchase_ts: NaiveDateTime,
    pub approved_ts: Option<NaiveDateTime>,
    pub delivered_ts: Option<NaiveDateTime>,
    pub estimated_delivery_ts: NaiveDateTime,
    pub status: OrderStatus,
}

impl Order {
    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub order_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub order_id: String,
    pub score: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order_id: String,
    pub product_id: String,
    pub seller_id: String,
    pub price: f64,
    pub freight_value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: String,
    pub category: Option<String>,
    pub weight_g: Option<f64>,
    pub length_cm: Option<f64>,
    pub height_cm: Option<f64>,
    pub width_cm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: String,
    /// Person-level identity; one person may own several `customer_id`s.
    pub customer_unique_id: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub seller_id: String,
    pub state: String,
}

// ---------- dataset ----------

/// The seven Olist tables as loaded from the store.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
    pub reviews: Vec<Review>,
    pub items: Vec<OrderItem>,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub sellers: Vec<Seller>,
}

impl Dataset {
    /// Restrict the dataset to customers in `states`.
    ///
    /// Orders follow their customer; payments, reviews and items follow their
    /// order. Products and sellers are reference tables and stay whole.
    /// An empty selection means every state.
    pub fn filter_states(&self, states: &StateFilter) -> Dataset {
        if states.is_all() {
            return self.clone();
        }

        let customers: Vec<Customer> = self
            .customers
            .iter()
            .filter(|c| states.contains(&c.state))
            .cloned()
            .collect();
        let customer_ids: HashSet<&str> =
            customers.iter().map(|c| c.customer_id.as_str()).collect();

        let orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| customer_ids.contains(o.customer_id.as_str()))
            .cloned()
            .collect();
        let order_ids: HashSet<&str> = orders.iter().map(|o| o.order_id.as_str()).collect();

        Dataset {
            payments: self
                .payments
                .iter()
                .filter(|p| order_ids.contains(p.order_id.as_str()))
                .cloned()
                .collect(),
            reviews: self
                .reviews
                .iter()
                .filter(|r| order_ids.contains(r.order_id.as_str()))
                .cloned()
                .collect(),
            items: self
                .items
                .iter()
                .filter(|i| order_ids.contains(i.order_id.as_str()))
                .cloned()
                .collect(),
            products: self.products.clone(),
            sellers: self.sellers.clone(),
            orders,
            customers,
        }
    }

    /// Distinct customer states, sorted.
    pub fn customer_states(&self) -> Vec<String> {
        let mut states: Vec<String> = self
            .customers
            .iter()
            .map(|c| c.state.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        states.sort();
        states
    }

    pub fn row_counts(&self) -> [(&'static str, usize); 7] {
        [
            ("orders", self.orders.len()),
            ("payments", self.payments.len()),
            ("reviews", self.reviews.len()),
            ("items", self.items.len()),
            ("products", self.products.len()),
            ("customers", self.customers.len()),
            ("sellers", self.sellers.len()),
        ]
    }
}

// ---------- state filter ----------

/// Customer-state selection from the sidebar. Empty = all states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct StateFilter(Vec<String>);

impl StateFilter {
    pub fn all() -> Self {
        Self(Vec::new())
    }

    /// Build from a list of state codes: trimmed, upper-cased, sorted, deduplicated.
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut v: Vec<String> = states
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        v.sort();
        v.dedup();
        Self(v)
    }

    /// Parse the `?states=SP,RJ` query form.
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn is_all(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, state: &str) -> bool {
        self.is_all() || self.0.iter().any(|s| s == state)
    }

    pub fn states(&self) -> &[String] {
        &self.0
    }
}
