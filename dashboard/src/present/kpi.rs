use serde::Serialize;

use crate::aggregate::Headline;

/// Shown instead of a number when the filtered set is empty.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub id: &'static str,
    pub label: &'static str,
    /// Display text, already formatted.
    pub value: String,
    /// Unformatted value for clients that want to re-format.
    pub raw: Option<f64>,
}

impl KpiCard {
    fn new(id: &'static str, label: &'static str, raw: Option<f64>, fmt: impl Fn(f64) -> String) -> Self {
        Self {
            id,
            label,
            value: raw.filter(|v| v.is_finite()).map(fmt).unwrap_or_else(|| PLACEHOLDER.to_string()),
            raw,
        }
    }
}

/// The five headline cards, in display order.
pub fn kpi_cards(headline: &Headline) -> Vec<KpiCard> {
    let has_orders = headline.orders > 0;
    vec![
        KpiCard::new("revenue", "Faturamento", headline.revenue, |v| {
            format!("R$ {:.1}M", v / 1e6)
        }),
        KpiCard::new("delivery_mean", "Média Entrega", headline.delivery.mean_days, |v| {
            format!("{v:.1} dias")
        }),
        KpiCard::new("delivery_median", "Mediana Entrega", headline.delivery.median_days, |v| {
            format!("{v:.0} dias")
        }),
        KpiCard::new("satisfaction", "Satisfação (⭐)", headline.mean_review_score, |v| {
            format!("{v:.2}")
        }),
        KpiCard::new(
            "repeat_customers",
            "Clientes Recompra",
            has_orders.then_some(headline.repeat_customers as f64),
            |v| group_thousands(v as u64),
        ),
    ]
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
