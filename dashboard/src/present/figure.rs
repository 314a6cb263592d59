//! Plotly figure descriptions (`{"data": [...], "layout": {...}}`).
//!
//! The browser hands these to `Plotly.newPlot` unchanged.

use serde::Serialize;
use serde_json::{Value, json};

use crate::aggregate::{
    CategoryCount, DeliveryLabel, FreightSample, MonthlyPoint, RouteDelay, SatisfactionBucket,
    StateCount,
};

pub const PRIMARY: &str = "#1a73e8";
pub const ON_TIME: &str = "#45e1a3";
pub const LATE: &str = "#ff4b4b";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    fn new(data: Vec<Value>, layout: Value) -> Self {
        Self { data, layout }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn base_layout() -> Value {
    json!({
        "margin": {"l": 40, "r": 20, "t": 30, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
    })
}

fn merge(mut base: Value, extra: Value) -> Value {
    if let (Some(b), Value::Object(e)) = (base.as_object_mut(), extra) {
        b.extend(e);
    }
    base
}

/// Orders as a line, revenue as translucent bars on a secondary axis.
pub fn monthly_figure(series: &[MonthlyPoint]) -> Figure {
    if series.is_empty() {
        return Figure::new(vec![], base_layout());
    }
    let months: Vec<&str> = series.iter().map(|p| p.month.as_str()).collect();
    let orders: Vec<usize> = series.iter().map(|p| p.orders).collect();
    let revenue: Vec<f64> = series.iter().map(|p| p.revenue).collect();

    Figure::new(
        vec![
            json!({
                "type": "scatter",
                "mode": "lines",
                "name": "Pedidos",
                "x": months,
                "y": orders,
                "line": {"color": PRIMARY},
            }),
            json!({
                "type": "bar",
                "name": "Faturamento",
                "x": months,
                "y": revenue,
                "yaxis": "y2",
                "opacity": 0.3,
                "marker": {"color": ON_TIME},
            }),
        ],
        merge(
            base_layout(),
            json!({
                "yaxis2": {"overlaying": "y", "side": "right"},
                "legend": {"orientation": "h", "yanchor": "bottom", "y": 1.02, "xanchor": "right", "x": 1},
            }),
        ),
    )
}

fn label_color(label: DeliveryLabel) -> &'static str {
    match label {
        DeliveryLabel::OnTime => ON_TIME,
        DeliveryLabel::Late => LATE,
    }
}

/// One bar per delivery label, mean score printed on the bar.
pub fn satisfaction_figure(buckets: &[SatisfactionBucket]) -> Figure {
    let data = buckets
        .iter()
        .map(|b| {
            json!({
                "type": "bar",
                "name": b.label.as_str(),
                "x": [b.label.as_str()],
                "y": [b.mean_score],
                "marker": {"color": label_color(b.label)},
                "text": [format!("{:.2}", b.mean_score)],
                "textposition": "auto",
            })
        })
        .collect();
    Figure::new(
        data,
        merge(base_layout(), json!({"yaxis": {"title": {"text": "review_score"}}})),
    )
}

/// Horizontal bars, largest category on top.
pub fn category_figure(ranking: &[CategoryCount]) -> Figure {
    if ranking.is_empty() {
        return Figure::new(vec![], base_layout());
    }
    let names: Vec<&str> = ranking.iter().map(|c| c.category.as_str()).collect();
    let counts: Vec<usize> = ranking.iter().map(|c| c.items).collect();
    Figure::new(
        vec![json!({
            "type": "bar",
            "orientation": "h",
            "name": "vendas",
            "x": counts,
            "y": names,
            "marker": {"color": counts, "colorscale": "Viridis", "showscale": true},
        })],
        merge(
            base_layout(),
            json!({"yaxis": {"autorange": "reversed"}, "xaxis": {"title": {"text": "vendas"}}}),
        ),
    )
}

/// Weight/freight scatter plus the fitted trend line over the sampled range.
pub fn freight_figure(sample: &FreightSample) -> Figure {
    if sample.points.is_empty() {
        return Figure::new(vec![], base_layout());
    }
    let xs: Vec<f64> = sample.points.iter().map(|p| p.weight_g).collect();
    let ys: Vec<f64> = sample.points.iter().map(|p| p.freight_value).collect();

    let mut data = vec![json!({
        "type": "scattergl",
        "mode": "markers",
        "name": "itens",
        "x": xs,
        "y": ys,
        "opacity": 0.4,
        "marker": {"color": PRIMARY},
    })];

    if let Some(trend) = sample.trend {
        let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let name = match trend.r_squared {
            Some(r2) => format!("OLS (R² = {r2:.3})"),
            None => "OLS".to_string(),
        };
        data.push(json!({
            "type": "scatter",
            "mode": "lines",
            "name": name,
            "x": [min, max],
            "y": [trend.slope * min + trend.intercept, trend.slope * max + trend.intercept],
            "line": {"color": PRIMARY},
        }));
    }

    Figure::new(
        data,
        merge(
            base_layout(),
            json!({
                "xaxis": {"title": {"text": "product_weight_g"}},
                "yaxis": {"title": {"text": "freight_value"}},
            }),
        ),
    )
}

/// Donut of customers per state.
pub fn states_figure(states: &[StateCount]) -> Figure {
    if states.is_empty() {
        return Figure::new(vec![], base_layout());
    }
    let labels: Vec<&str> = states.iter().map(|s| s.state.as_str()).collect();
    let values: Vec<usize> = states.iter().map(|s| s.customers).collect();
    Figure::new(
        vec![json!({
            "type": "pie",
            "labels": labels,
            "values": values,
            "hole": 0.4,
        })],
        base_layout(),
    )
}

/// Delay percentage per route, value printed on the bar.
pub fn regional_figure(routes: &[RouteDelay]) -> Figure {
    let data = routes
        .iter()
        .map(|r| {
            json!({
                "type": "bar",
                "name": r.route.as_str(),
                "x": [r.route.as_str()],
                "y": [r.delay_pct],
                "text": [format!("{:.1}", r.delay_pct)],
                "textposition": "auto",
            })
        })
        .collect();
    Figure::new(
        data,
        merge(base_layout(), json!({"yaxis": {"title": {"text": "% Atraso"}}})),
    )
}
