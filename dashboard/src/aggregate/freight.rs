use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;

use crate::model::{OrderItem, Product};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FreightPoint {
    pub weight_g: f64,
    pub freight_value: f64,
}

/// Ordinary least squares fit `freight = slope * weight + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    /// `None` when every freight value is identical.
    pub r_squared: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreightSample {
    /// Item rows matched to a product before sampling.
    pub population: usize,
    pub points: Vec<FreightPoint>,
    pub trend: Option<TrendLine>,
}

/// Uniform sample (without replacement) of at most `cap` item/product rows.
///
/// Rows whose product has no weight stay in the draw but are not plotted,
/// so the sample may hold fewer than `cap` points.
pub fn freight_sample<R: Rng + ?Sized>(
    items: &[OrderItem],
    products: &[Product],
    cap: usize,
    rng: &mut R,
) -> FreightSample {
    let weights: HashMap<&str, Option<f64>> = products
        .iter()
        .map(|p| (p.product_id.as_str(), p.weight_g))
        .collect();

    let joined: Vec<(Option<f64>, f64)> = items
        .iter()
        .filter_map(|i| {
            weights
                .get(i.product_id.as_str())
                .map(|w| (*w, i.freight_value))
        })
        .collect();

    let amount = cap.min(joined.len());
    let mut indices = rand::seq::index::sample(rng, joined.len(), amount).into_vec();
    indices.sort_unstable();

    let points: Vec<FreightPoint> = indices
        .into_iter()
        .filter_map(|idx| {
            let (weight, freight_value) = joined[idx];
            weight.map(|weight_g| FreightPoint {
                weight_g,
                freight_value,
            })
        })
        .collect();

    FreightSample {
        population: joined.len(),
        trend: fit_trend(&points),
        points,
    }
}

/// OLS regression of freight on weight. Needs two points and non-zero weight variance.
pub fn fit_trend(points: &[FreightPoint]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.weight_g).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.freight_value).sum::<f64>() / n;

    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for p in points {
        let dx = p.weight_g - mean_x;
        let dy = p.freight_value - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let r_squared = (syy > 0.0).then(|| (sxy * sxy) / (sxx * syy));

    Some(TrendLine {
        slope,
        intercept,
        r_squared,
    })
}
