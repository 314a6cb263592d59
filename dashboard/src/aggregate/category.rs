use std::collections::HashMap;

use serde::Serialize;

use crate::model::{OrderItem, Product};

pub const TOP_CATEGORIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub items: usize,
}

/// Item rows per product category, largest first, at most `limit` rows.
///
/// Items whose product is unknown or has no category are skipped. Equal
/// counts are ordered by category name; that order is arbitrary, kept only so
/// the output is deterministic, and may change once a tie rule is chosen.
pub fn category_ranking(items: &[OrderItem], products: &[Product], limit: usize) -> Vec<CategoryCount> {
    let categories: HashMap<&str, &str> = products
        .iter()
        .filter_map(|p| p.category.as_deref().map(|c| (p.product_id.as_str(), c)))
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        if let Some(category) = categories.get(item.product_id.as_str()) {
            *counts.entry(*category).or_default() += 1;
        }
    }

    let mut ranking: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, items)| CategoryCount {
            category: category.to_string(),
            items,
        })
        .collect();
    ranking.sort_by(|a, b| b.items.cmp(&a.items).then_with(|| a.category.cmp(&b.category)));
    ranking.truncate(limit);
    ranking
}
