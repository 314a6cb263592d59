use serde::{Deserialize, Serialize};

use crate::model::StateFilter;

// ---------- requests ----------

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Comma-separated customer states, e.g. `SP,RJ`. Absent or blank = all.
    pub states: Option<String>,
}

impl DashboardQuery {
    pub fn filter(&self) -> StateFilter {
        self.states
            .as_deref()
            .map(StateFilter::parse)
            .unwrap_or_default()
    }
}

// ---------- responses ----------

#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub states: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    pub source: String,
    /// Whether a cached dataset was actually dropped.
    pub invalidated: bool,
}
