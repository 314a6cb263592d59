use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use crate::aggregate::Aggregates;
use crate::cache::TtlCache;
use crate::model::{Dataset, StateFilter};
use crate::present::{self, DashboardPage};
use crate::source::{DataSource, SourceError};

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Source(#[from] SourceError),
    /// Aggregation or rendering did not complete (worker panicked or was cancelled).
    #[error("Aggregation failed: {0}")]
    Aggregation(String),
}

/// Load → filter → aggregate → render, with the unfiltered dataset cached
/// per source.
pub struct DashboardService {
    source: Arc<dyn DataSource>,
    cache: TtlCache<String, Dataset>,
    sample_cap: usize,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DataSource>, ttl: Duration, sample_cap: usize) -> Arc<Self> {
        Arc::new(Self {
            source,
            cache: TtlCache::new(ttl),
            sample_cap,
        })
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// The unfiltered dataset, from cache while fresh.
    pub async fn dataset(&self) -> Result<Arc<Dataset>, SourceError> {
        let key = self.source.name().to_string();

        if let Some(data) = self.cache.get(&key).await {
            tracing::debug!(source = %key, "dataset cache hit");
            return Ok(data);
        }

        let source = self.source.clone();
        let result = self
            .cache
            .get_or_try_load(key.clone(), || async move {
                tracing::debug!(source = %source.name(), "dataset cache miss, loading");
                let data = source.load().await?;
                for (table, rows) in data.row_counts() {
                    tracing::debug!(source = %source.name(), table, rows, "cached");
                }
                Ok(data)
            })
            .await;

        if let Err(e) = &result {
            tracing::error!(source = %key, error = %e, "dataset load failed");
        }
        result
    }

    /// Customer states in the unfiltered dataset, sorted.
    pub async fn states(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.dataset().await?.customer_states())
    }

    /// Build the page for `filter`.
    ///
    /// The aggregation runs on the blocking pool; the dataset itself is
    /// shared, never copied, when no filter is applied.
    pub async fn page(&self, filter: &StateFilter) -> Result<DashboardPage, DashboardError> {
        let data = self.dataset().await?;
        let filter = filter.clone();
        let sample_cap = self.sample_cap;

        tokio::task::spawn_blocking(move || {
            let view: Cow<'_, Dataset> = if filter.is_all() {
                Cow::Borrowed(data.as_ref())
            } else {
                Cow::Owned(data.filter_states(&filter))
            };
            let agg = Aggregates::compute(&view, sample_cap, &mut rand::thread_rng());
            present::render(&agg, &filter, data.customer_states())
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "aggregation task failed");
            DashboardError::Aggregation(e.to_string())
        })
    }

    /// Drop the cached dataset so the next request reloads it.
    pub async fn invalidate(&self) -> bool {
        let dropped = self.cache.invalidate(&self.source.name().to_string()).await;
        tracing::info!(source = %self.source.name(), dropped, "dataset cache invalidated");
        dropped
    }
}
