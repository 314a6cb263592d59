use crate::model::Dataset;

pub mod sql;

pub use sql::SqlSource;

// ---------- errors ----------

#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    #[error("Connection error: {0}")]
    Connect(String),
    #[error("Query error on {table}: {message}")]
    Query { table: &'static str, message: String },
}

// ---------- trait ----------

/// Loads the seven Olist tables in one pass.
///
/// Implementations must be all-or-nothing: any failure aborts the whole load
/// and no partial dataset is returned.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Stable, loggable identity of the source (never contains secrets).
    /// Also used as the dataset cache key.
    fn name(&self) -> &str;

    async fn load(&self) -> Result<Dataset, SourceError>;
}
