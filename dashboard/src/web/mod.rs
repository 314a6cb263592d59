use axum::{
    Router,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::set_header::response::SetResponseHeaderLayer;

use crate::service::{DashboardError, DashboardService};
use crate::source::SourceError;

pub mod dto;
pub mod handlers;

// ---------- shared state ----------

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DashboardService>,
}

// ---------- error type ----------

/// A JSON error response: `{"error": "..."}` with an HTTP status.
#[derive(Debug)]
pub struct ApiErr(StatusCode, String);

impl ApiErr {
    /// The store could not be read; the page shows the message and stops.
    pub fn unavailable(e: impl std::fmt::Display) -> Self {
        Self(
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Erro ao carregar dados: {e}"),
        )
    }

    /// Details stay in the log, the client gets a fixed message.
    pub fn internal() -> Self {
        Self(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao processar o dashboard".to_string(),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.0
    }
}

impl From<SourceError> for ApiErr {
    fn from(e: SourceError) -> Self {
        Self::unavailable(e)
    }
}

impl From<DashboardError> for ApiErr {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Source(e) => e.into(),
            DashboardError::Aggregation(_) => Self::internal(),
        }
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.1 });
        (self.0, Json(body)).into_response()
    }
}

// ---------- router ----------

pub fn dashboard_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(|| async { StatusCode::OK }))
        .nest("/api/v1", api_v1())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(NormalizePathLayer::trim_trailing_slash())
        .with_state(state)
}

fn api_v1() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route("/states", get(handlers::states))
        .route("/cache/invalidate", post(handlers::invalidate_cache))
}
