use axum::{
    extract::{Query, State},
    response::{Html, Json},
};

use crate::present::DashboardPage;

use super::{
    AppState, ApiErr,
    dto::{DashboardQuery, InvalidateResponse, StatesResponse},
};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardPage>, ApiErr> {
    let filter = params.filter();
    tracing::debug!(states = ?filter.states(), "rendering dashboard");
    Ok(Json(state.service.page(&filter).await?))
}

pub async fn states(State(state): State<AppState>) -> Result<Json<StatesResponse>, ApiErr> {
    Ok(Json(StatesResponse {
        states: state.service.states().await?,
    }))
}

pub async fn invalidate_cache(State(state): State<AppState>) -> Json<InvalidateResponse> {
    Json(InvalidateResponse {
        source: state.service.source_name().to_string(),
        invalidated: state.service.invalidate().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::dashboard_router;
    use crate::present::PLACEHOLDER;
    use crate::service::DashboardService;
    use crate::source::DataSource;
    use crate::test_utils::{FailingSource, MemorySource, sample_dataset};
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tower::ServiceExt;

    fn make_router(source: Arc<dyn DataSource>) -> Router {
        let service = DashboardService::new(source, Duration::from_secs(600), 2000);
        dashboard_router(AppState { service })
    }

    fn memory_router() -> (Router, Arc<AtomicUsize>) {
        let source = MemorySource::new(sample_dataset());
        let loads = source.loads.clone();
        (make_router(Arc::new(source)), loads)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_ok_with_security_headers() {
        let (router, loads) = memory_router();
        let res = router.oneshot(get("/health")).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(res.headers()[header::X_FRAME_OPTIONS], "DENY");
        // health never touches the store
        assert_eq!(loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn index_serves_html_shell() {
        let (router, _) = memory_router();
        let res = router.oneshot(get("/")).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(
            res.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/api/v1/dashboard"));
    }

    #[tokio::test]
    async fn dashboard_all_states() {
        let (router, _) = memory_router();
        let res = router.oneshot(get("/api/v1/dashboard")).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["title"], "Dashboard de Inteligência Olist");
        assert_eq!(body["filter"], serde_json::json!([]));
        assert_eq!(body["kpis"].as_array().unwrap().len(), 5);
        assert_eq!(body["panels"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn dashboard_filter_is_normalised() {
        let (router, _) = memory_router();
        let res = router
            .oneshot(get("/api/v1/dashboard?states=rj,%20RJ"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["filter"], serde_json::json!(["RJ"]));
        assert_eq!(body["kpis"][0]["raw"], 80.0);
    }

    #[tokio::test]
    async fn dashboard_empty_selection_shows_placeholders() {
        let (router, _) = memory_router();
        let res = router
            .oneshot(get("/api/v1/dashboard?states=AM"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        for card in body["kpis"].as_array().unwrap() {
            assert_eq!(card["value"], PLACEHOLDER);
        }
    }

    #[tokio::test]
    async fn dashboard_load_failure_is_503() {
        let router = make_router(Arc::new(FailingSource));
        let res = router.oneshot(get("/api/v1/dashboard")).await.unwrap();

        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(res).await;
        let msg = body["error"].as_str().unwrap();
        assert!(msg.starts_with("Erro ao carregar dados"));
        assert!(msg.contains("connection refused"));
    }

    #[tokio::test]
    async fn states_sorted() {
        let (router, _) = memory_router();
        let res = router.oneshot(get("/api/v1/states")).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["states"], serde_json::json!(["RJ", "SP"]));
    }

    #[tokio::test]
    async fn invalidate_forces_reload() {
        let (router, loads) = memory_router();

        let res = router.clone().oneshot(get("/api/v1/states")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = router
            .clone()
            .oneshot(post("/api/v1/cache/invalidate"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["source"], "memory");
        assert_eq!(body["invalidated"], true);

        router.oneshot(get("/api/v1/dashboard")).await.unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn aggregation_error_is_generic_500() {
        let err = ApiErr::from(crate::service::DashboardError::Aggregation(
            "task panicked".to_string(),
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
