//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the full application: the assessment endpoints
//! nested under `/assessments` (collection routes also at `/assessments/`),
//! a health probe, and the tower-http layers
//! for tracing, CORS and request timeouts.

pub mod assessment;

pub use assessment::{assessment_collection_routes, assessment_routes, AssessmentHandlers};

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the application router with middleware applied.
pub fn app_router(handlers: AssessmentHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/assessments", assessment_routes(handlers.clone()))
        .merge(assessment_collection_routes(handlers))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// No configured origins means any origin is allowed.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAssessmentStore, InMemoryQuestionStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let questions = Arc::new(InMemoryQuestionStore::new());
        let handlers = AssessmentHandlers::new(store.clone(), store, questions);
        app_router(handlers, &ServerConfig::default())
    }

    #[tokio::test]
    async fn health_returns_ok_status() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn assessments_are_nested() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/assessments")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
