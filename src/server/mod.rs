//! HTTP Server
//!
//! Thin axum surface over the generation pipeline:
//! - `POST /api/generate-faq` accepts `{"topic": "..."}` and responds
//!   `{"faqs": [...]}`; a missing or empty topic is the only client error.
//! - `GET /healthz` for liveness checks.
//!
//! A failed or degraded generation still responds 200 with fallback
//! content, so a broken upstream dependency never breaks page rendering.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::faq::FaqPipeline;
use crate::types::{FaqPair, Result};

/// Application state shared across handlers
pub struct AppState {
    pub pipeline: FaqPipeline,
}

impl AppState {
    pub fn new(pipeline: FaqPipeline) -> Self {
        Self { pipeline }
    }
}

type AppStateArc = Arc<AppState>;

#[derive(Debug, Deserialize)]
struct GenerateFaqRequest {
    #[serde(default)]
    topic: String,
}

#[derive(Debug, Serialize)]
struct GenerateFaqResponse {
    faqs: Vec<FaqPair>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Build the application router
pub fn router(state: AppStateArc) -> Router {
    Router::new()
        .route("/api/generate-faq", post(generate_faq))
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn generate_faq(
    State(state): State<AppStateArc>,
    Json(req): Json<GenerateFaqRequest>,
) -> std::result::Result<Json<GenerateFaqResponse>, (StatusCode, Json<ErrorResponse>)> {
    let outcome = state.pipeline.generate(&req.topic).await.map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "缺少 topic 参数".to_string(),
            }),
        )
    })?;

    info!(
        topic = %req.topic.trim(),
        source = outcome.source(),
        "Serving FAQ result"
    );

    Ok(Json(GenerateFaqResponse {
        faqs: outcome.into_pairs(),
    }))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Bind and serve until the process is stopped
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let pipeline = FaqPipeline::new(None, "简体中文", Duration::from_secs(1));
        router(Arc::new(AppState::new(pipeline)))
    }

    fn post_topic(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate-faq")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_faq_serves_three_pairs() {
        let response = test_router()
            .oneshot(post_topic(r#"{"topic": "远程办公"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let faqs = json["faqs"].as_array().unwrap();
        assert_eq!(faqs.len(), 3);
        assert!(faqs[0]["question"].as_str().unwrap().contains("远程办公"));
    }

    #[tokio::test]
    async fn test_empty_topic_is_bad_request() {
        let response = test_router()
            .oneshot(post_topic(r#"{"topic": "  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "缺少 topic 参数");
    }

    #[tokio::test]
    async fn test_missing_topic_field_is_bad_request() {
        let response = test_router().oneshot(post_topic("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_healthz() {
        let response = test_router()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
