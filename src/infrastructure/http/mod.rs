//! # HTTP Surface
//!
//! One POST endpoint for the visual editor panel plus a health check.

pub mod errors;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::domain::config::ServerConfig;
use crate::domain::traits::LayoutAssistant;
use crate::domain::types::{AssistRequest, AssistResponse};
use crate::strings::logs;
use errors::ApiError;

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<dyn LayoutAssistant>,
}

impl AppState {
    pub fn new(assistant: Arc<dyn LayoutAssistant>) -> Self {
        Self { assistant }
    }
}

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(
            &config.endpoint,
            post(handle_assist).fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .with_state(state);

    if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Run until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("{}", logs::SHUTDOWN),
        Err(e) => tracing::error!("{}", logs::shutdown_fail(&e.to_string())),
    }
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "service": "layout-assistant" }))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::warn!("{}", logs::rejected(method.as_str(), uri.path()));
    ApiError::MethodNotAllowed
}

/// POST handler. The body is parsed by hand so malformed JSON maps onto our own error body.
async fn handle_assist(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AssistResponse>, ApiError> {
    let request: AssistRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    if request.instruction().is_none() {
        return Err(ApiError::MissingPrompt);
    }

    // Run on its own task so a panic inside the backend becomes a 500, not a dropped connection.
    let assistant = state.assistant.clone();
    tracing::debug!(backend = assistant.name(), "Dispatching assist request");
    let response = tokio::spawn(async move { assistant.assist(&request).await })
        .await
        .map_err(|e| ApiError::Internal(logs::assist_panicked(&e.to_string())))??;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::assistant::KeywordAssistant;
    use crate::domain::error::AssistError;
    use crate::strings::messages;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    fn router() -> Router {
        build_router(
            AppState::new(Arc::new(KeywordAssistant::default())),
            &ServerConfig::default(),
        )
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/visual-ai")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn read_json(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_returns_actions() {
        let req = post_json(
            json!({
                "prompt": "Make the newsletter signup more prominent",
                "context": "bento-grid-blog",
                "capabilities": ["layout", "resize"]
            })
            .to_string(),
        );
        let resp = router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["actions"][0]["type"], "component-resize");
        assert_eq!(body["actions"][0]["target"], "newsletter");
        assert_eq!(body["layoutChanges"]["changes"], body["actions"]);
        assert!(body["layoutChanges"]["timestamp"].is_i64());
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_no_match_omits_layout_changes() {
        let resp = router()
            .oneshot(post_json(json!({ "prompt": "hello" }).to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body["message"], messages::CLARIFY);
        assert_eq!(body["actions"], json!([]));
        assert!(body.get("layoutChanges").is_none());
    }

    #[tokio::test]
    async fn test_null_context_and_capabilities_are_accepted() {
        let resp = router()
            .oneshot(post_json(
                json!({ "prompt": "optimize", "context": null, "capabilities": null }).to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body["actions"][0]["type"], "layout-optimization");
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/api/visual-ai")
            .body(Body::empty())
            .unwrap();
        let resp = router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = read_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Method not allowed");
        assert_eq!(body["message"], "Only POST requests are supported");
    }

    #[tokio::test]
    async fn test_missing_and_empty_prompt_are_bad_requests() {
        for payload in [json!({ "context": "x" }), json!({ "prompt": "" })] {
            let resp = router().oneshot(post_json(payload.to_string())).await.unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body = read_json(resp).await;
            assert_eq!(body["error"], "Missing prompt");
            assert!(body.get("actions").is_none());
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let resp = router().oneshot(post_json("{not json")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = read_json(resp).await;
        assert_eq!(body["error"], "Invalid request body");
    }

    struct FailingAssistant {
        panic: bool,
    }

    #[async_trait]
    impl LayoutAssistant for FailingAssistant {
        async fn assist(&self, _request: &AssistRequest) -> Result<AssistResponse, AssistError> {
            if self.panic {
                panic!("backend exploded");
            }
            Err(AssistError::Internal("backend unavailable".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_backend_faults_are_internal_errors() {
        for panic in [false, true] {
            let router = build_router(
                AppState::new(Arc::new(FailingAssistant { panic })),
                &ServerConfig::default(),
            );
            let resp = router
                .oneshot(post_json(json!({ "prompt": "optimize" }).to_string()))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = read_json(resp).await;
            assert_eq!(body["error"], "Internal server error");
            assert_eq!(body["message"], messages::INTERNAL_ERROR.1);
        }
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_custom_endpoint_path() {
        let config = ServerConfig {
            endpoint: "/visual".to_string(),
            cors: false,
            ..Default::default()
        };
        let router = build_router(AppState::new(Arc::new(KeywordAssistant::default())), &config);
        let req = Request::builder()
            .method(Method::POST)
            .uri("/visual")
            .body(Body::from(json!({ "prompt": "color" }).to_string()))
            .unwrap();
        let resp = router.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
