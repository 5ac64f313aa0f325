//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the HTTP endpoints, CORS, and the catch-all panic
//! handler into a single Axum router. Handlers live in the sibling modules;
//! health and the service banner are small enough to stay here.

pub mod chat;
pub mod credential;
pub mod error;
pub mod favorites;
pub mod guide;

use axum::Router;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::Serialize;
use time::OffsetDateTime;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::state::AppState;
use error::ApiError;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/guide", post(guide::generate_guide))
        .route("/chat", post(chat::chat))
        .route(
            "/favorites",
            post(favorites::save_favorite)
                .get(favorites::list_favorites)
                .delete(favorites::clear_favorites),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer())
        .with_state(state)
}

/// CORS from `ALLOWED_ORIGINS` (comma-separated). Absent or `*` allows any
/// origin.
fn cors_layer() -> CorsLayer {
    let raw = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Last-resort conversion of a handler panic into a generic 500. Keeps the
/// panic payload out of the response.
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    ApiError::internal("an unexpected error occurred").into_response()
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// `GET /health` — liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        timestamp: OffsetDateTime::now_utc(),
    })
}

/// `GET /` — service banner.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Personalized AI Travel Guide API",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy() {
        let response = health().await;
        assert_eq!(response.0.status, "healthy");
        assert_eq!(response.0.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn root_banner_points_at_health() {
        let response = root().await;
        assert_eq!(response.0["health"], "/health");
    }

    #[tokio::test]
    async fn panic_handler_returns_generic_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "an unexpected error occurred");
    }
}
