//! API error type — HTTP status plus a JSON `{error}` body.
//!
//! Service errors are mapped here at the boundary; responses carry the
//! underlying message but never a stack trace.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::llm::types::LlmError;
use crate::services::favorites::FavoritesError;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self { status: StatusCode::UNAUTHORIZED, message: message.into() }
    }

    #[must_use]
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self { status: StatusCode::SERVICE_UNAVAILABLE, message: message.into() }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into() }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

impl From<FavoritesError> for ApiError {
    fn from(err: FavoritesError) -> Self {
        Self::internal(format!("favorites store failure: {err}"))
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        Self::internal(format!("generation failed: {err}"))
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
