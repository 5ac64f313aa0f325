//! Upstream credential extraction.
//!
//! DESIGN
//! ======
//! The Gemini API key reaches a handler one of two ways: a bearer-token
//! `Authorization` header on the request, or the deployment-level
//! `DEFAULT_GEMINI_API_KEY` fallback held in [`AppState`]. Use the
//! extractor as a handler parameter to require a usable credential;
//! favorites endpoints take no credential at all.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;

use super::error::ApiError;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";
const MIN_API_KEY_LEN: usize = 10;

/// Gemini API key resolved for one request.
#[derive(Debug)]
pub struct ApiCredential {
    pub key: String,
}

impl<S> FromRequestParts<S> for ApiCredential
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        if let Some(value) = header {
            let Some(token) = value.strip_prefix(BEARER_PREFIX) else {
                return Err(ApiError::unauthorized("invalid authorization scheme, expected Bearer"));
            };
            let token = token.trim();
            if token.len() < MIN_API_KEY_LEN {
                return Err(ApiError::unauthorized("invalid API key format"));
            }
            return Ok(Self { key: token.to_owned() });
        }

        let app_state = AppState::from_ref(state);
        if app_state.require_auth {
            return Err(ApiError::unauthorized("API key required"));
        }
        match app_state.default_api_key {
            Some(key) => Ok(Self { key }),
            None => Err(ApiError::service_unavailable("Gemini API key is not configured")),
        }
    }
}

#[cfg(test)]
#[path = "credential_test.rs"]
mod tests;
