//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server is stateless across requests: state holds only the SQLite pool,
//! the LLM client, and the deployment-level credential defaults. Callers
//! resend the full transcript and city context with every request.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::llm::LlmChat;

/// Shared application state. Clone is required by Axum; inner fields are
/// Arc-wrapped or cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub llm: Arc<dyn LlmChat>,
    /// Deployment-level Gemini key used when a request carries no bearer
    /// token. `None` means token-less requests are rejected.
    pub default_api_key: Option<String>,
    /// When true, every request must carry its own bearer token.
    pub require_auth: bool,
}

impl AppState {
    #[must_use]
    pub fn new(
        pool: SqlitePool,
        llm: Arc<dyn LlmChat>,
        default_api_key: Option<String>,
        require_auth: bool,
    ) -> Self {
        Self { pool, llm, default_api_key, require_auth }
    }

    /// Build state with credential defaults from the environment:
    /// `DEFAULT_GEMINI_API_KEY` and `REQUIRE_AUTH`.
    #[must_use]
    pub fn from_env(pool: SqlitePool, llm: Arc<dyn LlmChat>) -> Self {
        let default_api_key = std::env::var("DEFAULT_GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let require_auth = env_bool("REQUIRE_AUTH").unwrap_or(false);
        Self::new(pool, llm, default_api_key, require_auth)
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

// =============================================================================
// TEST HELPERS
// =============================================================================
