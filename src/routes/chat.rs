//! Chat route — intent-routed conversation endpoint.
//!
//! DESIGN
//! ======
//! The caller resends the full transcript plus an optional city context on
//! every request. The latest user message is classified: a save intent with
//! a city context persists a favorite and replies with the store's status
//! text; everything else goes to the LLM. A save intent without a city
//! context cannot be attributed and falls through to the LLM; the
//! fall-through is logged because the save is silently dropped from the
//! user's point of view.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::credential::ApiCredential;
use super::error::ApiError;
use super::favorites::save_outcome_message;
use crate::llm::types::{ChatMessage, Role};
use crate::services::intent::{self, Intent};
use crate::services::{favorites, guide};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub city_context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Latest user-authored message, or empty when the transcript has none.
fn last_user_message(messages: &[ChatMessage]) -> &str {
    messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map_or("", |m| m.content.as_str())
}

/// `POST /chat` — reply to a transcript, or persist a save intent.
pub async fn chat(
    State(state): State<AppState>,
    credential: ApiCredential,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if body.messages.is_empty() {
        return Err(ApiError::bad_request("messages must not be empty"));
    }
    if body.messages.iter().any(|m| m.content.trim().is_empty()) {
        return Err(ApiError::bad_request("message content must not be empty"));
    }

    let last = last_user_message(&body.messages);
    let response = match intent::classify(last, body.city_context.as_deref()) {
        Intent::Save { city, place_name } => {
            let outcome = favorites::add(&state.pool, &city, &place_name).await?;
            save_outcome_message(outcome, &place_name)
        }
        Intent::SaveWithoutCity { place_name } => {
            tracing::warn!(%place_name, "save intent without city context, falling through to chat");
            guide::generate_chat_reply(state.llm.as_ref(), &credential.key, &body.messages)
                .await
                .map_err(|e| ApiError::internal(format!("failed to process chat request: {e}")))?
        }
        Intent::Chat => guide::generate_chat_reply(state.llm.as_ref(), &credential.key, &body.messages)
            .await
            .map_err(|e| ApiError::internal(format!("failed to process chat request: {e}")))?,
    };

    Ok(Json(ChatResponse { response, timestamp: OffsetDateTime::now_utc() }))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
