//! LLM types — provider-neutral message types and errors.
//!
//! Shared by the Gemini client, the guide service, and test mocks. The
//! transport returns raw completion text; nothing downstream parses or
//! validates model output.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized, or carried
    /// no usable completion.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MESSAGE TYPES
// =============================================================================

/// Author of a chat message. Closed set: unknown roles are rejected at
/// deserialization, which is the request-body validation for `/chat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a conversation. The caller resends the full
/// transcript with every request; nothing is stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Completion returned from an LLM chat call.
#[derive(Debug, Clone)]
pub struct ChatReply {
    /// Raw completion text, verbatim.
    pub text: String,
    pub model: String,
    pub finish_reason: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Provider-neutral async trait for LLM chat. Enables mocking in tests.
///
/// The API credential is a per-call argument: it arrives with each HTTP
/// request (bearer token or deployment default) and is never stored.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send a chat request to the LLM provider and return the completion.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the provider returns a
    /// non-success status, or the response is malformed.
    async fn chat(
        &self,
        api_key: &str,
        temperature: f32,
        system: Option<&str>,
        messages: &[ChatMessage],
    ) -> Result<ChatReply, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
