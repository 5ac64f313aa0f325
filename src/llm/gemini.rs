//! Google Gemini `generateContent` API client.
//!
//! Thin HTTP wrapper for `/v1beta/models/{model}:generateContent`. Pure
//! parsing in `parse_response` for testability. The API key is passed per
//! call because the credential arrives with each request.

use std::time::Duration;

use super::config::LlmConfig;
use super::types::{ChatMessage, ChatReply, LlmChat, LlmError, Role};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    model: String,
}

impl GeminiClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, model: config.model.clone() })
    }

    /// Return the configured model name (e.g. `"gemini-1.5-flash-latest"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn chat_inner(
        &self,
        api_key: &str,
        temperature: f32,
        system: Option<&str>,
        messages: &[ChatMessage],
    ) -> Result<ChatReply, LlmError> {
        let body = build_request(temperature, system, messages);
        let url = format!("{API_BASE_URL}/{}:generateContent", self.model);

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text, &self.model)
    }
}

#[async_trait::async_trait]
impl LlmChat for GeminiClient {
    async fn chat(
        &self,
        api_key: &str,
        temperature: f32,
        system: Option<&str>,
        messages: &[ChatMessage],
    ) -> Result<ChatReply, LlmError> {
        self.chat_inner(api_key, temperature, system, messages).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent<'a>>,
    contents: Vec<WireTurn<'a>>,
    generation_config: GenerationConfig,
}

/// Role-less content block, used for the system instruction.
#[derive(serde::Serialize)]
struct WireContent<'a> {
    parts: Vec<WirePart<'a>>,
}

#[derive(serde::Serialize)]
struct WireTurn<'a> {
    role: &'static str,
    parts: Vec<WirePart<'a>>,
}

#[derive(serde::Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(serde::Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

// =============================================================================
// REQUEST BUILDING / PARSING
// =============================================================================

/// Gemini names the assistant role `model` on the wire.
fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

fn build_request<'a>(
    temperature: f32,
    system: Option<&'a str>,
    messages: &'a [ChatMessage],
) -> ApiRequest<'a> {
    ApiRequest {
        system_instruction: system.map(|text| WireContent { parts: vec![WirePart { text }] }),
        contents: messages
            .iter()
            .map(|m| WireTurn { role: wire_role(m.role), parts: vec![WirePart { text: &m.content }] })
            .collect(),
        generation_config: GenerationConfig { temperature },
    }
}

fn parse_response(json: &str, requested_model: &str) -> Result<ChatReply, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let Some(candidate) = api.candidates.into_iter().next() else {
        return Err(LlmError::ApiParse("response contained no candidates".into()));
    };

    // Text parts are continuation chunks of one completion; concatenate in order.
    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let (prompt_tokens, completion_tokens) = api
        .usage_metadata
        .map_or((0, 0), |u| (u.prompt_token_count, u.candidates_token_count));

    Ok(ChatReply {
        text,
        model: api.model_version.unwrap_or_else(|| requested_model.to_string()),
        finish_reason: candidate.finish_reason.unwrap_or_default(),
        prompt_tokens,
        completion_tokens,
    })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
