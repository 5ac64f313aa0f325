//! Guide service — persona prompts and LLM orchestration.
//!
//! DESIGN
//! ======
//! Two single-shot operations over the [`LlmChat`] trait: a city guide from
//! a fixed persona template, and a chat reply over the caller-supplied
//! transcript. Completion text is returned verbatim; no retry, no
//! streaming, no parsing of model output.

use crate::llm::LlmChat;
use crate::llm::types::{ChatMessage, LlmError, Role};

pub const GUIDE_TEMPERATURE: f32 = 0.8;
pub const CHAT_TEMPERATURE: f32 = 0.7;

const CHAT_SYSTEM_PROMPT: &str = "You are Amelie, a helpful and friendly travel guide. \
     Continue the conversation naturally based on the user's questions.";

fn build_guide_prompt(city: &str) -> String {
    format!(
        "**Persona:** You are 'Amelie', a witty, modern, and super-friendly travel blogger.\n\
         \n\
         **Task:** Generate a 'Top 6 Attractions' list for {city}.\n\
         For each attraction, provide: an emoji, **Name**, **Location**, **Why it's a must-visit**, and a **Pro Tip**.\n\
         \n\
         **Crucially**, after the list, conclude with a friendly question and mention that the user can ask you to \
         **save a place** to their favorites list.\n\
         Example closer: \"So, what's on your mind? Ask me for more details on any of these, or just say \
         **'save The Louvre'** to add it to your list! We can also switch languages if you prefer.\""
    )
}

/// Generate a city guide from the fixed persona template.
///
/// # Errors
///
/// Returns an [`LlmError`] if the upstream call fails.
pub async fn generate_guide(llm: &dyn LlmChat, api_key: &str, city: &str) -> Result<String, LlmError> {
    let prompt = build_guide_prompt(city);
    let messages = [ChatMessage { role: Role::User, content: prompt }];

    let reply = llm.chat(api_key, GUIDE_TEMPERATURE, None, &messages).await?;
    tracing::info!(
        %city,
        model = %reply.model,
        finish_reason = %reply.finish_reason,
        prompt_tokens = reply.prompt_tokens,
        completion_tokens = reply.completion_tokens,
        "guide generated"
    );

    Ok(reply.text)
}

/// Generate a chat reply over the caller-supplied transcript.
///
/// # Errors
///
/// Returns an [`LlmError`] if the upstream call fails.
pub async fn generate_chat_reply(
    llm: &dyn LlmChat,
    api_key: &str,
    transcript: &[ChatMessage],
) -> Result<String, LlmError> {
    let reply = llm
        .chat(api_key, CHAT_TEMPERATURE, Some(CHAT_SYSTEM_PROMPT), transcript)
        .await?;
    tracing::info!(
        transcript_len = transcript.len(),
        model = %reply.model,
        finish_reason = %reply.finish_reason,
        prompt_tokens = reply.prompt_tokens,
        completion_tokens = reply.completion_tokens,
        "chat reply generated"
    );

    Ok(reply.text)
}

#[cfg(test)]
#[path = "guide_test.rs"]
mod tests;
