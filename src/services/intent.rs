//! Intent router — save-vs-generate classification for chat messages.
//!
//! DESIGN
//! ======
//! The latest user-authored message is scanned for a "save <place>" phrase,
//! case-insensitive, anywhere in the message. Everything after "save" is
//! captured and trimmed as the candidate place name. A save intent with no
//! city context cannot be attributed to a city; it is surfaced as its own
//! variant so the caller can log the fall-through instead of silently
//! swallowing it.

use std::sync::OnceLock;

use regex::Regex;

/// Routing decision for one chat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Save intent with a city to attribute it to: persist, skip the LLM.
    Save { city: String, place_name: String },
    /// Save intent without a city context. Falls through to generation.
    SaveWithoutCity { place_name: String },
    /// No save intent: generate a chat reply.
    Chat,
}

fn save_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)save\s+(.+)").expect("valid save-intent pattern"))
}

/// Extract the candidate place name from a "save <place>" phrase, if any.
pub fn detect_save_intent(message: &str) -> Option<String> {
    save_pattern()
        .captures(message)
        .map(|captures| captures[1].trim().to_string())
}

/// Classify the most recent user message against the optional city context.
#[must_use]
pub fn classify(last_user_message: &str, city_context: Option<&str>) -> Intent {
    let Some(place_name) = detect_save_intent(last_user_message) else {
        return Intent::Chat;
    };

    match city_context {
        Some(city) if !city.trim().is_empty() => Intent::Save { city: city.to_string(), place_name },
        _ => Intent::SaveWithoutCity { place_name },
    }
}

#[cfg(test)]
#[path = "intent_test.rs"]
mod tests;
