//! LLM — Gemini adapter for guide and chat generation.
//!
//! DESIGN
//! ======
//! A single provider (Google Gemini) behind the provider-neutral [`LlmChat`]
//! trait. Services depend on the trait, never the concrete client, so tests
//! can substitute a mock. The API credential travels with each call.

pub mod config;
pub mod gemini;
pub mod types;

pub use types::LlmChat;
