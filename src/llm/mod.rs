//! Completion collaborator traits and implementations.
//!
//! This module defines the boundary between the conversation loop and the
//! external text-completion service. The [`CompletionClient`] trait is the
//! seam: the loop only ever sees a [`CompletionRequest`] going out and a
//! [`Completion`] coming back, so tests substitute a mock client and the
//! real implementation stays swappable.
//!
//! # Implementations
//!
//! - [`ChatCompletionsClient`]: OpenAI-compatible Chat Completions API
//!   (`/v1/chat/completions`), non-streaming.

pub mod chat_completions;
pub mod provider;

pub use chat_completions::ChatCompletionsClient;
pub use provider::Provider;

/// Opaque key-value state exchanged with the completion collaborator.
///
/// The core never reads or writes individual keys: the map is sent along
/// with every request and replaced wholesale whenever a response carries a
/// new one. Pinning the shape to a JSON object keeps the pass-through from
/// silently drifting.
pub type Context = serde_json::Map<String, serde_json::Value>;

/// LLM connection and model settings.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// Base URL for the LLM API (e.g., `https://api.openai.com`).
    pub base_url: String,
    /// Optional API key for authentication.
    pub api_key: Option<String>,
    /// Model identifier (e.g., `gpt-4o-mini`).
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Provider type, detected from `base_url`.
    pub provider: Provider,
}

/// One request to the completion collaborator.
///
/// The prompt is the raw user input. Identity templating only; nothing is
/// added around it.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Prompt text, verbatim from the user.
    pub prompt: String,
    /// Current session context, forwarded opaquely.
    pub context: Context,
}

/// The collaborator's answer to one request.
#[derive(Debug, Clone, Default)]
pub struct Completion {
    /// Generated text. `None` when the response parsed but carried no
    /// message content; the caller reports that as a malformed result.
    pub text: Option<String>,
    /// Replacement context, if the collaborator returned one.
    pub context: Option<Context>,
}

/// Trait for completion collaborators.
///
/// # Errors
///
/// `complete` returns an error for any transport, auth, or protocol
/// failure. Callers treat the cause as opaque: it is reported and the
/// session continues.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one prompt plus context and await the generated completion.
    async fn complete(&self, req: CompletionRequest) -> anyhow::Result<Completion>;
}
