//! Provider-specific configuration and detection.
//!
//! This module handles differences between LLM API providers, currently
//! just URL patterns. All supported providers speak the OpenAI-compatible
//! Chat Completions protocol.

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// `OpenAI` (api.openai.com)
    OpenAI,
    /// `OpenRouter` (openrouter.ai)
    OpenRouter,
    /// Groq (groq.com)
    Groq,
    /// Generic OpenAI-compatible provider
    Generic,
}

impl Provider {
    /// Detect provider from base URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use topicbot::llm::Provider;
    ///
    /// let provider = Provider::detect_from_url("https://api.openai.com");
    /// assert_eq!(provider, Provider::OpenAI);
    /// ```
    #[must_use]
    pub fn detect_from_url(base_url: &str) -> Self {
        let lower = base_url.to_lowercase();

        if lower.contains("openrouter.ai") {
            Self::OpenRouter
        } else if lower.contains("groq.com") {
            Self::Groq
        } else if lower.contains("openai.com") {
            Self::OpenAI
        } else {
            Self::Generic
        }
    }

    /// Build the chat completions URL for this provider.
    #[must_use]
    pub fn build_chat_url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');

        match self {
            // Groq nests the OpenAI-compatible surface under /openai.
            Self::Groq if !base.contains("/openai") => {
                format!("{base}/openai/v1/chat/completions")
            }
            _ => format!("{base}/v1/chat/completions"),
        }
    }
}
