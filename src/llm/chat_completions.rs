//! OpenAI Chat Completions API client.
//!
//! This module implements the [`CompletionClient`] trait against the
//! OpenAI-compatible Chat Completions API (`/v1/chat/completions`),
//! non-streaming. The session context rides along in the request body
//! under `"context"` and, when the response echoes a `"context"` object
//! back, it is surfaced as the replacement context.

use uuid::Uuid;

use super::{Completion, CompletionClient, CompletionRequest, Context, LlmSettings};

/// Client for the OpenAI Chat Completions API.
#[derive(Clone)]
pub struct ChatCompletionsClient {
    http: reqwest::Client,
    settings: LlmSettings,
}

impl std::fmt::Debug for ChatCompletionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionsClient")
            .field("settings", &self.settings)
            .finish()
    }
}

impl ChatCompletionsClient {
    /// Create a new Chat Completions client with the given settings.
    #[must_use]
    pub fn new(settings: LlmSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// The settings this client was built with.
    #[must_use]
    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl CompletionClient for ChatCompletionsClient {
    async fn complete(&self, req: CompletionRequest) -> anyhow::Result<Completion> {
        let request_id = Uuid::new_v4().to_string();
        let url = self
            .settings
            .provider
            .build_chat_url(&self.settings.base_url);

        let body = serde_json::json!({
            "model": self.settings.model,
            "temperature": self.settings.temperature,
            "stream": false,
            "messages": [
                { "role": "user", "content": req.prompt }
            ],
            "context": serde_json::Value::Object(req.context),
        });

        tracing::debug!(
            request_id = %request_id,
            model = %self.settings.model,
            prompt_length = body["messages"][0]["content"]
                .as_str()
                .map_or(0, str::len),
            "Sending completion request"
        );

        let mut rb = self.http.post(&url).json(&body);
        if let Some(k) = &self.settings.api_key {
            rb = rb.bearer_auth(k);
        }

        let resp = rb.send().await?.error_for_status()?;
        let value: serde_json::Value = resp.json().await?;

        let completion = extract_completion(&value);

        tracing::debug!(
            request_id = %request_id,
            has_text = completion.text.is_some(),
            has_context = completion.context.is_some(),
            "Completion request finished"
        );

        Ok(completion)
    }
}

/// Pull the generated text and optional replacement context out of a
/// Chat Completions response body.
///
/// A response without `choices[0].message.content` yields `text: None`;
/// classifying that as a malformed result is the caller's job.
fn extract_completion(value: &serde_json::Value) -> Completion {
    let text = value["choices"][0]["message"]["content"]
        .as_str()
        .map(ToString::to_string);

    let context: Option<Context> = value
        .get("context")
        .and_then(serde_json::Value::as_object)
        .cloned();

    Completion { text, context }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_text_from_choices() {
        let value = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Hello" } }
            ]
        });

        let completion = extract_completion(&value);
        assert_eq!(completion.text.as_deref(), Some("Hello"));
        assert!(completion.context.is_none());
    }

    #[test]
    fn test_missing_content_yields_none() {
        let value = json!({
            "choices": [
                { "message": { "role": "assistant" } }
            ]
        });

        let completion = extract_completion(&value);
        assert!(completion.text.is_none());
    }

    #[test]
    fn test_empty_body_yields_none() {
        let completion = extract_completion(&json!({}));
        assert!(completion.text.is_none());
        assert!(completion.context.is_none());
    }

    #[test]
    fn test_context_object_is_surfaced() {
        let value = json!({
            "choices": [
                { "message": { "content": "ok" } }
            ],
            "context": { "turns": 3 }
        });

        let completion = extract_completion(&value);
        let context = completion.context.expect("context object present");
        assert_eq!(context["turns"], json!(3));
    }

    #[test]
    fn test_non_object_context_is_ignored() {
        let value = json!({
            "choices": [{ "message": { "content": "ok" } }],
            "context": "not a map"
        });

        let completion = extract_completion(&value);
        assert!(completion.context.is_none());
    }
}
