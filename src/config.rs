//! Layered configuration: defaults, environment, CLI flags.
//!
//! Priority is CLI flag > environment variable > default. Structured
//! settings go through the `config` crate with a `CHATBOT_` prefix
//! (e.g. `CHATBOT_LLM__MODEL`); the API credential stays a plain
//! `LLM_API_KEY` environment variable and never becomes a flag.

use clap::Parser;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::env;

use crate::llm::{LlmSettings, Provider};
use crate::output::RESPONSE_COLOR;

/// Sampling temperature used when nothing overrides it.
const DEFAULT_TEMPERATURE: f64 = 0.5;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the completion API
    #[arg(long, env = "LLM_BASE_URL")]
    pub base_url: Option<String>,

    /// Model identifier
    #[arg(long, env = "LLM_MODEL")]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long, env = "LLM_TEMPERATURE")]
    pub temperature: Option<f64>,

    /// Preselect the conversation topic, skipping the topic prompt
    #[arg(long)]
    pub topic: Option<String>,

    /// ANSI 256-color background index for response text
    #[arg(long, env = "CHATBOT_COLOR")]
    pub color: Option<u8>,
}

/// Fully resolved application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    pub llm: LlmConfig,
    pub ui: UiConfig,
}

/// Completion collaborator settings (credential excluded).
#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
}

/// Terminal presentation settings.
#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub color: u8,
    pub topic: Option<String>,
}

impl BotConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("llm.base_url", "https://api.openai.com")?
            .set_default("llm.model", "gpt-4o-mini")?
            .set_default("llm.temperature", DEFAULT_TEMPERATURE)?
            .set_default("ui.color", i64::from(RESPONSE_COLOR))?
            .set_default("ui.topic", None::<String>)?;

        // 2. Environment variables prefixed with CHATBOT_
        // E.g. CHATBOT_LLM__MODEL=gpt-4o
        builder = builder.add_source(
            Environment::with_prefix("CHATBOT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 3. CLI overrides (clap also resolves the LLM_* env fallbacks
        // declared on the flags, so those land here too)
        if let Some(base_url) = cli.base_url {
            builder = builder.set_override("llm.base_url", base_url)?;
        }
        if let Some(model) = cli.model {
            builder = builder.set_override("llm.model", model)?;
        }
        if let Some(temperature) = cli.temperature {
            builder = builder.set_override("llm.temperature", temperature)?;
        }
        if let Some(color) = cli.color {
            builder = builder.set_override("ui.color", i64::from(color))?;
        }
        if let Some(topic) = cli.topic {
            builder = builder.set_override("ui.topic", topic)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }

    /// Build [`LlmSettings`] from this configuration plus the `LLM_API_KEY`
    /// environment variable.
    #[must_use]
    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            base_url: self.llm.base_url.clone(),
            api_key: load_api_key(),
            model: self.llm.model.clone(),
            temperature: self.llm.temperature,
            provider: Provider::detect_from_url(&self.llm.base_url),
        }
    }
}

/// Read the API credential from the environment, treating an empty value
/// as absent. Local OpenAI-compatible endpoints run without one.
#[must_use]
pub fn load_api_key() -> Option<String> {
    env::var("LLM_API_KEY").ok().filter(|s| !s.trim().is_empty())
}
