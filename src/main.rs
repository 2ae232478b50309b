//! topicbot binary entry point.
//!
//! Wires configuration, the Chat Completions client, and the terminal
//! prompter into one [`ChatBot`] session and runs it to completion.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use topicbot::chat::ChatBot;
use topicbot::config::BotConfig;
use topicbot::input::StdinPrompter;
use topicbot::llm::{ChatCompletionsClient, CompletionClient};
use topicbot::topic::Topic;

/// Global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go through tracing (stderr); chat text stays on stdout.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(EnvFilter::from_default_env())
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let config = match BotConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let settings = config.llm_settings();

    info!(
        name: "llm.config.loaded",
        base_url = %settings.base_url,
        model = %settings.model,
        temperature = settings.temperature,
        "LLM configuration loaded"
    );

    let client: Arc<dyn CompletionClient> = Arc::new(ChatCompletionsClient::new(settings));

    let mut bot = ChatBot::new(StdinPrompter::new(), client, config.ui.color);
    if let Some(topic) = &config.ui.topic {
        bot = bot.with_topic(Topic::new(topic));
    }

    bot.run().await?;
    Ok(())
}
