//! Configuration layering tests: defaults, environment, CLI flags.
//!
//! These tests mutate process environment variables, so they run serially.

use serial_test::serial;
use std::env;

use topicbot::config::{BotConfig, load_api_key};

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("LLM_BASE_URL");
        env::remove_var("LLM_MODEL");
        env::remove_var("LLM_TEMPERATURE");
        env::remove_var("LLM_API_KEY");
        env::remove_var("CHATBOT_COLOR");
        env::remove_var("CHATBOT_LLM__BASE_URL");
        env::remove_var("CHATBOT_LLM__MODEL");
        env::remove_var("CHATBOT_LLM__TEMPERATURE");
        env::remove_var("CHATBOT_UI__COLOR");
        env::remove_var("CHATBOT_UI__TOPIC");
    }
}

#[test]
#[serial]
fn test_defaults_with_clean_env() {
    clear_env_vars();

    let config = BotConfig::load_from_args(["topicbot"]).expect("defaults load");
    assert_eq!(config.llm.base_url, "https://api.openai.com");
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert!((config.llm.temperature - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.ui.color, 1);
    assert!(config.ui.topic.is_none());
}

#[test]
#[serial]
fn test_prefixed_env_overrides_defaults() {
    clear_env_vars();
    unsafe {
        env::set_var("CHATBOT_LLM__MODEL", "env-model");
    }

    let config = BotConfig::load_from_args(["topicbot"]).expect("config loads");
    assert_eq!(config.llm.model, "env-model");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flag_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("CHATBOT_LLM__MODEL", "env-model");
    }

    let config =
        BotConfig::load_from_args(["topicbot", "--model", "cli-model"]).expect("config loads");
    assert_eq!(config.llm.model, "cli-model");

    clear_env_vars();
}

#[test]
#[serial]
fn test_clap_env_fallback_flags() {
    clear_env_vars();
    unsafe {
        env::set_var("LLM_BASE_URL", "http://localhost:11434");
        env::set_var("LLM_TEMPERATURE", "0.9");
    }

    let config = BotConfig::load_from_args(["topicbot"]).expect("config loads");
    assert_eq!(config.llm.base_url, "http://localhost:11434");
    assert!((config.llm.temperature - 0.9).abs() < f64::EPSILON);

    clear_env_vars();
}

#[test]
#[serial]
fn test_topic_and_color_flags() {
    clear_env_vars();

    let config = BotConfig::load_from_args(["topicbot", "--topic", "AI Ethics", "--color", "4"])
        .expect("config loads");
    assert_eq!(config.ui.topic.as_deref(), Some("AI Ethics"));
    assert_eq!(config.ui.color, 4);
}

#[test]
#[serial]
fn test_api_key_absent_or_blank_is_none() {
    clear_env_vars();
    assert!(load_api_key().is_none());

    unsafe {
        env::set_var("LLM_API_KEY", "   ");
    }
    assert!(load_api_key().is_none());

    unsafe {
        env::set_var("LLM_API_KEY", "sk-test");
    }
    assert_eq!(load_api_key().as_deref(), Some("sk-test"));

    clear_env_vars();
}

#[test]
#[serial]
fn test_llm_settings_detects_provider() {
    clear_env_vars();

    let config = BotConfig::load_from_args(["topicbot"]).expect("config loads");
    let settings = config.llm_settings();
    assert_eq!(settings.provider, topicbot::llm::Provider::OpenAI);
    assert!(settings.api_key.is_none());
}
