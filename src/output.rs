//! Terminal presentation: fixed chat lines and the ANSI background wrap.
//!
//! Responses are wrapped in a 256-color background escape followed by a
//! reset. Presentation only; nothing downstream parses these strings.

use crate::topic::Topic;

/// ANSI 256-color background index used for response text.
pub const RESPONSE_COLOR: u8 = 1;

/// Wrap `text` in a 256-color background escape and a reset.
#[must_use]
pub fn with_background(text: &str, color_index: u8) -> String {
    format!("\x1b[48;5;{color_index}m{text}\x1b[0m")
}

/// Greeting printed once at session start.
pub fn print_greeting() {
    println!("ChatBot: Hello! I am your chatbot.");
}

/// Confirmation printed when a topic is selected.
pub fn print_topic_confirmation(topic: &Topic) {
    println!("ChatBot: You've selected the topic: {topic}");
}

/// Guidance printed when input falls outside the current topic.
pub fn print_rejection(topic: &Topic) {
    println!("ChatBot: Your topic is \"{topic}\". Please ask a question related to this topic.");
}

/// The labelled, color-wrapped model response.
pub fn print_response(text: &str, color_index: u8) {
    println!("\nAI Response: {}", with_background(text, color_index));
}

/// Error notice for a response that parsed but carried no text.
pub fn print_empty_completion_notice() {
    eprintln!("Error: invalid response from the model (no text returned).");
}

/// Error notice for a failed collaborator call, with the cause.
pub fn print_call_failure(error: &anyhow::Error) {
    eprintln!("Error during model call: {error:#}");
}

/// Farewell printed when the session ends.
pub fn print_farewell() {
    println!("ChatBot: Goodbye!");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_wrap_pairs_escape_and_reset() {
        let wrapped = with_background("Hello", 1);
        assert_eq!(wrapped, "\x1b[48;5;1mHello\x1b[0m");
    }

    #[test]
    fn test_background_wrap_preserves_text() {
        let wrapped = with_background("multi word reply", RESPONSE_COLOR);
        assert!(wrapped.contains("multi word reply"));
        assert!(wrapped.starts_with("\x1b[48;5;"));
        assert!(wrapped.ends_with("\x1b[0m"));
    }
}
