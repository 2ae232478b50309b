//! Line-based terminal input as an awaitable prompt/response primitive.
//!
//! [`Prompter`] is the seam between the conversation loop and the terminal:
//! the loop asks for one line at a time and suspends until it arrives. The
//! real implementation holds the process stdin for the whole session; tests
//! use [`ScriptedPrompter`] to replay a canned transcript.

use std::collections::VecDeque;
use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// An awaitable "print a prompt, read a line" primitive.
///
/// `prompt` writes `text` to the terminal, suspends until a full line of
/// input arrives, and resolves to the newline-trimmed string. `Ok(None)`
/// is the EOF sentinel: the input stream closed, which the caller treats
/// as an implicit exit rather than a hang.
#[async_trait::async_trait]
pub trait Prompter: Send {
    /// Display `text` and await one line of input.
    async fn prompt(&mut self, text: &str) -> std::io::Result<Option<String>>;
}

/// [`Prompter`] over the process stdin.
///
/// The underlying handle is acquired once at construction and reused for
/// every prompt across the session lifetime.
#[derive(Debug)]
pub struct StdinPrompter {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinPrompter {
    /// Create a prompter reading from the process stdin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait::async_trait]
impl Prompter for StdinPrompter {
    async fn prompt(&mut self, text: &str) -> std::io::Result<Option<String>> {
        // The prompt has no trailing newline, so flush before blocking.
        {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{text}")?;
            stdout.flush()?;
        }

        self.lines.next_line().await
    }
}

/// Queue-backed [`Prompter`] for tests.
///
/// Replays a fixed sequence of input lines and records every prompt text
/// it was asked to display. Once the queue is drained, it reports EOF.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that will answer with `inputs` in order.
    #[must_use]
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt text displayed so far, in order.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

#[async_trait::async_trait]
impl Prompter for ScriptedPrompter {
    async fn prompt(&mut self, text: &str) -> std::io::Result<Option<String>> {
        self.prompts.push(text.to_string());
        Ok(self.inputs.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_prompter_replays_then_eof() {
        let mut prompter = ScriptedPrompter::new(["first", "second"]);

        assert_eq!(
            prompter.prompt("> ").await.unwrap(),
            Some("first".to_string())
        );
        assert_eq!(
            prompter.prompt("> ").await.unwrap(),
            Some("second".to_string())
        );
        assert_eq!(prompter.prompt("> ").await.unwrap(), None);
        assert_eq!(prompter.prompts().len(), 3);
    }
}
