//! The conversation loop state machine.
//!
//! One session moves through four states: awaiting a topic, awaiting a
//! turn of input, processing that turn, and ended. Processing never halts
//! the session: a turn finishes as answered, rejected, or failed, and the
//! loop always comes back to the input prompt. Only an explicit `exit`
//! (or EOF on the input stream) ends the session.
//!
//! Turn handling returns a typed [`TurnOutcome`] rather than signalling
//! through printed text, so a test harness asserts on the outcome value
//! while the loop layer owns all printing.

use std::sync::Arc;

use crate::input::Prompter;
use crate::llm::{CompletionClient, CompletionRequest};
use crate::output;
use crate::session::Session;
use crate::topic::Topic;

/// Prompt shown while a topic has not been chosen yet.
const TOPIC_PROMPT: &str = "\nEnter the topic you want to discuss: ";

/// The exit token, compared case-insensitively against whole lines.
const EXIT_TOKEN: &str = "exit";

/// States of the conversation loop.
#[derive(Debug)]
enum ChatState {
    /// No topic chosen yet; prompting for one.
    AwaitingTopic,
    /// Topic set; prompting for the next turn.
    AwaitingInput,
    /// Handling one turn of input.
    Processing(String),
    /// Session over; farewell and release the terminal.
    Ended,
}

/// Why a turn failed.
#[derive(Debug, thiserror::Error)]
pub enum TurnFailure {
    /// The collaborator answered, but the response carried no text.
    #[error("model returned a response with no text")]
    EmptyCompletion,
    /// The collaborator call itself failed; the cause is opaque.
    #[error(transparent)]
    Client(#[from] anyhow::Error),
}

/// The result of handling one turn of user input.
#[derive(Debug)]
pub enum TurnOutcome {
    /// In-topic input, answered by the collaborator.
    Answered(String),
    /// Off-topic input; no collaborator call was made.
    Rejected,
    /// In-topic input whose turn failed. Non-fatal to the session.
    Failed(TurnFailure),
}

/// A topic-restricted chatbot session over a [`Prompter`] and a
/// [`CompletionClient`].
pub struct ChatBot<P: Prompter> {
    prompter: P,
    client: Arc<dyn CompletionClient>,
    session: Session,
    color: u8,
}

impl<P: Prompter> std::fmt::Debug for ChatBot<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatBot")
            .field("session", &self.session)
            .field("color", &self.color)
            .finish()
    }
}

impl<P: Prompter> ChatBot<P> {
    /// Create a chatbot over the given input source and collaborator.
    #[must_use]
    pub fn new(prompter: P, client: Arc<dyn CompletionClient>, color: u8) -> Self {
        Self {
            prompter,
            client,
            session: Session::new(),
            color,
        }
    }

    /// Preselect the topic; the session skips the interactive selector.
    #[must_use]
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.session.set_topic(topic);
        self
    }

    /// The session state, for assertions in tests.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the session to completion.
    ///
    /// Greeting, topic selection, then one turn per loop iteration until
    /// the user types `exit` or the input stream closes. Errors from the
    /// collaborator never escape a turn; only terminal I/O failures end
    /// the run early.
    pub async fn run(&mut self) -> std::io::Result<()> {
        output::print_greeting();

        let mut state = ChatState::AwaitingTopic;

        loop {
            state = match state {
                ChatState::AwaitingTopic => {
                    if let Some(topic) = self.session.topic() {
                        // Preselected topic; skip the selector.
                        output::print_topic_confirmation(topic);
                        ChatState::AwaitingInput
                    } else {
                        match self.select_topic().await? {
                            Some(topic) => {
                                tracing::info!(name: "chat.topic.selected", topic = %topic, "Topic selected");
                                output::print_topic_confirmation(&topic);
                                self.session.set_topic(topic);
                                ChatState::AwaitingInput
                            }
                            None => ChatState::Ended,
                        }
                    }
                }
                ChatState::AwaitingInput => {
                    // Loop invariant: a topic exists past AwaitingTopic.
                    let prompt = self.session.topic().map_or_else(
                        || TOPIC_PROMPT.to_string(),
                        |topic| {
                            format!("\nEnter your question or statement on the topic \"{topic}\": ")
                        },
                    );

                    match self.prompter.prompt(&prompt).await? {
                        None => ChatState::Ended,
                        Some(line) if line.eq_ignore_ascii_case(EXIT_TOKEN) => ChatState::Ended,
                        Some(line) => ChatState::Processing(line),
                    }
                }
                ChatState::Processing(input) => {
                    let outcome = self.handle_turn(&input).await;
                    self.report(&outcome);
                    // Whatever happened this turn, prompt again.
                    ChatState::AwaitingInput
                }
                ChatState::Ended => {
                    output::print_farewell();
                    return Ok(());
                }
            };
        }
    }

    /// Prompt until a topic is chosen or the user exits.
    ///
    /// Empty lines re-prompt; the exit token (or EOF) ends selection with
    /// `None` before any topic is ever set.
    async fn select_topic(&mut self) -> std::io::Result<Option<Topic>> {
        loop {
            let Some(line) = self.prompter.prompt(TOPIC_PROMPT).await? else {
                return Ok(None);
            };

            if line.eq_ignore_ascii_case(EXIT_TOKEN) {
                return Ok(None);
            }

            if line.is_empty() {
                continue;
            }

            return Ok(Some(Topic::new(line)));
        }
    }

    /// Handle one turn of user input.
    ///
    /// Off-topic input is rejected without any collaborator call. In-topic
    /// input becomes the prompt verbatim, sent with the current session
    /// context; the context is replaced wholesale iff the completion
    /// carries a new one. No outcome mutates the context on failure.
    pub async fn handle_turn(&mut self, input: &str) -> TurnOutcome {
        let Some(topic) = self.session.topic().cloned() else {
            // Unreachable from run(); callers outside the loop must set a
            // topic first.
            return TurnOutcome::Rejected;
        };

        if !topic.is_related(input) {
            tracing::debug!(name: "chat.turn.rejected", topic = %topic, "Off-topic input rejected");
            return TurnOutcome::Rejected;
        }

        let req = CompletionRequest {
            prompt: input.to_string(),
            context: self.session.context(),
        };

        match self.client.complete(req).await {
            Ok(completion) => match completion.text {
                Some(text) => {
                    if let Some(context) = completion.context {
                        self.session.replace_context(context);
                    }
                    TurnOutcome::Answered(text)
                }
                None => TurnOutcome::Failed(TurnFailure::EmptyCompletion),
            },
            Err(e) => {
                tracing::warn!(name: "chat.turn.failed", error = %e, "Completion call failed");
                TurnOutcome::Failed(TurnFailure::Client(e))
            }
        }
    }

    /// Print the user-facing line for a turn outcome.
    fn report(&self, outcome: &TurnOutcome) {
        match outcome {
            TurnOutcome::Answered(text) => output::print_response(text, self.color),
            TurnOutcome::Rejected => {
                if let Some(topic) = self.session.topic() {
                    output::print_rejection(topic);
                }
            }
            TurnOutcome::Failed(TurnFailure::EmptyCompletion) => {
                output::print_empty_completion_notice();
            }
            TurnOutcome::Failed(TurnFailure::Client(e)) => output::print_call_failure(e),
        }
    }
}
