//! topicbot
//!
//! An interactive terminal chatbot that restricts conversation to a
//! user-chosen topic. In-topic questions are forwarded verbatim to an
//! OpenAI-compatible completion API and the response is printed in a
//! fixed background color; off-topic questions are rejected before any
//! network call is made.
//!
//! # Modules
//!
//! - [`chat`]: the conversation loop state machine
//! - [`config`]: layered configuration (defaults, environment, CLI)
//! - [`input`]: awaitable line-based terminal input
//! - [`llm`]: the completion collaborator boundary
//! - [`output`]: fixed chat lines and the ANSI background wrap
//! - [`session`]: per-session mutable state
//! - [`topic`]: the keyword-containment topic filter

pub mod chat;
pub mod config;
pub mod input;
pub mod llm;
pub mod output;
pub mod session;
pub mod topic;
