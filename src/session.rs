//! Session state for a single chat run.
//!
//! One [`Session`] lives for the lifetime of the process: created at
//! startup, mutated by the conversation loop, discarded at exit. Nothing
//! is persisted. The loop owns the session exclusively (the whole program
//! is one logical thread), so this is a plain owned struct, not a shared
//! handle.

use crate::llm::Context;
use crate::topic::Topic;

/// Mutable per-session state: the chosen topic and the opaque context
/// blob exchanged with the completion collaborator.
#[derive(Debug, Default)]
pub struct Session {
    topic: Option<Topic>,
    context: Context,
}

impl Session {
    /// Create a fresh session with no topic and an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current topic, if one has been selected.
    #[must_use]
    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    /// Set the session topic. Set exactly once per session; the
    /// conversation loop never calls this again after selection.
    pub fn set_topic(&mut self, topic: Topic) {
        debug_assert!(self.topic.is_none(), "topic is set once per session");
        self.topic = Some(topic);
    }

    /// A clone of the current context, for building a completion request.
    #[must_use]
    pub fn context(&self) -> Context {
        self.context.clone()
    }

    /// Replace the context wholesale with one returned by the collaborator.
    ///
    /// A turn that yields no new context leaves the existing one untouched;
    /// callers simply don't call this.
    pub fn replace_context(&mut self, context: Context) {
        self.context = context;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_session_has_no_topic() {
        let session = Session::new();
        assert!(session.topic().is_none());
        assert!(session.context().is_empty());
    }

    #[test]
    fn test_set_topic_once() {
        let mut session = Session::new();
        session.set_topic(Topic::new("chess"));
        assert_eq!(session.topic().unwrap().as_str(), "chess");
    }

    #[test]
    fn test_replace_context_is_wholesale() {
        let mut session = Session::new();

        let mut first = Context::new();
        first.insert("a".to_string(), json!(1));
        session.replace_context(first);
        assert_eq!(session.context().len(), 1);

        let mut second = Context::new();
        second.insert("b".to_string(), json!(2));
        session.replace_context(second);

        let ctx = session.context();
        assert_eq!(ctx.len(), 1);
        assert!(ctx.contains_key("b"));
        assert!(!ctx.contains_key("a"));
    }
}
