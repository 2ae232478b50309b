//! Topic selection and the keyword-containment relevance filter.
//!
//! A [`Topic`] is chosen once per session and never changes afterwards.
//! Relevance is a deliberately naive containment check: the topic is split
//! on whitespace into keywords, and an input is in-topic iff at least one
//! keyword appears as a case-insensitive substring of it. Short keywords
//! match very broadly; that permissiveness is part of the contract, not a
//! bug to tighten.

/// A user-chosen conversation topic, case-folded to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// Create a topic from raw user input, folding it to lowercase.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    /// The lowercase topic string as entered (minus case).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The whitespace-delimited keyword tokens of this topic.
    ///
    /// Order is irrelevant and duplicates are harmless; callers only ever
    /// ask "does any keyword match".
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// Whether `input` is related to this topic.
    ///
    /// True iff some keyword of the topic is a substring of the
    /// lowercased input. Empty input never matches.
    #[must_use]
    pub fn is_related(&self, input: &str) -> bool {
        let haystack = input.to_lowercase();
        self.keywords().any(|keyword| haystack.contains(keyword))
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_is_lowercased() {
        let topic = Topic::new("AI Ethics");
        assert_eq!(topic.as_str(), "ai ethics");
    }

    #[test]
    fn test_single_keyword_match_accepts() {
        let topic = Topic::new("ai ethics");
        assert!(topic.is_related("tell me about AI safety"));
    }

    #[test]
    fn test_no_keyword_match_rejects() {
        let topic = Topic::new("cooking");
        assert!(!topic.is_related("what's the weather"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let topic = Topic::new("Rust");
        assert!(topic.is_related("why is RUST fast?"));
    }

    #[test]
    fn test_substring_match_inside_word() {
        // Containment, not word-boundary matching.
        let topic = Topic::new("art");
        assert!(topic.is_related("let's talk about cartography"));
    }

    #[test]
    fn test_short_keywords_match_broadly() {
        // Known precision limitation, preserved on purpose: a one-letter
        // keyword accepts nearly everything.
        let topic = Topic::new("a b");
        assert!(topic.is_related("almost any sentence"));
    }

    #[test]
    fn test_empty_input_rejects() {
        let topic = Topic::new("music");
        assert!(!topic.is_related(""));
    }

    #[test]
    fn test_duplicate_keywords_harmless() {
        let topic = Topic::new("jazz jazz jazz");
        assert!(topic.is_related("some jazz standards"));
        assert!(!topic.is_related("classical only"));
    }
}
