//! Conversation message and completion types.

use serde::{Deserialize, Serialize};

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// The answer produced for a single target.
///
/// `degraded` distinguishes a live backend answer from a locally
/// generated fallback so callers can surface the difference without
/// changing the default behavior of always returning text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Answer text. Never empty.
    pub content: String,
    /// True when the content is a fallback template, not a live answer.
    pub degraded: bool,
}

impl Completion {
    /// A live answer from the backend.
    pub fn live(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            degraded: false,
        }
    }

    /// A locally generated fallback answer.
    pub fn fallback(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            degraded: true,
        }
    }
}
