//! Transcript and session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Appended to the transcript when a request fails outright.
pub const GENERIC_ERROR_FA: &str = "متأسفانه خطایی رخ داد. لطفاً دوباره تلاش کنید.";

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// A transcript entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Random UUID.
    pub id: String,
    /// Owning chat id; empty for an unsaved scratch chat.
    pub chat_id: String,
    /// Author role.
    pub role: Role,
    /// Text content.
    pub content: String,
    /// Source model id, for model answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Source persona id, for roundtable answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// Append timestamp; transcript order and timestamp order agree.
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id: String::new(),
            role,
            content: content.into(),
            model: None,
            persona: None,
            created_at: Utc::now(),
        }
    }
}

/// One prior turn as sent to the HTTP surface.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryTurn {
    /// Role string as the server expects it.
    pub role: String,
    /// Turn content.
    pub content: String,
}

/// The payload for one submission, captured before the optimistic
/// append so the history excludes the message being sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    /// The user's message.
    pub message: String,
    /// Selected model ids.
    pub models: Vec<String>,
    /// Active mode id.
    pub mode: String,
    /// Trailing transcript window.
    pub history: Vec<HistoryTurn>,
}

/// Process-local UI state for one chat.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    selected_models: Vec<String>,
    mode: String,
    balance: i64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(vec!["gpt-4.1".to_string()], "chat")
    }
}

impl ChatSession {
    /// Create a session with the given selections and an empty transcript.
    pub fn new(selected_models: Vec<String>, mode: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            selected_models,
            mode: mode.into(),
            balance: 0,
        }
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Selected model ids.
    pub fn selected_models(&self) -> &[String] {
        &self.selected_models
    }

    /// Replace the model selection.
    pub fn set_selected_models(&mut self, models: Vec<String>) {
        self.selected_models = models;
    }

    /// Active mode id.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Switch mode.
    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.mode = mode.into();
    }

    /// Displayed credit balance.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Set the displayed balance (e.g., after login).
    pub fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }

    /// Optimistically append the user's message and build the request
    /// payload. Returns `None` for blank input, which is not submitted.
    pub fn submit(&mut self, input: &str) -> Option<SubmitPayload> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }

        let history = self
            .messages
            .iter()
            .rev()
            .take(10)
            .rev()
            .map(|m| HistoryTurn {
                role: m.role.as_str().to_string(),
                content: m.content.clone(),
            })
            .collect();

        self.messages.push(Message::new(Role::User, message));

        Some(SubmitPayload {
            message: message.to_string(),
            models: self.selected_models.clone(),
            mode: self.mode.clone(),
            history,
        })
    }

    /// Append one model answer to the transcript.
    pub fn apply_model_response(&mut self, model: &str, content: &str) {
        let mut message = Message::new(Role::Assistant, content);
        message.model = Some(model.to_string());
        self.messages.push(message);
    }

    /// Append one persona answer to the transcript.
    pub fn apply_persona_response(&mut self, persona: &str, content: &str) {
        let mut message = Message::new(Role::Assistant, content);
        message.persona = Some(persona.to_string());
        self.messages.push(message);
    }

    /// Deduct the server-reported cost from the displayed balance.
    pub fn deduct(&mut self, credits_used: i64) {
        self.balance -= credits_used;
    }

    /// Append the generic error message. The optimistic user message
    /// stays where it is.
    pub fn apply_failure(&mut self) {
        self.messages.push(Message::new(Role::Assistant, GENERIC_ERROR_FA));
    }
}
