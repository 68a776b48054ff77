//! OpenRouter API request and response types.

use agent_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// A chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// OpenRouter model identifier (e.g., "openai/gpt-4.1").
    pub model: String,
    /// Messages for the conversation, system prompt included.
    pub messages: Vec<ChatMessage>,
    /// Response length budget.
    pub max_tokens: u32,
}

/// A chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response choices (typically one).
    pub choices: Vec<Choice>,
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ResponseMessage,
}

/// The message within a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Generated text, if any.
    pub content: Option<String>,
}

/// An API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable error message.
    pub message: String,
}
