//! Error types for backend calls.

use thiserror::Error;

/// Errors that can occur while calling a chat-completion backend.
///
/// None of these reach the end user: the orchestrator absorbs every
/// variant into the deterministic fallback path.
#[derive(Debug, Error)]
pub enum AgentError {
    /// No API key is configured; the backend operates in demo mode.
    #[error("no API key configured")]
    MissingApiKey,

    /// The request could not be sent or timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The backend returned a non-success HTTP status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body could not be parsed or had no content.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The backend was misconfigured.
    #[error("configuration error: {0}")]
    Configuration(String),
}
