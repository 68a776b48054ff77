//! The ChatBackend trait definition.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::ChatMessage;

/// A trait for chat-completion backends.
///
/// Implementations range from the live OpenRouter client to scripted
/// test backends. The trait is object-safe and used as
/// `Arc<dyn ChatBackend>` at the orchestrator seam.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Issue one completion request for the given backend model id.
    ///
    /// # Arguments
    ///
    /// * `model` - The backend's own model identifier (not a registry id).
    /// * `messages` - Full message array, system prompt included.
    /// * `max_tokens` - Response length budget.
    ///
    /// # Returns
    ///
    /// The generated text, or an error. Implementations attempt the
    /// call exactly once; retries are nobody's job.
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, AgentError>;

    /// Get a human-readable name for this backend implementation.
    fn name(&self) -> &str;
}
