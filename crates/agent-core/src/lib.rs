//! Core trait and types for agent backends.
//!
//! This crate provides the shared interface between the fan-out
//! orchestrator and the chat-completion backends that answer on behalf
//! of a model or persona. It defines:
//!
//! - [`ChatBackend`] - The trait that live and test backends implement
//! - [`ChatMessage`] - A single turn in a conversation
//! - [`Completion`] - An answer, tagged as live or fallback
//! - [`AgentError`] - Error types for backend calls
//!
//! # Example
//!
//! ```rust
//! use agent_core::{AgentError, ChatBackend, ChatMessage};
//! use async_trait::async_trait;
//!
//! struct CannedBackend;
//!
//! #[async_trait]
//! impl ChatBackend for CannedBackend {
//!     async fn complete(
//!         &self,
//!         _model: &str,
//!         _messages: &[ChatMessage],
//!         _max_tokens: u32,
//!     ) -> Result<String, AgentError> {
//!         Ok("Hello!".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedBackend"
//!     }
//! }
//! ```

mod backend;
mod error;
mod history;
mod message;

pub use backend::ChatBackend;
pub use error::AgentError;
pub use history::{trailing_window, HISTORY_WINDOW};
pub use message::{ChatMessage, Completion};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
