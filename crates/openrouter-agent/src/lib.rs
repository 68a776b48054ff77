//! OpenRouter backend implementation.
//!
//! This crate talks to the OpenRouter chat-completion aggregation API.
//! An absent `OPENROUTER_API_KEY` is a valid operating mode (demo
//! mode), not an error at construction time; the client reports
//! [`agent_core::AgentError::MissingApiKey`] per call and the
//! orchestrator substitutes the demo reply.

mod api_types;
mod client;
mod config;

pub use api_types::{ChatCompletionRequest, ChatCompletionResponse};
pub use client::OpenRouterClient;
pub use config::OpenRouterConfig;
