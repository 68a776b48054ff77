//! Fan-out orchestrator for chat and roundtable requests.
//!
//! This crate provides the [`Orchestrator`] type which takes one user
//! message and fans it out to one or more targets (AI models or
//! roundtable personas), collecting an ordered response list and a
//! total credit cost.
//!
//! # Architecture
//!
//! ```text
//! {message, targets, mode, history}
//!          ↓
//! ┌─────────────────────────────────────────────────────┐
//! │                    ORCHESTRATOR                     │
//! │                                                     │
//! │  1. Validate message / target count                 │
//! │  2. Resolve targets against the registry            │
//! │     (unknown ids are skipped silently)              │
//! │  3. Clamp history to the trailing window,           │
//! │     prepend the mode or persona system prompt       │
//! │  4. One backend call per target, concurrently       │
//! │  5. Reassemble results in input order; any failed   │
//! │     call becomes a demo reply tagged degraded       │
//! │  6. Sum credit costs                                │
//! └─────────────────────────────────────────────────────┘
//!          ↓
//! {responses[], credits_used}
//! ```
//!
//! The orchestrator never mutates a user's stored balance; credit
//! accounting stays with the caller.

mod error;
mod fanout;
mod request;

pub use error::OrchestratorError;
pub use fanout::{Orchestrator, CHAT_MAX_TOKENS, DEFAULT_MODEL, ROUNDTABLE_MAX_TOKENS};
pub use request::{ChatRequest, FanOut, HistoryEntry, RoundtableRequest, TargetResponse};
