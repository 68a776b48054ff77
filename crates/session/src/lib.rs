//! Client-side chat session state.
//!
//! Mirrors what the single-threaded UI keeps between requests: the
//! transcript, the selected models or personas, the active mode, and
//! the displayed credit balance. Submission is optimistic: the user's
//! message goes into the transcript before the request is sent, and a
//! failed request appends a generic error message without rolling the
//! user message back.
//!
//! This crate holds no networking; callers send the payload produced
//! by [`ChatSession::submit`] to the HTTP surface themselves and feed
//! the outcome back through [`ChatSession::apply_model_response`],
//! [`ChatSession::apply_persona_response`], or
//! [`ChatSession::apply_failure`].

mod transcript;

pub use transcript::{
    ChatSession, HistoryTurn, Message, Role, SubmitPayload, GENERIC_ERROR_FA,
};
