//! Error types for fan-out operations.
//!
//! Backend failures are deliberately absent here: they are absorbed
//! into the per-target fallback path and never reach the caller.

use thiserror::Error;

/// Errors that can occur during fan-out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrchestratorError {
    /// The message was missing or blank.
    #[error("message is empty")]
    EmptyMessage,

    /// A roundtable needs at least two personas.
    #[error("roundtable requires at least 2 personas, got {got}")]
    InsufficientPersonas { got: usize },
}
