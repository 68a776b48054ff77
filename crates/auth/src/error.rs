//! Error types for authentication and storage.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored record could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Errors that can occur while issuing or verifying an OTP.
///
/// Everything except `Store` maps to a 400 at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The phone number does not match the national mobile pattern.
    #[error("invalid phone number")]
    InvalidPhone,

    /// The supplied code is not a 6-digit number.
    #[error("invalid code format")]
    InvalidCode,

    /// No code is pending for this phone.
    #[error("no pending challenge")]
    NoPendingChallenge,

    /// The pending code expired; it has been removed.
    #[error("challenge expired")]
    Expired,

    /// The supplied code does not match the pending one.
    #[error("code mismatch")]
    CodeMismatch,

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
