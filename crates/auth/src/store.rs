//! Store trait definitions.
//!
//! Handlers receive these as trait objects so tests and deployments
//! can pick their own backing without touching the OTP logic.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{OtpChallenge, User};

/// Pending OTP challenges, keyed by phone number.
///
/// Challenges are one-time and short-lived; implementations are not
/// expected to persist them across restarts.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Get the pending challenge for a phone, if any.
    async fn get(&self, phone: &str) -> Result<Option<OtpChallenge>, StoreError>;

    /// Store a challenge, replacing any pending one for the phone.
    async fn set(&self, phone: &str, challenge: OtpChallenge) -> Result<(), StoreError>;

    /// Remove the pending challenge for a phone, if any.
    async fn delete(&self, phone: &str) -> Result<(), StoreError>;
}

/// User records, keyed by phone number.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by phone.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// Add `delta` (possibly negative) to a user's balance and return
    /// the updated record, or `None` if the phone is unknown.
    async fn adjust_credits(&self, phone: &str, delta: i64) -> Result<Option<User>, StoreError>;
}
