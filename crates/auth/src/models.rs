//! User and challenge models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Random UUID assigned at creation.
    pub id: String,
    /// Phone number, unique per user.
    pub phone: String,
    /// Credit balance. Nothing enforces a floor.
    pub credits: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Opaque per-user settings.
    pub settings: serde_json::Value,
}

impl User {
    /// Create a fresh user for a phone with the given starting balance.
    pub fn new(phone: impl Into<String>, credits: i64) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            phone: phone.into(),
            credits,
            created_at: now,
            updated_at: now,
            settings: serde_json::json!({}),
        }
    }
}

/// A pending OTP challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpChallenge {
    /// The 6-digit code.
    pub code: String,
    /// Moment after which the code is no longer accepted.
    pub expires_at: DateTime<Utc>,
}
