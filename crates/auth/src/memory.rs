//! In-memory store implementations.
//!
//! Process-lifetime maps behind `tokio::sync::RwLock`. Individual
//! operations are atomic, but the verify flow's read-check-delete
//! spans multiple operations: two concurrent verifies for the same
//! phone can both observe a not-yet-deleted code. That race is part of
//! the documented behavior, not something these stores fix.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::{OtpChallenge, User};
use crate::store::{OtpStore, UserStore};

/// In-memory OTP challenge store. Lost on restart, by design.
#[derive(Debug, Default)]
pub struct MemoryOtpStore {
    challenges: RwLock<HashMap<String, OtpChallenge>>,
}

impl MemoryOtpStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn get(&self, phone: &str) -> Result<Option<OtpChallenge>, StoreError> {
        Ok(self.challenges.read().await.get(phone).cloned())
    }

    async fn set(&self, phone: &str, challenge: OtpChallenge) -> Result<(), StoreError> {
        self.challenges
            .write()
            .await
            .insert(phone.to_string(), challenge);
        Ok(())
    }

    async fn delete(&self, phone: &str) -> Result<(), StoreError> {
        self.challenges.write().await.remove(phone);
        Ok(())
    }
}

/// In-memory user store for tests and single-process runs.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(phone).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.users
            .write()
            .await
            .insert(user.phone.clone(), user.clone());
        Ok(())
    }

    async fn adjust_credits(&self, phone: &str, delta: i64) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(phone).map(|user| {
            user.credits += delta;
            user.updated_at = Utc::now();
            user.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_otp_set_overwrites_pending() {
        let store = MemoryOtpStore::new();
        let first = OtpChallenge {
            code: "111111".to_string(),
            expires_at: Utc::now(),
        };
        let second = OtpChallenge {
            code: "222222".to_string(),
            expires_at: Utc::now(),
        };

        store.set("09123456789", first).await.unwrap();
        store.set("09123456789", second).await.unwrap();

        let pending = store.get("09123456789").await.unwrap().unwrap();
        assert_eq!(pending.code, "222222");
    }

    #[tokio::test]
    async fn test_otp_delete_is_idempotent() {
        let store = MemoryOtpStore::new();
        store.delete("09123456789").await.unwrap();
        assert!(store.get("09123456789").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_roundtrip_and_adjust() {
        let store = MemoryUserStore::new();
        let user = User::new("09123456789", 50);
        store.insert(&user).await.unwrap();

        let found = store.find_by_phone("09123456789").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);

        let updated = store
            .adjust_credits("09123456789", -5)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.credits, 45);
        assert!(updated.updated_at >= user.updated_at);
    }

    #[tokio::test]
    async fn test_adjust_unknown_phone_is_none() {
        let store = MemoryUserStore::new();
        assert!(store
            .adjust_credits("09999999999", 10)
            .await
            .unwrap()
            .is_none());
    }
}
