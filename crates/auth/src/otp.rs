//! OTP issue and verify flows.

use chrono::{Duration, Utc};
use tracing::info;

use crate::error::AuthError;
use crate::models::{OtpChallenge, User};
use crate::phone::{generate_code, validate_phone};
use crate::store::{OtpStore, UserStore};

/// How long an issued code stays valid.
pub const OTP_TTL: Duration = Duration::minutes(2);

/// Credits granted on first successful verification.
pub const WELCOME_BONUS: i64 = 50;

/// Issue a new OTP challenge for a phone number.
///
/// Overwrites any pending code for the phone. Returns the code so the
/// HTTP layer can expose it behind its dev flag; without a real SMS
/// gateway the log line below is the only delivery channel.
pub async fn issue(store: &dyn OtpStore, phone: &str) -> Result<String, AuthError> {
    if !validate_phone(phone) {
        return Err(AuthError::InvalidPhone);
    }

    let code = generate_code();
    let challenge = OtpChallenge {
        code: code.clone(),
        expires_at: Utc::now() + OTP_TTL,
    };
    store.set(phone, challenge).await?;

    // Stand-in for the SMS gateway
    info!(phone, code = %code, "OTP issued");

    Ok(code)
}

/// Verify a code for a phone number.
///
/// The challenge is one-time: it is deleted on success, and also when
/// found expired. On first-time success a user is created with the
/// welcome bonus; later verifications return the same record untouched.
pub async fn verify(
    otp_store: &dyn OtpStore,
    user_store: &dyn UserStore,
    phone: &str,
    code: &str,
) -> Result<User, AuthError> {
    if !validate_phone(phone) {
        return Err(AuthError::InvalidPhone);
    }

    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(AuthError::InvalidCode);
    }

    let Some(challenge) = otp_store.get(phone).await? else {
        return Err(AuthError::NoPendingChallenge);
    };

    if Utc::now() > challenge.expires_at {
        otp_store.delete(phone).await?;
        return Err(AuthError::Expired);
    }

    if challenge.code != code {
        return Err(AuthError::CodeMismatch);
    }

    otp_store.delete(phone).await?;

    if let Some(user) = user_store.find_by_phone(phone).await? {
        return Ok(user);
    }

    let user = User::new(phone, WELCOME_BONUS);
    user_store.insert(&user).await?;
    info!(phone, user_id = %user.id, "Created user with welcome bonus");

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryOtpStore, MemoryUserStore};

    fn stores() -> (MemoryOtpStore, MemoryUserStore) {
        (MemoryOtpStore::new(), MemoryUserStore::new())
    }

    #[tokio::test]
    async fn test_issue_rejects_invalid_phone() {
        let (otp, _) = stores();
        let err = issue(&otp, "12345").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidPhone));
    }

    #[tokio::test]
    async fn test_issue_then_verify_succeeds_exactly_once() {
        let (otp, users) = stores();

        let code = issue(&otp, "09123456789").await.unwrap();
        let user = verify(&otp, &users, "09123456789", &code).await.unwrap();
        assert_eq!(user.credits, WELCOME_BONUS);

        // The challenge was consumed
        let err = verify(&otp, &users, "09123456789", &code)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::NoPendingChallenge));
    }

    #[tokio::test]
    async fn test_reissue_overwrites_pending_code() {
        let (otp, users) = stores();

        let stale = issue(&otp, "09123456789").await.unwrap();
        let fresh = issue(&otp, "09123456789").await.unwrap();

        if stale != fresh {
            let err = verify(&otp, &users, "09123456789", &stale)
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::CodeMismatch));
        }
        verify(&otp, &users, "09123456789", &fresh).await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_code_is_removed() {
        let (otp, users) = stores();

        otp.set(
            "09123456789",
            OtpChallenge {
                code: "123456".to_string(),
                expires_at: Utc::now() - Duration::seconds(1),
            },
        )
        .await
        .unwrap();

        let err = verify(&otp, &users, "09123456789", "123456")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Expired));

        // The stale entry is gone, so the next attempt has no challenge
        let err = verify(&otp, &users, "09123456789", "123456")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::NoPendingChallenge));
    }

    #[tokio::test]
    async fn test_wrong_code_keeps_challenge() {
        let (otp, users) = stores();

        let code = issue(&otp, "09123456789").await.unwrap();
        let wrong = if code == "111111" { "222222" } else { "111111" };

        let err = verify(&otp, &users, "09123456789", wrong)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::CodeMismatch));

        // The right code still works afterwards
        verify(&otp, &users, "09123456789", &code).await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_code_rejected() {
        let (otp, users) = stores();
        issue(&otp, "09123456789").await.unwrap();

        for bad in ["", "12345", "1234567", "12345a"] {
            let err = verify(&otp, &users, "09123456789", bad)
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::InvalidCode), "code {:?}", bad);
        }
    }

    #[tokio::test]
    async fn test_second_verification_returns_same_user_without_second_bonus() {
        let (otp, users) = stores();

        let code = issue(&otp, "09123456789").await.unwrap();
        let first = verify(&otp, &users, "09123456789", &code).await.unwrap();

        let code = issue(&otp, "09123456789").await.unwrap();
        let second = verify(&otp, &users, "09123456789", &code).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.credits, WELCOME_BONUS);
        assert_eq!(users.len().await, 1);
    }
}
