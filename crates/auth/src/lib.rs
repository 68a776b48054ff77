//! Phone/OTP authentication and user records.
//!
//! Login is phone-number based: a 6-digit one-time code is issued with
//! a two-minute expiry, and a successful verification returns the
//! existing user for that phone or creates one with a welcome bonus.
//!
//! Storage sits behind two injected traits:
//!
//! - [`OtpStore`] - pending challenges keyed by phone. Only the
//!   in-memory implementation exists on purpose: challenges do not
//!   survive a restart.
//! - [`UserStore`] - user records, with [`MemoryUserStore`] for tests
//!   and single-process runs and [`SqliteUserStore`] for durability.
//!
//! # Example
//!
//! ```no_run
//! use auth::{issue, verify, MemoryOtpStore, MemoryUserStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), auth::AuthError> {
//!     let otp_store = MemoryOtpStore::new();
//!     let user_store = MemoryUserStore::new();
//!
//!     let code = issue(&otp_store, "09123456789").await?;
//!     let user = verify(&otp_store, &user_store, "09123456789", &code).await?;
//!     assert_eq!(user.credits, auth::WELCOME_BONUS);
//!     Ok(())
//! }
//! ```

mod error;
mod memory;
mod models;
mod otp;
mod phone;
mod sqlite;
mod store;

pub use error::{AuthError, StoreError};
pub use memory::{MemoryOtpStore, MemoryUserStore};
pub use models::{OtpChallenge, User};
pub use otp::{issue, verify, OTP_TTL, WELCOME_BONUS};
pub use phone::{format_phone, generate_code, validate_phone};
pub use sqlite::SqliteUserStore;
pub use store::{OtpStore, UserStore};
