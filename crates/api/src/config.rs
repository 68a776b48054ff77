//! API server configuration.

use std::env;

/// Server configuration from environment variables.
///
/// - `MIZGERD_ADDR` - Listen address (default: 127.0.0.1:8686)
/// - `MIZGERD_EXPOSE_OTP` - Return the OTP code in the send-otp
///   response ("true"/"1"). Development only; never enable this where
///   real users log in.
/// - `MIZGERD_DATABASE_URL` - SQLite URL for the user store; unset
///   means an in-memory store.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub addr: String,
    pub expose_otp: bool,
    pub database_url: Option<String>,
}

impl ApiConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let addr = env::var("MIZGERD_ADDR").unwrap_or_else(|_| "127.0.0.1:8686".to_string());

        let expose_otp = env::var("MIZGERD_EXPOSE_OTP")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        let database_url = env::var("MIZGERD_DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Self {
            addr,
            expose_otp,
            database_url,
        }
    }
}
