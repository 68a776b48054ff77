//! Shared request state.

use std::sync::Arc;

use auth::{OtpStore, UserStore};
use orchestrator::Orchestrator;
use registry::Registry;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Pending OTP challenges. Memory-only; lost on restart.
    pub otp_store: Arc<dyn OtpStore>,
    /// User records.
    pub user_store: Arc<dyn UserStore>,
    /// The fan-out orchestrator.
    pub orchestrator: Arc<Orchestrator>,
    /// Static catalogs.
    pub registry: Registry,
    /// Include the OTP code in send-otp responses (dev only).
    pub expose_otp: bool,
}
