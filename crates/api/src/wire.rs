//! Request and response bodies.
//!
//! Field names follow the original camelCase surface; every request
//! field is defaulted so missing keys read as empty rather than 422.

use serde::{Deserialize, Serialize};

use auth::User;
use registry::CreditPackage;

#[derive(Debug, Deserialize)]
pub struct SendOtpRequest {
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: &'static str,
    /// Only present when MIZGERD_EXPOSE_OTP is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireHistoryEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatApiRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub history: Vec<WireHistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub model: String,
    pub content: String,
    pub degraded: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatApiResponse {
    pub success: bool,
    pub responses: Vec<ModelResponse>,
    pub credits_used: u32,
}

#[derive(Debug, Deserialize)]
pub struct RoundtableApiRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub personas: Vec<String>,
    #[serde(default)]
    pub history: Vec<WireHistoryEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaResponse {
    pub persona_id: String,
    pub content: String,
    pub degraded: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundtableApiResponse {
    pub success: bool,
    pub responses: Vec<PersonaResponse>,
    pub credits_used: u32,
}

#[derive(Debug, Serialize)]
pub struct PackageListResponse {
    pub packages: &'static [CreditPackage],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[serde(default)]
    pub package_id: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub success: bool,
    pub transaction_id: String,
    pub package: &'static CreditPackage,
    pub payment_url: String,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}
