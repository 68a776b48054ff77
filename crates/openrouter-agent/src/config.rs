//! Configuration for the OpenRouter client.

use std::env;
use std::time::Duration;

/// Configuration for [`crate::OpenRouterClient`].
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// OpenRouter API base URL.
    pub api_url: String,

    /// API key for authentication. `None` means demo mode.
    pub api_key: Option<String>,

    /// Sent as the `HTTP-Referer` header, as OpenRouter asks.
    pub referer: String,

    /// Sent as the `X-Title` header.
    pub app_title: String,

    /// Per-request timeout. A timeout takes the same fallback path as
    /// any other backend failure.
    pub request_timeout: Duration,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_url: "https://openrouter.ai/api".to_string(),
            api_key: None,
            referer: "http://localhost:3000".to_string(),
            app_title: "mizgerd".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl OpenRouterConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `OPENROUTER_API_KEY` - API key (absent = demo mode)
    /// - `OPENROUTER_API_URL` - API base URL (default: https://openrouter.ai/api)
    /// - `MIZGERD_APP_URL` - Referer header value (default: http://localhost:3000)
    /// - `OPENROUTER_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_url = env::var("OPENROUTER_API_URL").unwrap_or(defaults.api_url);
        let referer = env::var("MIZGERD_APP_URL").unwrap_or(defaults.referer);

        let request_timeout = env::var("OPENROUTER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Self {
            api_url,
            api_key,
            referer,
            app_title: defaults.app_title,
            request_timeout,
        }
    }

    /// Whether a live API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
