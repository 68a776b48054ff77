//! OpenRouterClient implementation.

use agent_core::{async_trait, AgentError, ChatBackend, ChatMessage};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::OpenRouterConfig;

/// A [`ChatBackend`] backed by the OpenRouter aggregation API.
///
/// Every call is attempted exactly once with a bounded timeout. All
/// failure shapes (missing key, transport, status, parse) come back as
/// [`AgentError`]; the orchestrator decides what to do with them.
pub struct OpenRouterClient {
    client: Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OpenRouterConfig) -> Result<Self, AgentError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                AgentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            api_url = %config.api_url,
            demo_mode = !config.has_api_key(),
            "OpenRouterClient initialized"
        );

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`OpenRouterConfig::from_env`].
    pub fn from_env() -> Result<Self, AgentError> {
        Self::new(OpenRouterConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, AgentError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AgentError::MissingApiKey);
        };

        let url = format!("{}/v1/chat/completions", self.config.api_url);

        debug!(model = %request.model, messages = request.messages.len(), "Sending request to OpenRouter");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // Prefer the API's own error message when the body parses
            if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(AgentError::Api {
                    status: status.as_u16(),
                    body: api_error.error.message,
                });
            }

            return Err(AgentError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| AgentError::MalformedResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ChatBackend for OpenRouterClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, AgentError> {
        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            max_tokens,
        };

        let completion = self.chat_completion(request).await?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty());

        match content {
            Some(text) => Ok(text.to_string()),
            None => {
                warn!(model, "OpenRouter response had no content");
                Err(AgentError::MalformedResponse(
                    "no content in response".to_string(),
                ))
            }
        }
    }

    fn name(&self) -> &str {
        "OpenRouter"
    }
}
