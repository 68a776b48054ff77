//! The Orchestrator implementation.

use std::sync::Arc;

use agent_core::{trailing_window, AgentError, ChatBackend, ChatMessage, Completion, HISTORY_WINDOW};
use futures::future::join_all;
use registry::{AiModel, Persona, Registry, PERSONA_CREDIT_COST, ROUNDTABLE_MODEL};
use tracing::{debug, warn};

use crate::error::OrchestratorError;
use crate::request::{ChatRequest, FanOut, HistoryEntry, RoundtableRequest, TargetResponse};

/// Response length budget for chat calls.
pub const CHAT_MAX_TOKENS: u32 = 2048;

/// Response length budget for persona simulations.
pub const ROUNDTABLE_MAX_TOKENS: u32 = 1024;

/// Model called when the request names none.
pub const DEFAULT_MODEL: &str = "gpt-4.1";

/// Fans a user message out to models or personas and reassembles the
/// answers in input order.
///
/// Every target call resolves to either a live answer or a demo
/// fallback; a backend failure never propagates past this type. The
/// orchestrator is cheap to clone and share behind an `Arc`.
pub struct Orchestrator {
    registry: Registry,
    backend: Arc<dyn ChatBackend>,
}

impl Orchestrator {
    /// Create an orchestrator over the given catalogs and backend.
    pub fn new(registry: Registry, backend: Arc<dyn ChatBackend>) -> Self {
        Self { registry, backend }
    }

    /// Answer a chat request.
    ///
    /// Unknown model ids are skipped silently. Multi-agent modes with
    /// more than one resolved model call all of them; every other case
    /// calls only the first resolved model. `credits_used` sums the
    /// declared cost of every resolved model in the selection, matching
    /// what the client is shown before sending.
    pub async fn chat(&self, request: ChatRequest) -> Result<FanOut, OrchestratorError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(OrchestratorError::EmptyMessage);
        }

        let selected: Vec<String> = if request.models.is_empty() {
            vec![DEFAULT_MODEL.to_string()]
        } else {
            request.models.clone()
        };

        let mode = self.registry.mode(if request.mode.is_empty() {
            "chat"
        } else {
            &request.mode
        });

        let resolved: Vec<&AiModel> = selected
            .iter()
            .filter_map(|id| self.registry.model(id))
            .collect();

        let credits_used = resolved.iter().map(|m| m.credit_cost).sum();

        let multi_agent = mode.map(|m| m.multi_agent).unwrap_or(false);
        let called: &[&AiModel] = if multi_agent && resolved.len() > 1 {
            &resolved
        } else {
            &resolved[..resolved.len().min(1)]
        };

        let messages = build_messages(
            mode.and_then(|m| m.system_prompt),
            &request.history,
            message,
            chat_history_role,
        );

        debug!(
            targets = called.len(),
            mode = mode.map(|m| m.id).unwrap_or("chat"),
            "Fanning out chat request"
        );

        let calls = called
            .iter()
            .map(|&model| self.call_model(model, &messages, message));
        let responses = join_all(calls).await;

        Ok(FanOut {
            responses,
            credits_used,
        })
    }

    /// Answer a roundtable request.
    ///
    /// Requires at least two persona ids; unknown ids are skipped
    /// silently after that check. Cost is flat per requested persona.
    pub async fn roundtable(
        &self,
        request: RoundtableRequest,
    ) -> Result<FanOut, OrchestratorError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(OrchestratorError::EmptyMessage);
        }

        if request.personas.len() < 2 {
            return Err(OrchestratorError::InsufficientPersonas {
                got: request.personas.len(),
            });
        }

        let credits_used = request.personas.len() as u32 * PERSONA_CREDIT_COST;

        let resolved: Vec<&Persona> = request
            .personas
            .iter()
            .filter_map(|id| self.registry.persona(id))
            .collect();

        debug!(personas = resolved.len(), "Fanning out roundtable request");

        let calls = resolved.iter().map(|&persona| {
            let messages = build_messages(
                Some(persona.system_prompt),
                &request.history,
                message,
                roundtable_history_role,
            );
            self.call_persona(persona, messages, message)
        });
        let responses = join_all(calls).await;

        Ok(FanOut {
            responses,
            credits_used,
        })
    }

    /// One chat call. Any failure becomes the model's demo reply.
    async fn call_model(
        &self,
        model: &AiModel,
        messages: &[ChatMessage],
        original: &str,
    ) -> TargetResponse {
        let completion = match self
            .backend
            .complete(model.openrouter_id, messages, CHAT_MAX_TOKENS)
            .await
        {
            Ok(content) => Completion::live(content),
            Err(err) => {
                log_fallback(model.id, &err);
                Completion::fallback(demo_agent::model_reply(model, original))
            }
        };

        TargetResponse {
            target: model.id.to_string(),
            completion,
        }
    }

    /// One persona simulation call. Any failure becomes the persona's
    /// canned reply.
    async fn call_persona(
        &self,
        persona: &Persona,
        messages: Vec<ChatMessage>,
        original: &str,
    ) -> TargetResponse {
        let completion = match self
            .backend
            .complete(ROUNDTABLE_MODEL, &messages, ROUNDTABLE_MAX_TOKENS)
            .await
        {
            Ok(content) => Completion::live(content),
            Err(err) => {
                log_fallback(persona.id, &err);
                Completion::fallback(demo_agent::persona_reply(persona, original))
            }
        };

        TargetResponse {
            target: persona.id.to_string(),
            completion,
        }
    }
}

fn log_fallback(target_id: &str, err: &AgentError) {
    match err {
        // Demo mode is the expected state without a key; keep it quiet
        AgentError::MissingApiKey => debug!(target_id, "No API key, serving demo reply"),
        _ => warn!(target_id, error = %err, "Backend call failed, serving demo reply"),
    }
}

/// Assemble the message array for one target: optional system prompt,
/// sanitized trailing history window, then the current user message.
fn build_messages(
    system_prompt: Option<&str>,
    history: &[HistoryEntry],
    message: &str,
    map_role: fn(&str) -> &'static str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::new();

    if let Some(prompt) = system_prompt {
        messages.push(ChatMessage::system(prompt));
    }

    let sanitized: Vec<ChatMessage> = history
        .iter()
        .filter(|entry| !entry.role.is_empty() && !entry.content.is_empty())
        .map(|entry| ChatMessage {
            role: map_role(&entry.role).to_string(),
            content: entry.content.clone(),
        })
        .collect();
    messages.extend_from_slice(trailing_window(&sanitized, HISTORY_WINDOW));

    messages.push(ChatMessage::user(message));
    messages
}

fn chat_history_role(role: &str) -> &'static str {
    match role {
        "assistant" => "assistant",
        "system" => "system",
        _ => "user",
    }
}

/// Roundtable transcripts store persona turns under the "persona" role.
fn roundtable_history_role(role: &str) -> &'static str {
    if role == "persona" {
        "assistant"
    } else {
        "user"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::async_trait;
    use std::sync::Mutex;

    /// Echoes the target model id and the last message content.
    struct EchoBackend;

    #[async_trait]
    impl ChatBackend for EchoBackend {
        async fn complete(
            &self,
            model: &str,
            messages: &[ChatMessage],
            _max_tokens: u32,
        ) -> Result<String, AgentError> {
            let last = messages.last().map(|m| m.content.as_str()).unwrap_or("");
            Ok(format!("{}:{}", model, last))
        }

        fn name(&self) -> &str {
            "EchoBackend"
        }
    }

    /// Fails every call, as a keyless or unreachable backend would.
    struct DownBackend;

    #[async_trait]
    impl ChatBackend for DownBackend {
        async fn complete(
            &self,
            _model: &str,
            _messages: &[ChatMessage],
            _max_tokens: u32,
        ) -> Result<String, AgentError> {
            Err(AgentError::MissingApiKey)
        }

        fn name(&self) -> &str {
            "DownBackend"
        }
    }

    /// Records the message arrays it was called with.
    struct RecordingBackend {
        calls: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl RecordingBackend {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatBackend for RecordingBackend {
        async fn complete(
            &self,
            _model: &str,
            messages: &[ChatMessage],
            _max_tokens: u32,
        ) -> Result<String, AgentError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            Ok("ok".to_string())
        }

        fn name(&self) -> &str {
            "RecordingBackend"
        }
    }

    fn orchestrator(backend: Arc<dyn ChatBackend>) -> Orchestrator {
        Orchestrator::new(Registry::builtin(), backend)
    }

    fn ids(out: &FanOut) -> Vec<&str> {
        out.responses.iter().map(|r| r.target.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let orch = orchestrator(Arc::new(EchoBackend));

        let err = orch
            .chat(ChatRequest {
                message: "   ".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, OrchestratorError::EmptyMessage);

        let err = orch
            .roundtable(RoundtableRequest {
                message: String::new(),
                personas: vec!["steve-jobs".to_string(), "elon-musk".to_string()],
                history: Vec::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, OrchestratorError::EmptyMessage);
    }

    #[tokio::test]
    async fn test_multi_agent_preserves_input_order_and_sums_credits() {
        let orch = orchestrator(Arc::new(EchoBackend));

        let out = orch
            .chat(ChatRequest {
                message: "سوال".to_string(),
                models: vec![
                    "claude-opus-4".to_string(),
                    "gpt-4.1".to_string(),
                    "deepseek-r1".to_string(),
                ],
                mode: "analyze".to_string(),
                history: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(ids(&out), vec!["claude-opus-4", "gpt-4.1", "deepseek-r1"]);
        assert_eq!(out.credits_used, 10 + 5 + 3);
        assert!(out.responses.iter().all(|r| !r.completion.degraded));
        assert_eq!(
            out.responses[1].completion.content,
            "openai/gpt-4.1:سوال"
        );
    }

    #[tokio::test]
    async fn test_single_agent_mode_calls_first_model_only() {
        let orch = orchestrator(Arc::new(EchoBackend));

        let out = orch
            .chat(ChatRequest {
                message: "hi".to_string(),
                models: vec!["o3".to_string(), "grok-3".to_string()],
                mode: "chat".to_string(),
                history: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(ids(&out), vec!["o3"]);
        // Cost still covers the whole selection, as shown to the client
        assert_eq!(out.credits_used, 8 + 5);
    }

    #[tokio::test]
    async fn test_unknown_models_skipped_silently() {
        let orch = orchestrator(Arc::new(EchoBackend));

        let out = orch
            .chat(ChatRequest {
                message: "hi".to_string(),
                models: vec![
                    "not-a-model".to_string(),
                    "gpt-4.1".to_string(),
                    "also-missing".to_string(),
                ],
                mode: "debate".to_string(),
                history: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(ids(&out), vec!["gpt-4.1"]);
        assert_eq!(out.credits_used, 5);
    }

    #[tokio::test]
    async fn test_no_resolved_models_yields_empty_fanout() {
        let orch = orchestrator(Arc::new(EchoBackend));

        let out = orch
            .chat(ChatRequest {
                message: "hi".to_string(),
                models: vec!["ghost".to_string()],
                mode: "chat".to_string(),
                history: Vec::new(),
            })
            .await
            .unwrap();

        assert!(out.responses.is_empty());
        assert_eq!(out.credits_used, 0);
    }

    #[tokio::test]
    async fn test_default_model_when_none_selected() {
        let orch = orchestrator(Arc::new(EchoBackend));

        let out = orch
            .chat(ChatRequest {
                message: "hi".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(ids(&out), vec![DEFAULT_MODEL]);
        assert_eq!(out.credits_used, 5);
    }

    #[tokio::test]
    async fn test_demo_fallback_quotes_message_and_model_name() {
        let orch = orchestrator(Arc::new(DownBackend));

        let out = orch
            .chat(ChatRequest {
                message: "سلام".to_string(),
                models: vec!["gpt-4.1".to_string()],
                mode: "chat".to_string(),
                history: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(out.credits_used, 5);
        let response = &out.responses[0];
        assert!(response.completion.degraded);
        assert!(response.completion.content.contains("سلام"));
        assert!(response.completion.content.contains("GPT-4.1"));
        assert!(!response.completion.content.is_empty());
    }

    #[tokio::test]
    async fn test_roundtable_requires_two_personas() {
        let orch = orchestrator(Arc::new(EchoBackend));

        let err = orch
            .roundtable(RoundtableRequest {
                message: "hi".to_string(),
                personas: vec!["steve-jobs".to_string()],
                history: Vec::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, OrchestratorError::InsufficientPersonas { got: 1 });
    }

    #[tokio::test]
    async fn test_roundtable_order_and_flat_cost() {
        let orch = orchestrator(Arc::new(EchoBackend));

        let out = orch
            .roundtable(RoundtableRequest {
                message: "آینده".to_string(),
                personas: vec![
                    "charlie-munger".to_string(),
                    "steve-jobs".to_string(),
                    "ray-dalio".to_string(),
                ],
                history: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(ids(&out), vec!["charlie-munger", "steve-jobs", "ray-dalio"]);
        assert_eq!(out.credits_used, 9);
    }

    #[tokio::test]
    async fn test_roundtable_fallback_uses_persona_template() {
        let orch = orchestrator(Arc::new(DownBackend));

        let out = orch
            .roundtable(RoundtableRequest {
                message: "طراحی محصول".to_string(),
                personas: vec!["dieter-rams".to_string(), "steve-jobs".to_string()],
                history: Vec::new(),
            })
            .await
            .unwrap();

        for response in &out.responses {
            assert!(response.completion.degraded);
            assert!(response.completion.content.contains("طراحی محصول"));
        }
        assert!(out.responses[0].completion.content.contains("کمتر، اما بهتر"));
    }

    #[tokio::test]
    async fn test_history_clamped_and_mode_prompt_prepended() {
        let backend = Arc::new(RecordingBackend::new());
        let orch = orchestrator(backend.clone());

        let history: Vec<HistoryEntry> = (0..30)
            .map(|i| {
                HistoryEntry::new(
                    if i % 2 == 0 { "user" } else { "assistant" },
                    format!("turn {}", i),
                )
            })
            .collect();

        orch.chat(ChatRequest {
            message: "now".to_string(),
            models: vec!["gpt-4.1".to_string()],
            mode: "analyze".to_string(),
            history,
        })
        .await
        .unwrap();

        let calls = backend.calls.lock().unwrap();
        let messages = &calls[0];
        // system prompt + 10 history turns + current message
        assert_eq!(messages.len(), 12);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].content, "turn 20");
        assert_eq!(messages.last().unwrap().content, "now");
    }

    #[tokio::test]
    async fn test_roundtable_maps_persona_history_to_assistant() {
        let backend = Arc::new(RecordingBackend::new());
        let orch = orchestrator(backend.clone());

        orch.roundtable(RoundtableRequest {
            message: "next".to_string(),
            personas: vec!["steve-jobs".to_string(), "elon-musk".to_string()],
            history: vec![
                HistoryEntry::new("user", "q"),
                HistoryEntry::new("persona", "a"),
            ],
        })
        .await
        .unwrap();

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        for messages in calls.iter() {
            assert_eq!(messages[0].role, "system");
            assert_eq!(messages[1].role, "user");
            assert_eq!(messages[2].role, "assistant");
            assert_eq!(messages[2].content, "a");
        }
    }
}
