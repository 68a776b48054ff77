//! AI model catalog.

use serde::Serialize;

/// A selectable AI model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiModel {
    /// Registry id (e.g., "gpt-4.1").
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Provider label (e.g., "openai").
    pub provider: &'static str,
    /// Short English description for the model picker.
    pub description: &'static str,
    /// Credits debited per call.
    pub credit_cost: u32,
    /// Emoji avatar for the UI.
    pub avatar: &'static str,
    /// Accent color for the UI.
    pub color: &'static str,
    /// OpenRouter model identifier.
    pub openrouter_id: &'static str,
}

pub(crate) const AI_MODELS: &[AiModel] = &[
    AiModel {
        id: "gpt-4.1",
        name: "GPT-4.1",
        provider: "openai",
        description: "OpenAI's latest model with advanced reasoning",
        credit_cost: 5,
        avatar: "🟢",
        color: "#10a37f",
        openrouter_id: "openai/gpt-4.1",
    },
    AiModel {
        id: "o3",
        name: "OpenAI O3",
        provider: "openai",
        description: "OpenAI's reasoning-optimized model",
        credit_cost: 8,
        avatar: "⚡",
        color: "#ff6b35",
        openrouter_id: "openai/o3",
    },
    AiModel {
        id: "claude-sonnet-4",
        name: "Claude Sonnet 4",
        provider: "anthropic",
        description: "Anthropic's balanced and capable model",
        credit_cost: 4,
        avatar: "🟠",
        color: "#d4a373",
        openrouter_id: "anthropic/claude-sonnet-4",
    },
    AiModel {
        id: "claude-opus-4",
        name: "Claude Opus 4",
        provider: "anthropic",
        description: "Anthropic's most powerful model",
        credit_cost: 10,
        avatar: "🟣",
        color: "#7c3aed",
        openrouter_id: "anthropic/claude-opus-4",
    },
    AiModel {
        id: "gemini-2.5-pro",
        name: "Gemini 2.5 Pro",
        provider: "google",
        description: "Google's advanced multimodal AI",
        credit_cost: 5,
        avatar: "💎",
        color: "#4285f4",
        openrouter_id: "google/gemini-2.5-pro-preview",
    },
    AiModel {
        id: "deepseek-r1",
        name: "DeepSeek R1",
        provider: "deepseek",
        description: "DeepSeek's reasoning model",
        credit_cost: 3,
        avatar: "🔍",
        color: "#00bcd4",
        openrouter_id: "deepseek/deepseek-r1",
    },
    AiModel {
        id: "grok-3",
        name: "Grok 3",
        provider: "xai",
        description: "xAI's witty and knowledgeable model",
        credit_cost: 5,
        avatar: "🦊",
        color: "#f97316",
        openrouter_id: "x-ai/grok-3",
    },
    AiModel {
        id: "llama-4-maverick",
        name: "Llama 4 Maverick",
        provider: "meta",
        description: "Meta's open-source powerhouse",
        credit_cost: 2,
        avatar: "🦙",
        color: "#0668e1",
        openrouter_id: "meta-llama/llama-4-maverick",
    },
];
