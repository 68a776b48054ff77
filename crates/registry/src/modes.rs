//! Chat mode catalog.

use serde::Serialize;

/// An interaction mode.
///
/// Multi-agent modes fan a message out to every selected model;
/// single-agent modes call only the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMode {
    /// Mode id (e.g., "brainstorm").
    pub id: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Persian display name.
    pub name_fa: &'static str,
    /// Short English description.
    pub description: &'static str,
    /// Emoji icon for the UI.
    pub icon: &'static str,
    /// Whether every selected model answers, or only the first.
    pub multi_agent: bool,
    /// Accent color for the UI.
    pub color: &'static str,
    /// Instruction prepended to the message array, if any.
    #[serde(skip)]
    pub system_prompt: Option<&'static str>,
}

pub(crate) const CHAT_MODES: &[ChatMode] = &[
    ChatMode {
        id: "chat",
        name: "Chat",
        name_fa: "گفتگو",
        description: "Standard conversation",
        icon: "💬",
        multi_agent: false,
        color: "#6b7280",
        system_prompt: None,
    },
    ChatMode {
        id: "analyze",
        name: "Analyze",
        name_fa: "تحلیل",
        description: "Deep analysis with multiple perspectives",
        icon: "🔬",
        multi_agent: true,
        color: "#3b82f6",
        system_prompt: Some(
            "You are an expert analyst. Provide deep, structured analysis with \
             multiple perspectives. Format your response with clear sections.",
        ),
    },
    ChatMode {
        id: "brainstorm",
        name: "Brainstorm",
        name_fa: "ایده‌پردازی",
        description: "Creative ideation with AI collaboration",
        icon: "💡",
        multi_agent: true,
        color: "#f59e0b",
        system_prompt: Some(
            "You are a creative ideation expert. Generate diverse, innovative \
             ideas and possibilities. Be imaginative and think outside the box.",
        ),
    },
    ChatMode {
        id: "debate",
        name: "Debate",
        name_fa: "مناظره",
        description: "AI models debate different viewpoints",
        icon: "⚔️",
        multi_agent: true,
        color: "#ef4444",
        system_prompt: Some(
            "You are participating in a debate. Present your arguments clearly \
             and consider counterarguments. Be persuasive but fair.",
        ),
    },
    ChatMode {
        id: "solve",
        name: "Solve",
        name_fa: "حل مسئله",
        description: "Collaborative problem solving",
        icon: "🧩",
        multi_agent: true,
        color: "#10b981",
        system_prompt: Some(
            "You are a problem-solving expert. Break down problems \
             systematically and provide actionable solutions step by step.",
        ),
    },
];
