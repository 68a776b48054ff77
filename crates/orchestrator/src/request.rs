//! Request and result types for fan-out.

use agent_core::Completion;

/// One prior turn as supplied by the client.
///
/// Roles are free-form on the way in; sanitization happens during
/// fan-out (roundtable maps "persona" entries to assistant turns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Client-reported role.
    pub role: String,
    /// Turn content.
    pub content: String,
}

impl HistoryEntry {
    /// Create a history entry.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// A chat fan-out request.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Selected model ids, in answer order. Empty means the default model.
    pub models: Vec<String>,
    /// Interaction mode id. Empty or unknown means plain chat.
    pub mode: String,
    /// Prior turns, oldest first.
    pub history: Vec<HistoryEntry>,
}

/// A roundtable fan-out request.
#[derive(Debug, Clone, Default)]
pub struct RoundtableRequest {
    /// The user's message.
    pub message: String,
    /// Selected persona ids, in answer order. At least two required.
    pub personas: Vec<String>,
    /// Prior turns, oldest first.
    pub history: Vec<HistoryEntry>,
}

/// The answer produced for one target, tagged with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetResponse {
    /// Registry id of the model or persona that answered.
    pub target: String,
    /// The answer, live or fallback.
    pub completion: Completion,
}

/// The aggregated result of a fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanOut {
    /// One response per called target, in input order.
    pub responses: Vec<TargetResponse>,
    /// Total declared cost of the request.
    pub credits_used: u32,
}
