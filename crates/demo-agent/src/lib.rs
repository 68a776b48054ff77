//! Deterministic demo-mode replies.
//!
//! When no live backend call can be completed (no API key, network
//! failure, bad status, malformed body), the orchestrator substitutes
//! one of these templated Persian strings instead of surfacing an
//! error. Replies always quote the original message verbatim and are
//! never empty.

use registry::{AiModel, Persona};

/// Placeholder replaced with the user's message in persona templates.
const MESSAGE_SLOT: &str = "{message}";

/// Demo reply for an AI model: the model introduces itself, quotes the
/// message, and points at the missing `OPENROUTER_API_KEY`.
pub fn model_reply(model: &AiModel, message: &str) -> String {
    format!(
        "سلام! من {} هستم. پیام شما را دریافت کردم: \"{}\"\n\nاین یک پاسخ نمونه است. برای استفاده از API واقعی، لطفاً کلید OPENROUTER_API_KEY را در فایل .env تنظیم کنید.",
        model.name, message
    )
}

/// Demo reply for a roundtable persona.
///
/// Uses the persona's canned template when it has one, otherwise a
/// generic template built from the Persian display name.
pub fn persona_reply(persona: &Persona, message: &str) -> String {
    match persona.fallback_template {
        Some(template) => template.replace(MESSAGE_SLOT, message),
        None => format!(
            "به عنوان {}، در مورد \"{}\" باید بگویم که این موضوع نیاز به تفکر عمیق‌تر دارد. هر تصمیمی باید با دقت و از زوایای مختلف بررسی شود.",
            persona.name_fa, message
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::Registry;

    #[test]
    fn test_model_reply_quotes_message() {
        let registry = Registry::builtin();
        let model = registry.model("gpt-4.1").unwrap();

        let reply = model_reply(model, "سلام");
        assert!(reply.contains("سلام"));
        assert!(reply.contains("GPT-4.1"));
        assert!(!reply.is_empty());
    }

    #[test]
    fn test_model_reply_deterministic() {
        let registry = Registry::builtin();
        let model = registry.model("grok-3").unwrap();

        assert_eq!(model_reply(model, "چطوری؟"), model_reply(model, "چطوری؟"));
    }

    #[test]
    fn test_persona_reply_uses_template() {
        let registry = Registry::builtin();
        let persona = registry.persona("steve-jobs").unwrap();

        let reply = persona_reply(persona, "آینده هوش مصنوعی");
        assert!(reply.contains("آینده هوش مصنوعی"));
        assert!(reply.contains("سادگی"));
        assert!(!reply.contains(MESSAGE_SLOT));
    }

    #[test]
    fn test_persona_reply_generic_without_template() {
        let persona = Persona {
            id: "test-persona",
            name: "Test",
            name_fa: "آزمایشی",
            avatar: "🧪",
            category: "tech",
            description: "Test persona",
            thinking_style: "None",
            system_prompt: "Test",
            fallback_template: None,
        };

        let reply = persona_reply(&persona, "سوال من");
        assert!(reply.contains("آزمایشی"));
        assert!(reply.contains("سوال من"));
    }

    #[test]
    fn test_every_builtin_persona_has_nonempty_reply() {
        let registry = Registry::builtin();
        for persona in registry.personas() {
            let reply = persona_reply(persona, "x");
            assert!(!reply.is_empty(), "{} produced empty reply", persona.id);
            assert!(reply.contains('x'), "{} dropped the message", persona.id);
        }
    }
}
