//! Static catalogs for mizgerd.
//!
//! Everything here is immutable configuration, loaded once at process
//! start and exposed through lookup-by-id:
//!
//! - [`AiModel`] - Selectable AI models and their credit costs
//! - [`ChatMode`] - Interaction modes (single- and multi-agent)
//! - [`Persona`] - Roundtable personas with system prompts and
//!   canned fallback templates
//! - [`CreditPackage`] - Purchasable credit bundles
//!
//! # Example
//!
//! ```rust
//! use registry::Registry;
//!
//! let registry = Registry::builtin();
//! let model = registry.model("gpt-4.1").unwrap();
//! assert_eq!(model.credit_cost, 5);
//! assert!(registry.model("no-such-model").is_none());
//! ```

mod models;
mod modes;
mod packages;
mod personas;

pub use models::AiModel;
pub use modes::ChatMode;
pub use packages::CreditPackage;
pub use personas::{Persona, PERSONA_CREDIT_COST, ROUNDTABLE_MODEL};

/// The static catalogs, bundled for injection.
///
/// Holding the catalogs behind one value (rather than reaching for the
/// statics directly) keeps handlers and tests free to swap the source
/// later without touching call sites.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    models: &'static [AiModel],
    modes: &'static [ChatMode],
    personas: &'static [Persona],
    packages: &'static [CreditPackage],
}

impl Registry {
    /// The built-in catalogs.
    pub fn builtin() -> Self {
        Self {
            models: models::AI_MODELS,
            modes: modes::CHAT_MODES,
            personas: personas::ROUNDTABLE_PERSONAS,
            packages: packages::CREDIT_PACKAGES,
        }
    }

    /// Look up an AI model by registry id.
    pub fn model(&self, id: &str) -> Option<&'static AiModel> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Look up a chat mode by id.
    pub fn mode(&self, id: &str) -> Option<&'static ChatMode> {
        self.modes.iter().find(|m| m.id == id)
    }

    /// Look up a roundtable persona by id.
    pub fn persona(&self, id: &str) -> Option<&'static Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    /// Look up a credit package by id.
    pub fn package(&self, id: &str) -> Option<&'static CreditPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// All AI models.
    pub fn models(&self) -> &'static [AiModel] {
        self.models
    }

    /// All chat modes.
    pub fn modes(&self) -> &'static [ChatMode] {
        self.modes
    }

    /// All roundtable personas.
    pub fn personas(&self) -> &'static [Persona] {
        self.personas
    }

    /// All credit packages.
    pub fn packages(&self) -> &'static [CreditPackage] {
        self.packages
    }
}
