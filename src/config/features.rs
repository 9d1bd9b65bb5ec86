//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Let the LLM classifier refine the deterministic assessment
    #[serde(default)]
    pub enable_ai_classifier: bool,
}
