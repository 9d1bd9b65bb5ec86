//! AI classifier configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for any AI timeout, in seconds.
const MAX_TIMEOUT_SECS: u64 = 300;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Chat model used by the classifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Overall budget for one classification, retries included, in seconds
    #[serde(default = "default_classifier_timeout")]
    pub classifier_timeout_secs: u64,
}

impl AiConfig {
    /// Get HTTP timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get classification budget as Duration
    pub fn classifier_timeout(&self) -> Duration {
        Duration::from_secs(self.classifier_timeout_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate AI configuration
    ///
    /// The API key is only required when the classifier is enabled, which
    /// [`AppConfig::validate`](super::AppConfig::validate) checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let timeout_ok = |secs: u64| secs > 0 && secs <= MAX_TIMEOUT_SECS;
        if !timeout_ok(self.timeout_secs) || !timeout_ok(self.classifier_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }

        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("MOOD_COMPASS__AI__MODEL"));
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            classifier_timeout_secs: default_classifier_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    20
}

fn default_retries() -> u32 {
    1
}

fn default_classifier_timeout() -> u64 {
    30
}
