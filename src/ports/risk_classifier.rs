//! RiskClassifier port - optional external classification collaborator.
//!
//! The deterministic scorer is always available; a classifier (for example
//! one backed by a language model) may be injected to produce a richer
//! summary. Callers must treat every error as "use the deterministic path".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::RiskLevel;
use crate::domain::survey::SurveyAnswers;

use super::AIError;

/// Classifier output: the same narrative fields as an analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub summary: String,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

impl Classification {
    /// Returns true when the classification can stand in for the
    /// deterministic summary.
    pub fn is_usable(&self) -> bool {
        !self.summary.trim().is_empty()
    }

    /// Non-blank recommendations, trimmed.
    pub fn usable_recommendations(&self) -> Vec<String> {
        self.recommendations
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Classifier failures.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The backing provider failed.
    #[error("classifier provider error: {0}")]
    Provider(#[from] AIError),

    /// The classifier answered but the answer could not be used.
    #[error("classifier returned an invalid response: {0}")]
    InvalidResponse(String),

    /// The call did not finish within the call-site timeout.
    #[error("classifier timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl ClassifierError {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

/// Port for external risk classification.
#[async_trait]
pub trait RiskClassifier: Send + Sync {
    /// Classifies normalized survey answers.
    async fn classify(&self, answers: &SurveyAnswers) -> Result<Classification, ClassifierError>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}
