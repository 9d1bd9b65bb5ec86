//! AnalysisResult - the serialized output of one analysis call.

use serde::{Deserialize, Serialize};

use super::{RiskLevel, GENERAL_ADVICE};
use crate::domain::foundation::Timestamp;

pub const FALLBACK_SUMMARY: &str =
    "We could not read your survey responses, so no assessment was made.";

pub const FALLBACK_RECOMMENDATION: &str = "Please try submitting your check-in again.";

/// Output record: `summary`, `riskLevel`, `recommendations`, `timestamp`,
/// and `error` only when the payload could not be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Creates a successful result.
    pub fn new(
        summary: impl Into<String>,
        risk_level: RiskLevel,
        recommendations: Vec<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            summary: summary.into(),
            risk_level,
            recommendations,
            timestamp,
            error: None,
        }
    }

    /// Creates the fallback result for an unreadable payload.
    pub fn failed(error: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            risk_level: RiskLevel::Low,
            recommendations: vec![
                FALLBACK_RECOMMENDATION.to_string(),
                GENERAL_ADVICE[1].to_string(),
            ],
            timestamp,
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Serializes to JSON. Never fails: serialization of these types is
    /// infallible, and a minimal document is produced if it ever is not.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            tracing::error!(error = %err, "Failed to serialize analysis result");
            serde_json::json!({
                "summary": FALLBACK_SUMMARY,
                "riskLevel": RiskLevel::Low.label(),
                "recommendations": [FALLBACK_RECOMMENDATION],
                "timestamp": self.timestamp.to_rfc3339(),
                "error": format!("failed to serialize result: {}", err),
            })
            .to_string()
        })
    }
}
