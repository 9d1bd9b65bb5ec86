//! AI-powered RiskClassifier implementation

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::assessment::RiskLevel;
use crate::domain::survey::SurveyAnswers;
use crate::ports::{
    AIProvider, Classification, ClassifierError, CompletionRequest, MessageRole, RequestMetadata,
    RiskClassifier,
};

const SYSTEM_PROMPT: &str = "You are a supportive mental wellbeing assistant. \
You review short self-report check-ins and respond only with a JSON object. \
You never diagnose; you describe the level of concern and suggest practical next steps.";

const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 600;

/// Risk classifier that asks a language model to read the answers.
pub struct LlmRiskClassifier {
    ai_provider: Arc<dyn AIProvider>,
}

impl LlmRiskClassifier {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    /// Create the user prompt for one answer set
    fn create_prompt(&self, answers: &SurveyAnswers) -> String {
        format!(
            r#"Assess the following mental wellbeing check-in.

Mood: {}
Stress level (1-10, higher is worse): {}
Mood level (1-10, higher is better): {}
Sleep last night: {} hours
Feels anxious: {}
Feels overwhelmed: {}

Provide a JSON response with:
{{
  "summary": "two or three sentences addressed to the person",
  "riskLevel": "Low" | "Moderate" | "High" | "Severe",
  "recommendations": ["short actionable suggestion", "..."]
}}

Consider:
- Sustained high stress combined with short sleep
- Low mood together with frequent anxiety or overwhelm
- Recommend professional support for High or Severe"#,
            answers.mood.label(),
            answers.stress_level.value(),
            answers.mood_level.value(),
            answers.sleep_hours.hours(),
            answers.anxiety_frequency.label(),
            answers.overwhelmed_frequency.label(),
        )
    }

    /// Parse the classification from the model reply
    fn parse_classification(&self, response: &str) -> Result<Classification, ClassifierError> {
        let parsed: Value = serde_json::from_str(strip_code_fence(response)).map_err(|e| {
            ClassifierError::invalid_response(format!("Failed to parse AI response: {}", e))
        })?;

        let summary = parsed["summary"]
            .as_str()
            .ok_or_else(|| ClassifierError::invalid_response("Missing summary in response"))?
            .trim()
            .to_string();

        let level_str = parsed["riskLevel"]
            .as_str()
            .ok_or_else(|| ClassifierError::invalid_response("Missing riskLevel in response"))?;

        let risk_level = RiskLevel::parse(level_str).ok_or_else(|| {
            ClassifierError::invalid_response(format!("Unknown riskLevel '{}'", level_str))
        })?;

        let recommendations = parsed["recommendations"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Classification {
            summary,
            risk_level,
            recommendations,
        })
    }
}

/// Strips a surrounding markdown code fence (```json ... ```), if any.
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") on the opening fence line.
    let body = body.split_once('\n').map_or("", |(_, rest)| rest);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[async_trait]
impl RiskClassifier for LlmRiskClassifier {
    async fn classify(&self, answers: &SurveyAnswers) -> Result<Classification, ClassifierError> {
        let request = CompletionRequest::new(RequestMetadata::generate())
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, self.create_prompt(answers))
            .with_temperature(TEMPERATURE)
            .with_max_tokens(MAX_TOKENS);

        let trace_id = request.metadata.trace_id.clone();
        let response = self.ai_provider.complete(request).await?;

        tracing::debug!(
            trace_id = %trace_id,
            model = %response.model,
            tokens = response.usage.total_tokens,
            "Received classifier completion"
        );

        self.parse_classification(&response.content)
    }

    fn name(&self) -> &str {
        "llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::survey::{Frequency, Level, Mood, SleepHours};
    use crate::ports::AIError;

    const REPLY: &str = r#"{"summary":"You seem stretched thin.","riskLevel":"high","recommendations":["Talk to someone you trust.","Protect your sleep."]}"#;

    fn answers() -> SurveyAnswers {
        SurveyAnswers {
            mood: Mood::Anxious,
            stress_level: Level::new(8),
            mood_level: Level::new(3),
            sleep_hours: SleepHours::new(5.0),
            anxiety_frequency: Frequency::Yes,
            overwhelmed_frequency: Frequency::Sometimes,
        }
    }

    fn classifier(provider: &MockAIProvider) -> LlmRiskClassifier {
        LlmRiskClassifier::new(Arc::new(provider.clone()))
    }

    #[tokio::test]
    async fn classifies_json_reply() {
        let provider = MockAIProvider::new().with_response(REPLY);
        let result = classifier(&provider).classify(&answers()).await.unwrap();

        assert_eq!(result.summary, "You seem stretched thin.");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.recommendations.len(), 2);
    }

    #[tokio::test]
    async fn prompt_carries_normalized_answers() {
        let provider = MockAIProvider::new().with_response(REPLY);
        classifier(&provider).classify(&answers()).await.unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        let prompt = &calls[0].messages[0].content;
        assert!(prompt.contains("Mood: Anxious"));
        assert!(prompt.contains("Stress level (1-10, higher is worse): 8"));
        assert!(prompt.contains("Sleep last night: 5 hours"));
        assert!(prompt.contains("Feels overwhelmed: Sometimes"));
        assert_eq!(calls[0].temperature, Some(TEMPERATURE));
        assert!(calls[0].system_prompt.is_some());
    }

    #[tokio::test]
    async fn accepts_fenced_reply() {
        let fenced = format!("```json\n{}\n```", REPLY);
        let provider = MockAIProvider::new().with_response(fenced);
        let result = classifier(&provider).classify(&answers()).await.unwrap();
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn non_json_reply_is_invalid() {
        let provider = MockAIProvider::new();
        let err = classifier(&provider).classify(&answers()).await.unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn unknown_level_is_invalid() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"summary":"s","riskLevel":"extreme","recommendations":[]}"#);
        let err = classifier(&provider).classify(&answers()).await.unwrap_err();
        assert!(err.to_string().contains("extreme"));
    }

    #[tokio::test]
    async fn missing_recommendations_parse_as_empty() {
        let provider =
            MockAIProvider::new().with_response(r#"{"summary":"s","riskLevel":"Low"}"#);
        let result = classifier(&provider).classify(&answers()).await.unwrap();
        assert!(result.recommendations.is_empty());
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let err = classifier(&provider).classify(&answers()).await.unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::Provider(AIError::AuthenticationFailed)
        ));
    }

    #[test]
    fn strip_code_fence_variants() {
        assert_eq!(strip_code_fence("  {}  "), "{}");
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```\n"), "{\"a\":1}");
    }
}
