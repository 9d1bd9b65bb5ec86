//! AnalyzeSurveyHandler - Command handler for survey risk analysis.
//!
//! Runs the deterministic analyzer and, when a classifier is configured,
//! lets it rewrite the narrative. The classifier can raise the risk level
//! but never lower it; any classifier failure leaves the deterministic
//! assessment in place.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::domain::assessment::{escalation_advice, AnalysisResult, Analyzer, Assessment};
use crate::domain::foundation::Timestamp;
use crate::domain::survey::SurveyAnswers;
use crate::ports::{Classification, ClassifierError, RiskClassifier};

/// Default upper bound on one classifier call.
pub const DEFAULT_CLASSIFIER_TIMEOUT: Duration = Duration::from_secs(30);

/// Command to analyze one survey payload.
#[derive(Debug, Clone)]
pub struct AnalyzeSurveyCommand {
    /// Raw JSON survey answers.
    pub payload: String,
}

impl AnalyzeSurveyCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

/// Handler for survey analysis.
pub struct AnalyzeSurveyHandler {
    classifier: Option<Arc<dyn RiskClassifier>>,
    classifier_timeout: Duration,
}

impl Default for AnalyzeSurveyHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzeSurveyHandler {
    /// Creates a handler that only uses deterministic scoring.
    pub fn new() -> Self {
        Self {
            classifier: None,
            classifier_timeout: DEFAULT_CLASSIFIER_TIMEOUT,
        }
    }

    /// Attaches an external classifier, bounded by `classifier_timeout`.
    pub fn with_classifier(
        mut self,
        classifier: Arc<dyn RiskClassifier>,
        classifier_timeout: Duration,
    ) -> Self {
        self.classifier = Some(classifier);
        self.classifier_timeout = classifier_timeout;
        self
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Analyzes the payload. Never fails; problems are reported through
    /// the result's `error` field.
    pub async fn handle(&self, cmd: AnalyzeSurveyCommand) -> AnalysisResult {
        let assessment = match Analyzer::evaluate(&cmd.payload) {
            Ok(assessment) => assessment,
            Err(err) => {
                tracing::warn!(error = %err, "Rejected survey payload");
                return AnalysisResult::failed(err.to_string(), Timestamp::now());
            }
        };

        tracing::debug!(
            score = assessment.score.total,
            risk_level = %assessment.risk_level,
            elevated = assessment.score.elevated_signals().count(),
            "Scored survey answers"
        );

        let assessment = match &self.classifier {
            Some(classifier) => self.refine(classifier.as_ref(), assessment).await,
            None => assessment,
        };

        assessment.into_result(Timestamp::now())
    }

    /// Serialized-in, serialized-out variant of [`handle`](Self::handle).
    pub async fn handle_json(&self, payload: &str) -> String {
        self.handle(AnalyzeSurveyCommand::new(payload)).await.to_json()
    }

    async fn refine(&self, classifier: &dyn RiskClassifier, assessment: Assessment) -> Assessment {
        match self.classify(classifier, &assessment.answers).await {
            Ok(classification) => merge(classifier.name(), assessment, classification),
            Err(err) => {
                tracing::warn!(
                    classifier = classifier.name(),
                    error = %err,
                    "Classifier failed, using deterministic assessment"
                );
                assessment
            }
        }
    }

    async fn classify(
        &self,
        classifier: &dyn RiskClassifier,
        answers: &SurveyAnswers,
    ) -> Result<Classification, ClassifierError> {
        match timeout(self.classifier_timeout, classifier.classify(answers)).await {
            Ok(result) => result,
            Err(_) => Err(ClassifierError::Timeout {
                timeout_ms: self.classifier_timeout.as_millis() as u64,
            }),
        }
    }
}

/// Folds a classification into the deterministic assessment.
fn merge(name: &str, mut assessment: Assessment, classification: Classification) -> Assessment {
    if !classification.is_usable() {
        tracing::warn!(classifier = name, "Classifier returned an empty summary");
        return assessment;
    }

    // A lower level would understate what the answers show.
    if classification.risk_level < assessment.risk_level {
        tracing::debug!(
            classifier = name,
            classified = %classification.risk_level,
            scored = %assessment.risk_level,
            "Classifier level below scored level, keeping deterministic assessment"
        );
        return assessment;
    }

    let mut recommendations = classification.usable_recommendations();
    if !recommendations.is_empty() {
        // Escalation advice for the final level always leads the list.
        if let Some(advice) = escalation_advice(classification.risk_level) {
            if !recommendations.iter().any(|r| r == advice) {
                recommendations.insert(0, advice.to_string());
            }
        }
        assessment.recommendations = recommendations;
    }
    assessment.summary = classification.summary.trim().to_string();
    assessment.risk_level = classification.risk_level;
    assessment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::RiskLevel;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const REFERENCE_PAYLOAD: &str = r#"{"mood":"Anxious","stressLevel":8,"moodLevel":3,"sleepHours":5,"anxietyFrequency":"Yes","overwhelmedFrequency":"Yes"}"#;

    struct StubClassifier {
        reply: Option<Classification>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl StubClassifier {
        fn replying(level: RiskLevel, summary: &str, recommendations: &[&str]) -> Self {
            Self {
                reply: Some(Classification {
                    summary: summary.to_string(),
                    risk_level: level,
                    recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
                }),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    #[async_trait]
    impl RiskClassifier for StubClassifier {
        async fn classify(&self, _answers: &SurveyAnswers) -> Result<Classification, ClassifierError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.reply
                .clone()
                .ok_or_else(|| ClassifierError::invalid_response("stub failure"))
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn handler_with(stub: Arc<StubClassifier>) -> AnalyzeSurveyHandler {
        AnalyzeSurveyHandler::new().with_classifier(stub, Duration::from_millis(50))
    }

    fn deterministic() -> AnalysisResult {
        Analyzer::analyze(REFERENCE_PAYLOAD)
    }

    fn assert_deterministic(result: &AnalysisResult) {
        let expected = deterministic();
        assert_eq!(result.summary, expected.summary);
        assert_eq!(result.risk_level, expected.risk_level);
        assert_eq!(result.recommendations, expected.recommendations);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn without_classifier_matches_analyzer() {
        let handler = AnalyzeSurveyHandler::new();
        assert!(!handler.has_classifier());

        let result = handler.handle(AnalyzeSurveyCommand::new(REFERENCE_PAYLOAD)).await;
        assert_deterministic(&result);
    }

    #[tokio::test]
    async fn classifier_narrative_is_used_when_level_not_lower() {
        let stub = Arc::new(StubClassifier::replying(
            RiskLevel::Severe,
            "You are carrying a lot right now.",
            &["Reach out to a counselor this week."],
        ));
        let result = handler_with(stub.clone())
            .handle(AnalyzeSurveyCommand::new(REFERENCE_PAYLOAD))
            .await;

        assert_eq!(result.risk_level, RiskLevel::Severe);
        assert_eq!(result.summary, "You are carrying a lot right now.");
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[1], "Reach out to a counselor this week.");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn raised_level_keeps_escalation_advice_first() {
        let severe = escalation_advice(RiskLevel::Severe).unwrap();
        let stub = Arc::new(StubClassifier::replying(
            RiskLevel::Severe,
            "Things feel very heavy.",
            &["Rest this weekend.", "Write down what is worrying you."],
        ));
        let result = handler_with(stub)
            .handle(AnalyzeSurveyCommand::new(REFERENCE_PAYLOAD))
            .await;

        assert_eq!(result.recommendations[0], severe);
        assert_eq!(result.recommendations.len(), 3);
        let high = escalation_advice(RiskLevel::High).unwrap();
        assert!(result.recommendations.iter().all(|r| r != high));
    }

    #[tokio::test]
    async fn escalation_advice_is_not_duplicated() {
        let high = escalation_advice(RiskLevel::High).unwrap();
        let stub = Arc::new(StubClassifier::replying(
            RiskLevel::High,
            "Take care.",
            &[high, "Rest."],
        ));
        let result = handler_with(stub)
            .handle(AnalyzeSurveyCommand::new(REFERENCE_PAYLOAD))
            .await;

        assert_eq!(result.recommendations, vec![high.to_string(), "Rest.".to_string()]);
    }

    #[tokio::test]
    async fn classifier_cannot_lower_level() {
        let stub = Arc::new(StubClassifier::replying(RiskLevel::Low, "All good.", &["Relax."]));
        let result = handler_with(stub)
            .handle(AnalyzeSurveyCommand::new(REFERENCE_PAYLOAD))
            .await;

        assert_eq!(result.risk_level, RiskLevel::High);
        assert_deterministic(&result);
    }

    #[tokio::test]
    async fn classifier_error_falls_back() {
        let stub = Arc::new(StubClassifier::failing());
        let result = handler_with(stub)
            .handle(AnalyzeSurveyCommand::new(REFERENCE_PAYLOAD))
            .await;

        assert_deterministic(&result);
    }

    #[tokio::test]
    async fn classifier_timeout_falls_back() {
        let stub = Arc::new(
            StubClassifier::replying(RiskLevel::Severe, "late", &["late"])
                .with_delay(Duration::from_millis(500)),
        );
        let result = handler_with(stub)
            .handle(AnalyzeSurveyCommand::new(REFERENCE_PAYLOAD))
            .await;

        assert_deterministic(&result);
    }

    #[tokio::test]
    async fn empty_summary_falls_back() {
        let stub = Arc::new(StubClassifier::replying(RiskLevel::Severe, "   ", &["x"]));
        let result = handler_with(stub)
            .handle(AnalyzeSurveyCommand::new(REFERENCE_PAYLOAD))
            .await;

        assert_deterministic(&result);
    }

    #[tokio::test]
    async fn empty_recommendations_keep_deterministic_ones() {
        let stub = Arc::new(StubClassifier::replying(RiskLevel::High, "Take care.", &[" "]));
        let result = handler_with(stub)
            .handle(AnalyzeSurveyCommand::new(REFERENCE_PAYLOAD))
            .await;

        assert_eq!(result.summary, "Take care.");
        assert_eq!(result.recommendations, deterministic().recommendations);
    }

    #[tokio::test]
    async fn malformed_payload_skips_classifier() {
        let stub = Arc::new(StubClassifier::replying(RiskLevel::Severe, "s", &["r"]));
        let result = handler_with(stub.clone())
            .handle(AnalyzeSurveyCommand::new("not json"))
            .await;

        assert!(result.is_error());
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn handle_json_emits_output_keys() {
        let json = AnalyzeSurveyHandler::new().handle_json(REFERENCE_PAYLOAD).await;
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["riskLevel"], "High");
        assert!(value["timestamp"].is_string());
        assert!(value.get("error").is_none());
    }
}
