//! Analyzer - survey payload in, risk assessment out.

use serde::Serialize;

use super::{compose, recommend, AnalysisResult, RiskLevel, RiskScore, RiskScorer};
use crate::domain::foundation::Timestamp;
use crate::domain::survey::{PayloadError, SurveyAnswers};

/// Deterministic assessment of one answer set, before stamping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub answers: SurveyAnswers,
    pub score: RiskScore,
    pub risk_level: RiskLevel,
    pub summary: String,
    pub recommendations: Vec<String>,
}

impl Assessment {
    /// Stamps the assessment into an output record.
    pub fn into_result(self, timestamp: Timestamp) -> AnalysisResult {
        AnalysisResult::new(self.summary, self.risk_level, self.recommendations, timestamp)
    }
}

/// Pure, stateless survey analyzer.
pub struct Analyzer;

impl Analyzer {
    /// Scores, classifies and composes output for normalized answers.
    pub fn assess(answers: &SurveyAnswers) -> Assessment {
        let score = RiskScorer::score(answers);
        let risk_level = RiskLevel::from_score(score.total);
        let summary = compose(&score, risk_level, answers.mood);
        let recommendations = recommend(&score, risk_level, answers.mood);

        Assessment {
            answers: *answers,
            score,
            risk_level,
            summary,
            recommendations,
        }
    }

    /// Parses and assesses a payload without stamping it.
    pub fn evaluate(payload: &str) -> Result<Assessment, PayloadError> {
        SurveyAnswers::from_json(payload).map(|answers| Self::assess(&answers))
    }

    /// Analyzes a JSON payload.
    ///
    /// Never fails: an unreadable payload yields a result with `error` set
    /// and a `Low` risk level. The timestamp is taken after scoring.
    pub fn analyze(payload: &str) -> AnalysisResult {
        match Self::evaluate(payload) {
            Ok(assessment) => assessment.into_result(Timestamp::now()),
            Err(err) => AnalysisResult::failed(err.to_string(), Timestamp::now()),
        }
    }
}

/// Serialized-in, serialized-out entry point.
pub fn analyze(payload: &str) -> String {
    Analyzer::analyze(payload).to_json()
}
