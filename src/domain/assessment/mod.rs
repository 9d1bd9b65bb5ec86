//! Assessment Module - Pure domain services for survey risk analysis.
//!
//! # Components
//!
//! - `RiskScorer` - Weighted sum of stress, mood, sleep, anxiety and overwhelm signals
//! - `RiskLevel` - Four-point classification from an ordered threshold table
//! - `compose` - Summary naming the level and dominant signals
//! - `recommend` - Recommendation selection from a fixed catalog
//! - `Analyzer` - Payload-to-result pipeline
//!
//! All functions are pure apart from reading the clock when a result is
//! stamped, so they are safe to call concurrently without coordination.

mod analyzer;
mod recommendations;
mod result;
mod risk_level;
mod scorer;
mod summary;

pub use analyzer::{analyze, Analyzer, Assessment};
pub use recommendations::{advice_for, escalation_advice, recommend, GENERAL_ADVICE};
pub use result::{AnalysisResult, FALLBACK_RECOMMENDATION, FALLBACK_SUMMARY};
pub use risk_level::{RiskLevel, RISK_THRESHOLDS};
pub use scorer::{
    RiskScore, RiskScorer, Signal, SignalContribution, ANXIETY_WEIGHT, ELEVATED_STRESS_LEVEL,
    HEALTHY_SLEEP_HOURS, LOW_MOOD_LEVEL, MOOD_WEIGHT, OVERWHELM_WEIGHT, SLEEP_WEIGHT,
    STRESS_WEIGHT,
};
pub use summary::{compose, DISCLAIMER};
