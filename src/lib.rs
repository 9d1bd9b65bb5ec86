//! Mood Compass - Wellbeing Check-in Analysis
//!
//! This crate turns a short self-report survey (mood, stress, sleep, anxiety,
//! overwhelm) into a risk level, a plain-language summary and a list of
//! recommendations. Scoring is deterministic; an LLM-backed classifier can
//! optionally refine the narrative.
//!
//! ```
//! let output = mood_compass::analyze(r#"{"mood":"Anxious","stressLevel":8}"#);
//! assert!(output.contains("\"riskLevel\""));
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use domain::assessment::{analyze, AnalysisResult, Analyzer, RiskLevel};
pub use domain::survey::SurveyAnswers;
