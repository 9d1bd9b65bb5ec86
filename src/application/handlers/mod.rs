//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod analyze_survey;

pub use analyze_survey::{AnalyzeSurveyCommand, AnalyzeSurveyHandler, DEFAULT_CLASSIFIER_TIMEOUT};
