//! Risk classifier adapters.
//!
//! - `LlmRiskClassifier` - Asks an `AIProvider` for a JSON classification

mod llm_classifier;

pub use llm_classifier::LlmRiskClassifier;
