//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM providers (OpenAI, mock)
//! - `classifier` - Risk classifiers built on an AI provider

pub mod ai;
pub mod classifier;

pub use ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use classifier::LlmRiskClassifier;
