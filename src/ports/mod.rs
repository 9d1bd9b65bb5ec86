//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RiskClassifier` - Optional external classifier the analyzer may delegate to
//! - `AIProvider` - LLM chat completions used by the LLM-backed classifier

mod ai_provider;
mod risk_classifier;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use risk_classifier::{Classification, ClassifierError, RiskClassifier};
