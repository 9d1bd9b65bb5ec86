//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamp, validation errors)
//! - `survey` - Self-report answers and their normalization
//! - `assessment` - Pure scoring, classification and output composition

pub mod assessment;
pub mod foundation;
pub mod survey;
