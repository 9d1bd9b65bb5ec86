//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects shared by the survey and assessment modules.

mod timestamp;

pub use timestamp::Timestamp;
