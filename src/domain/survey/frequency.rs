//! Yes / Sometimes / No frequency answers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a symptom was experienced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Yes,
    Sometimes,
    #[default]
    No,
    /// Unrecognized answer. Scored the same as `No`.
    Unknown,
}

impl Frequency {
    /// Maps raw text to a frequency, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" => Frequency::Yes,
            "sometimes" => Frequency::Sometimes,
            "no" => Frequency::No,
            _ => Frequency::Unknown,
        }
    }

    /// Share of a signal's full weight this answer carries.
    pub fn weight_fraction(&self) -> f64 {
        match self {
            Frequency::Yes => 1.0,
            Frequency::Sometimes => 0.5,
            Frequency::No | Frequency::Unknown => 0.0,
        }
    }

    /// Returns true when the symptom was reported at all.
    pub fn is_reported(&self) -> bool {
        matches!(self, Frequency::Yes | Frequency::Sometimes)
    }

    /// Returns the canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Yes => "Yes",
            Frequency::Sometimes => "Sometimes",
            Frequency::No => "No",
            Frequency::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
