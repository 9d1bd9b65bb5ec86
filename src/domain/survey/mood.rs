//! Self-reported mood label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood label picked by the respondent.
///
/// Free text is tolerated: anything outside the known labels becomes
/// [`Mood::Unknown`] rather than failing the survey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    #[default]
    Neutral,
    Anxious,
    Sad,
    Stressed,
    Unknown,
}

impl Mood {
    /// Maps raw text to a mood label, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "happy" => Mood::Happy,
            "neutral" => Mood::Neutral,
            "anxious" => Mood::Anxious,
            "sad" => Mood::Sad,
            "stressed" => Mood::Stressed,
            _ => Mood::Unknown,
        }
    }

    /// Returns the canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Anxious => "Anxious",
            Mood::Sad => "Sad",
            Mood::Stressed => "Stressed",
            Mood::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
