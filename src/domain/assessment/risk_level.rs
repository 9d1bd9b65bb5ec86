//! RiskLevel - four-point ordered risk classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered risk classification. `Low < Moderate < High < Severe`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    #[default]
    Low,
    Moderate,
    High,
    Severe,
}

/// Score thresholds checked top-down; the first lower bound the score
/// reaches wins. The last entry has no lower bound, so every score maps to
/// exactly one level.
pub const RISK_THRESHOLDS: &[(f64, RiskLevel)] = &[
    (80.0, RiskLevel::Severe),
    (55.0, RiskLevel::High),
    (30.0, RiskLevel::Moderate),
    (f64::NEG_INFINITY, RiskLevel::Low),
];

impl RiskLevel {
    /// All levels in ascending order.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Severe,
    ];

    /// Maps a risk score onto a level using [`RISK_THRESHOLDS`].
    pub fn from_score(score: f64) -> Self {
        RISK_THRESHOLDS
            .iter()
            .find(|(lower_bound, _)| score >= *lower_bound)
            .map(|(_, level)| *level)
            .unwrap_or_default()
    }

    /// Parses a level name, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "moderate" | "medium" => Some(RiskLevel::Moderate),
            "high" => Some(RiskLevel::High),
            "severe" | "critical" => Some(RiskLevel::Severe),
            _ => None,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Severe => "Severe",
        }
    }

    /// Plain-language description used in summaries.
    pub fn describe(&self) -> &'static str {
        match self {
            RiskLevel::Low => "a low level of concern",
            RiskLevel::Moderate => "a moderate level of concern",
            RiskLevel::High => "a high level of concern",
            RiskLevel::Severe => "a severe level of concern",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Severe);
    }

    #[test]
    fn from_score_boundaries() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(29.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(54.99), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(55.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(79.99), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(80.0), RiskLevel::Severe);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::Severe);
    }

    #[test]
    fn from_score_handles_extremes() {
        assert_eq!(RiskLevel::from_score(-5.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(f64::INFINITY), RiskLevel::Severe);
        assert_eq!(RiskLevel::from_score(f64::NAN), RiskLevel::Low);
    }

    #[test]
    fn thresholds_are_strictly_descending() {
        for pair in RISK_THRESHOLDS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
            assert!(pair[0].1 > pair[1].1);
        }
        assert_eq!(RISK_THRESHOLDS.last().unwrap().0, f64::NEG_INFINITY);
    }

    #[test]
    fn parse_accepts_labels_in_any_case() {
        for level in RiskLevel::ALL {
            assert_eq!(RiskLevel::parse(level.label()), Some(level));
            assert_eq!(RiskLevel::parse(&level.label().to_uppercase()), Some(level));
        }
        assert_eq!(RiskLevel::parse("medium"), Some(RiskLevel::Moderate));
        assert_eq!(RiskLevel::parse("unsure"), None);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
    }

    proptest! {
        #[test]
        fn from_score_is_monotonic(a in -10.0f64..120.0, b in -10.0f64..120.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(RiskLevel::from_score(lo) <= RiskLevel::from_score(hi));
        }
    }
}
