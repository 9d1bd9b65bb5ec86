//! Risk Scorer - weighted sum of independent survey signals.
//!
//! Each signal contributes between zero and its weight; the weights add up
//! to 100 so the total reads as a 0-100 score.
//!
//! | signal | weight | grows with |
//! |---|---|---|
//! | stress | 30 | higher `stressLevel` |
//! | mood | 25 | lower `moodLevel` |
//! | sleep | 20 | hours below 7 |
//! | anxiety | 15 | Yes = full, Sometimes = half |
//! | overwhelm | 10 | Yes = full, Sometimes = half |

use serde::Serialize;
use std::fmt;

use crate::domain::survey::SurveyAnswers;

pub const STRESS_WEIGHT: f64 = 30.0;
pub const MOOD_WEIGHT: f64 = 25.0;
pub const SLEEP_WEIGHT: f64 = 20.0;
pub const ANXIETY_WEIGHT: f64 = 15.0;
pub const OVERWHELM_WEIGHT: f64 = 10.0;

/// Sleep at or above this many hours contributes nothing.
pub const HEALTHY_SLEEP_HOURS: f64 = 7.0;

/// Stress ratings at or above this are called out individually.
pub const ELEVATED_STRESS_LEVEL: u8 = 7;

/// Mood ratings at or below this are called out individually.
pub const LOW_MOOD_LEVEL: u8 = 4;

/// A survey signal that feeds the risk score.
///
/// Declaration order is the tie-break order when picking dominant signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Stress,
    Mood,
    Sleep,
    Anxiety,
    Overwhelm,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::Stress,
        Signal::Mood,
        Signal::Sleep,
        Signal::Anxiety,
        Signal::Overwhelm,
    ];

    /// Maximum points this signal can contribute.
    pub fn weight(&self) -> f64 {
        match self {
            Signal::Stress => STRESS_WEIGHT,
            Signal::Mood => MOOD_WEIGHT,
            Signal::Sleep => SLEEP_WEIGHT,
            Signal::Anxiety => ANXIETY_WEIGHT,
            Signal::Overwhelm => OVERWHELM_WEIGHT,
        }
    }

    /// Short phrase naming the signal when it is a concern.
    pub fn concern(&self) -> &'static str {
        match self {
            Signal::Stress => "high stress",
            Signal::Mood => "low mood",
            Signal::Sleep => "insufficient sleep",
            Signal::Anxiety => "frequent anxiety",
            Signal::Overwhelm => "feeling overwhelmed",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.concern())
    }
}

/// Points one signal added to the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalContribution {
    pub signal: Signal,
    pub points: f64,
    /// Whether the underlying answer crossed the signal's own threshold.
    pub elevated: bool,
}

/// Total score with its per-signal breakdown, in [`Signal::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskScore {
    pub total: f64,
    pub contributions: Vec<SignalContribution>,
}

impl RiskScore {
    /// Contribution for one signal.
    pub fn contribution(&self, signal: Signal) -> Option<&SignalContribution> {
        self.contributions.iter().find(|c| c.signal == signal)
    }

    /// Non-zero contributions, largest first; ties keep signal order.
    pub fn ranked(&self) -> Vec<&SignalContribution> {
        let mut ranked: Vec<_> = self.contributions.iter().filter(|c| c.points > 0.0).collect();
        // Stable sort keeps declaration order for equal points.
        ranked.sort_by(|a, b| b.points.total_cmp(&a.points));
        ranked
    }

    /// The largest contributing signal, if any signal contributed.
    pub fn dominant(&self) -> Option<Signal> {
        self.ranked().first().map(|c| c.signal)
    }

    /// Signals whose answers crossed their own threshold.
    pub fn elevated_signals(&self) -> impl Iterator<Item = Signal> + '_ {
        self.contributions.iter().filter(|c| c.elevated).map(|c| c.signal)
    }

    pub fn is_elevated(&self, signal: Signal) -> bool {
        self.contribution(signal).is_some_and(|c| c.elevated)
    }
}

/// Stateless scorer for survey answers.
pub struct RiskScorer;

impl RiskScorer {
    /// Computes the weighted risk score for normalized answers.
    pub fn score(answers: &SurveyAnswers) -> RiskScore {
        let contributions: Vec<SignalContribution> = Signal::ALL
            .iter()
            .map(|signal| Self::contribution(*signal, answers))
            .collect();
        let total = contributions.iter().map(|c| c.points).sum();

        RiskScore {
            total,
            contributions,
        }
    }

    fn contribution(signal: Signal, answers: &SurveyAnswers) -> SignalContribution {
        let (points, elevated) = match signal {
            Signal::Stress => (
                answers.stress_level.as_fraction() * STRESS_WEIGHT,
                answers.stress_level.value() >= ELEVATED_STRESS_LEVEL,
            ),
            Signal::Mood => (
                (1.0 - answers.mood_level.as_fraction()) * MOOD_WEIGHT,
                answers.mood_level.value() <= LOW_MOOD_LEVEL,
            ),
            Signal::Sleep => {
                let deficit = (HEALTHY_SLEEP_HOURS - answers.sleep_hours.hours())
                    .clamp(0.0, HEALTHY_SLEEP_HOURS);
                (deficit / HEALTHY_SLEEP_HOURS * SLEEP_WEIGHT, deficit > 0.0)
            }
            Signal::Anxiety => (
                answers.anxiety_frequency.weight_fraction() * ANXIETY_WEIGHT,
                answers.anxiety_frequency.is_reported(),
            ),
            Signal::Overwhelm => (
                answers.overwhelmed_frequency.weight_fraction() * OVERWHELM_WEIGHT,
                answers.overwhelmed_frequency.is_reported(),
            ),
        };

        SignalContribution {
            signal,
            points,
            elevated,
        }
    }
}
