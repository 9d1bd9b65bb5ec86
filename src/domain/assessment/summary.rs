//! Plain-language summary for an assessment.

use super::{RiskLevel, RiskScore, Signal};
use crate::domain::survey::Mood;

pub const DISCLAIMER: &str = "This check-in is not a clinical diagnosis.";

/// How many elevated signals the summary names at most.
const MAX_NAMED_SIGNALS: usize = 2;

/// Composes a summary naming the risk level and the dominant signals.
pub fn compose(score: &RiskScore, level: RiskLevel, mood: Mood) -> String {
    let mut summary = String::new();

    if mood != Mood::Unknown {
        summary.push_str(&format!(
            "You described your mood as {}. ",
            mood.label().to_lowercase()
        ));
    }

    summary.push_str(&format!("Your responses indicate {}", level.describe()));
    summary.push_str(&drivers(score));
    summary.push_str(". ");
    summary.push_str(DISCLAIMER);
    summary
}

fn drivers(score: &RiskScore) -> String {
    let named: Vec<Signal> = score
        .ranked()
        .into_iter()
        .filter(|c| c.elevated)
        .take(MAX_NAMED_SIGNALS)
        .map(|c| c.signal)
        .collect();

    match named.as_slice() {
        [only] => format!(", driven mainly by {}", only.concern()),
        [first, second] => format!(
            ", driven mainly by {} and {}",
            first.concern(),
            second.concern()
        ),
        _ => match score.dominant() {
            Some(signal) => format!(
                ", with your {} answer as the largest contributor",
                area(signal)
            ),
            None => " with no notable contributing factors".to_string(),
        },
    }
}

fn area(signal: Signal) -> &'static str {
    match signal {
        Signal::Stress => "stress",
        Signal::Mood => "mood",
        Signal::Sleep => "sleep",
        Signal::Anxiety => "anxiety",
        Signal::Overwhelm => "overwhelm",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::RiskScorer;
    use crate::domain::survey::{Frequency, Level, SleepHours, SurveyAnswers};

    #[test]
    fn names_two_strongest_elevated_signals() {
        let answers = SurveyAnswers {
            mood: Mood::Anxious,
            stress_level: Level::new(8),
            mood_level: Level::new(3),
            sleep_hours: SleepHours::new(5.0),
            anxiety_frequency: Frequency::Yes,
            overwhelmed_frequency: Frequency::Yes,
        };
        let score = RiskScorer::score(&answers);
        let summary = compose(&score, RiskLevel::High, answers.mood);

        assert_eq!(
            summary,
            "You described your mood as anxious. Your responses indicate a high level of concern, \
             driven mainly by high stress and low mood. This check-in is not a clinical diagnosis."
        );
    }

    #[test]
    fn single_elevated_signal() {
        let answers = SurveyAnswers {
            sleep_hours: SleepHours::new(3.0),
            stress_level: Level::new(1),
            mood_level: Level::new(10),
            ..Default::default()
        };
        let score = RiskScorer::score(&answers);
        let summary = compose(&score, RiskLevel::Low, Mood::Neutral);
        assert!(summary.contains("driven mainly by insufficient sleep."));
    }

    #[test]
    fn nothing_elevated_names_largest_contributor() {
        let score = RiskScorer::score(&SurveyAnswers::default());
        let summary = compose(&score, RiskLevel::Low, Mood::Neutral);
        assert!(summary.contains("with your mood answer as the largest contributor"));
        assert!(summary.starts_with("You described your mood as neutral."));
    }

    #[test]
    fn zero_score_has_no_drivers() {
        let answers = SurveyAnswers {
            stress_level: Level::new(1),
            mood_level: Level::new(10),
            sleep_hours: SleepHours::new(8.0),
            mood: Mood::Unknown,
            ..Default::default()
        };
        let score = RiskScorer::score(&answers);
        let summary = compose(&score, RiskLevel::Low, answers.mood);
        assert_eq!(
            summary,
            "Your responses indicate a low level of concern with no notable contributing factors. \
             This check-in is not a clinical diagnosis."
        );
    }
}
