//! Recommendation catalog and selection.

use super::{RiskLevel, RiskScore, Signal};
use crate::domain::survey::Mood;

const SEVERE_ADVICE: &str = "Please reach out to a mental health professional or someone you trust soon. \
If you are in crisis or thinking about harming yourself, contact local emergency services or a crisis line right away.";

const HIGH_ADVICE: &str =
    "Consider talking with a counselor, doctor, or mental health professional about how you have been feeling.";

const STRESS_ADVICE: &[&str] = &[
    "Take short breaks through the day for stress relief, such as a walk, stretching, or slow breathing.",
    "Pick one source of stress you can reduce, postpone, or hand off this week.",
];

const MOOD_ADVICE: &[&str] = &[
    "Plan one small activity you usually enjoy and put it on your calendar for the next few days.",
    "Reach out to a friend or family member, even for a short call or message.",
];

const SLEEP_ADVICE: &[&str] = &[
    "Aim for 7-9 hours of sleep by keeping a consistent bedtime and wake time.",
    "Limit screens and caffeine in the hour before bed to help your sleep.",
];

const ANXIETY_ADVICE: &[&str] = &[
    "When anxiety rises, try a grounding exercise such as slow 4-7-8 breathing or naming five things you can see.",
];

const OVERWHELM_ADVICE: &[&str] = &[
    "Break large tasks into smaller steps and focus on one at a time.",
];

/// Used when no signal-specific advice applies.
pub const GENERAL_ADVICE: &[&str] = &[
    "Keep up the habits that are working for you, like regular sleep, movement, and time with people you care about.",
    "Check in with yourself regularly to notice changes in your mood and stress.",
];

/// Escalation advice that leads the list at High and Severe.
pub fn escalation_advice(level: RiskLevel) -> Option<&'static str> {
    match level {
        RiskLevel::Severe => Some(SEVERE_ADVICE),
        RiskLevel::High => Some(HIGH_ADVICE),
        RiskLevel::Moderate | RiskLevel::Low => None,
    }
}

/// Advice attached to a signal that crossed its own threshold.
pub fn advice_for(signal: Signal) -> &'static [&'static str] {
    match signal {
        Signal::Stress => STRESS_ADVICE,
        Signal::Mood => MOOD_ADVICE,
        Signal::Sleep => SLEEP_ADVICE,
        Signal::Anxiety => ANXIETY_ADVICE,
        Signal::Overwhelm => OVERWHELM_ADVICE,
    }
}

/// Selects an ordered, non-empty recommendation list.
///
/// Order: escalation advice for High/Severe, then advice per elevated
/// signal in signal order, then advice matching the self-reported mood
/// label. General advice is used when nothing specific applied.
pub fn recommend(score: &RiskScore, level: RiskLevel, mood: Mood) -> Vec<String> {
    let mut selected: Vec<&'static str> = escalation_advice(level).into_iter().collect();

    let mut specific: Vec<&'static str> = score
        .elevated_signals()
        .flat_map(|signal| advice_for(signal).iter().copied())
        .collect();

    let mood_signal = match mood {
        Mood::Anxious => Some(Signal::Anxiety),
        Mood::Stressed => Some(Signal::Stress),
        Mood::Sad => Some(Signal::Mood),
        Mood::Happy | Mood::Neutral | Mood::Unknown => None,
    };
    if let Some(&first) = mood_signal.and_then(|signal| advice_for(signal).first()) {
        if !specific.contains(&first) {
            specific.push(first);
        }
    }

    if specific.is_empty() {
        selected.extend(GENERAL_ADVICE);
    } else {
        selected.extend(specific);
    }

    selected.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::RiskScorer;
    use crate::domain::survey::{Frequency, Level, SleepHours, SurveyAnswers};

    fn mentions(recommendations: &[String], word: &str) -> bool {
        recommendations
            .iter()
            .any(|r| r.to_lowercase().contains(word))
    }

    #[test]
    fn calm_answers_get_general_advice() {
        let answers = SurveyAnswers {
            stress_level: Level::new(2),
            mood_level: Level::new(8),
            sleep_hours: SleepHours::new(8.0),
            mood: Mood::Happy,
            ..Default::default()
        };
        let score = RiskScorer::score(&answers);
        let recs = recommend(&score, RiskLevel::Low, answers.mood);

        assert_eq!(recs, GENERAL_ADVICE.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn short_sleep_gets_sleep_advice() {
        let answers = SurveyAnswers {
            sleep_hours: SleepHours::new(5.0),
            ..Default::default()
        };
        let score = RiskScorer::score(&answers);
        let recs = recommend(&score, RiskLevel::Moderate, answers.mood);

        assert!(mentions(&recs, "sleep"));
        assert!(!recs.contains(&GENERAL_ADVICE[0].to_string()));
    }

    #[test]
    fn high_stress_gets_stress_advice() {
        let answers = SurveyAnswers {
            stress_level: Level::new(9),
            ..Default::default()
        };
        let score = RiskScorer::score(&answers);
        let recs = recommend(&score, RiskLevel::Moderate, answers.mood);
        assert!(mentions(&recs, "stress"));
    }

    #[test]
    fn severe_level_leads_with_escalation() {
        let answers = SurveyAnswers {
            stress_level: Level::new(10),
            mood_level: Level::new(1),
            sleep_hours: SleepHours::new(2.0),
            anxiety_frequency: Frequency::Yes,
            overwhelmed_frequency: Frequency::Yes,
            mood: Mood::Sad,
        };
        let score = RiskScorer::score(&answers);
        let recs = recommend(&score, RiskLevel::Severe, answers.mood);

        assert_eq!(recs[0], SEVERE_ADVICE);
        assert!(mentions(&recs, "anxiety"));
        assert!(mentions(&recs, "smaller steps"));
    }

    #[test]
    fn high_level_includes_professional_advice() {
        let score = RiskScorer::score(&SurveyAnswers::default());
        let recs = recommend(&score, RiskLevel::High, Mood::Neutral);
        assert_eq!(recs[0], HIGH_ADVICE);
        assert!(recs.len() > 1);
    }

    #[test]
    fn mood_label_adds_matching_advice_once() {
        let anxious = SurveyAnswers {
            mood: Mood::Anxious,
            ..Default::default()
        };
        let score = RiskScorer::score(&anxious);
        let recs = recommend(&score, RiskLevel::Low, anxious.mood);
        assert_eq!(recs, vec![ANXIETY_ADVICE[0].to_string()]);

        let both = SurveyAnswers {
            mood: Mood::Anxious,
            anxiety_frequency: Frequency::Yes,
            ..Default::default()
        };
        let score = RiskScorer::score(&both);
        let recs = recommend(&score, RiskLevel::Low, both.mood);
        assert_eq!(recs.iter().filter(|r| r.as_str() == ANXIETY_ADVICE[0]).count(), 1);
    }
}
