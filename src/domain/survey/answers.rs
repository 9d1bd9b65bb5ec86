//! SurveyAnswers - the normalized answer set for one analysis request.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{Frequency, Level, Mood, SleepHours};

pub const MOOD_KEY: &str = "mood";
pub const STRESS_LEVEL_KEY: &str = "stressLevel";
pub const MOOD_LEVEL_KEY: &str = "moodLevel";
pub const SLEEP_HOURS_KEY: &str = "sleepHours";
pub const ANXIETY_FREQUENCY_KEY: &str = "anxietyFrequency";
pub const OVERWHELMED_FREQUENCY_KEY: &str = "overwhelmedFrequency";

/// The payload could not be read as a survey at all.
///
/// This is the only failure the analyzer reports; individual field problems
/// are absorbed during normalization.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid survey payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid survey payload: expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Normalized survey answers.
///
/// Every field is always populated: missing or unusable answers are replaced
/// with the defaults below.
///
/// | field | default |
/// |---|---|
/// | `mood` | Neutral |
/// | `stress_level` | 5 |
/// | `mood_level` | 5 |
/// | `sleep_hours` | 7 |
/// | `anxiety_frequency` | No |
/// | `overwhelmed_frequency` | No |
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswers {
    pub mood: Mood,
    pub stress_level: Level,
    pub mood_level: Level,
    pub sleep_hours: SleepHours,
    pub anxiety_frequency: Frequency,
    pub overwhelmed_frequency: Frequency,
}

impl SurveyAnswers {
    /// Parses a JSON payload into normalized answers.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError` only when the payload is not a JSON object.
    pub fn from_json(payload: &str) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(payload)?;
        match value {
            Value::Object(map) => Ok(Self::from_map(&map)),
            other => Err(PayloadError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Normalizes an already-parsed JSON object. Unknown keys are ignored.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mood = match map.get(MOOD_KEY) {
            None | Some(Value::Null) => Mood::default(),
            Some(Value::String(raw)) => Mood::parse(raw),
            Some(_) => Mood::Unknown,
        };

        Self {
            mood,
            stress_level: number_field(map, STRESS_LEVEL_KEY)
                .map(Level::from_f64)
                .unwrap_or_default(),
            mood_level: number_field(map, MOOD_LEVEL_KEY)
                .map(Level::from_f64)
                .unwrap_or_default(),
            sleep_hours: number_field(map, SLEEP_HOURS_KEY)
                .map(SleepHours::new)
                .unwrap_or_default(),
            anxiety_frequency: frequency_field(map, ANXIETY_FREQUENCY_KEY),
            overwhelmed_frequency: frequency_field(map, OVERWHELMED_FREQUENCY_KEY),
        }
    }
}

/// Reads a numeric answer, accepting JSON numbers and numeric strings.
fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    value.is_finite().then_some(value)
}

fn frequency_field(map: &Map<String, Value>, key: &str) -> Frequency {
    match map.get(key) {
        None | Some(Value::Null) => Frequency::default(),
        Some(Value::String(raw)) => Frequency::parse(raw),
        Some(_) => Frequency::Unknown,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
