//! Survey Module - The self-report answer set and its value objects.
//!
//! Raw answers arrive as loosely typed JSON. Normalization turns them into
//! closed types so the rest of the domain never sees free text:
//!
//! - `Mood` - mood label with an `Unknown` fallback
//! - `Frequency` - Yes / Sometimes / No with an `Unknown` fallback
//! - `Level` - 1-10 self rating
//! - `SleepHours` - 0-24 hours
//! - `SurveyAnswers` - the full normalized answer set

mod answers;
mod frequency;
mod mood;
mod scale;

pub use answers::{
    PayloadError, SurveyAnswers, ANXIETY_FREQUENCY_KEY, MOOD_KEY, MOOD_LEVEL_KEY,
    OVERWHELMED_FREQUENCY_KEY, SLEEP_HOURS_KEY, STRESS_LEVEL_KEY,
};
pub use frequency::Frequency;
pub use mood::Mood;
pub use scale::{Level, SleepHours};
