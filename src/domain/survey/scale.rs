//! Numeric survey scales: 1-10 self ratings and nightly sleep hours.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-10 self rating (stress or mood).
///
/// Deserialization goes through [`Level::new`], so out-of-range input is
/// clamped rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Midpoint used when the answer is missing.
    pub const DEFAULT: Self = Self(5);

    /// Creates a new Level, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Creates a Level from any finite number, rounding then clamping.
    ///
    /// Non-finite input yields the default.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::DEFAULT;
        }
        let rounded = value.round().clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        Self(rounded as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Position on the scale as a fraction (1 -> 0.0, 10 -> 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0.saturating_sub(Self::MIN)) / f64::from(Self::MAX - Self::MIN)
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Hours slept, within 0-24. Deserialization clamps like [`SleepHours::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SleepHours(f64);

impl SleepHours {
    pub const MAX: f64 = 24.0;

    /// Assumed when the answer is missing.
    pub const DEFAULT: Self = Self(7.0);

    /// Creates SleepHours, clamping to 0-24. Non-finite input yields the default.
    pub fn new(hours: f64) -> Self {
        if !hours.is_finite() {
            return Self::DEFAULT;
        }
        Self(hours.clamp(0.0, Self::MAX))
    }

    /// Returns the number of hours.
    pub fn hours(&self) -> f64 {
        self.0
    }
}

impl From<f64> for SleepHours {
    fn from(hours: f64) -> Self {
        Self::new(hours)
    }
}

impl From<SleepHours> for f64 {
    fn from(hours: SleepHours) -> Self {
        hours.0
    }
}

impl Default for SleepHours {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SleepHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}
