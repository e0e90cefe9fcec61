use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::GeneratorSettings;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
pub enum DurationBucket {
    Short,
    Medium,
    Long,
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DurationBucket::Short => "short",
                DurationBucket::Medium => "medium",
                DurationBucket::Long => "long",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
pub enum Intensity {
    Easy,
    Medium,
    Hard,
}

impl Intensity {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Intensity::Easy => "Easy",
            Intensity::Medium => "Medium",
            Intensity::Hard => "Hard",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name().to_lowercase())
    }
}

/// Target parameters derived from a duration bucket and an intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub target_exercise_count: usize,
    pub sets_per_exercise: u32,
    pub rest_seconds: u32,
}

impl Constraints {
    /// Lower bound for the time any selected exercise takes at these constraints.
    #[must_use]
    pub fn min_exercise_seconds(&self, settings: &GeneratorSettings) -> u32 {
        self.sets_per_exercise
            .saturating_mul(settings.min_work_seconds.saturating_add(self.rest_seconds))
    }
}

#[must_use]
pub fn resolve(
    duration: DurationBucket,
    intensity: Intensity,
    settings: &GeneratorSettings,
) -> Constraints {
    let parameters = settings.intensities.get(intensity);
    let target_seconds = settings.durations.get(duration).midpoint() * 60.0;
    let exercise_seconds = f64::from(parameters.sets)
        * (f64::from(settings.average_work_seconds) + f64::from(parameters.rest_seconds));

    Constraints {
        target_exercise_count: exercise_count(target_seconds, exercise_seconds, settings),
        sets_per_exercise: parameters.sets,
        rest_seconds: parameters.rest_seconds,
    }
}

/// Number of exercises fitting into the target time, clamped to the configured bounds.
pub(crate) fn exercise_count(
    target_seconds: f64,
    exercise_seconds: f64,
    settings: &GeneratorSettings,
) -> usize {
    if exercise_seconds <= 0.0 {
        return settings.max_exercises;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (target_seconds / exercise_seconds).round().max(0.0) as usize;

    count.clamp(settings.min_exercises, settings.max_exercises)
}
