use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{DurationBucket, EnergyLevel, Intensity, KidDuration};

/// Tunable tables of the workout generator.
///
/// Missing fields fall back to the shipped defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub durations: DurationTable,
    pub intensities: IntensityTable,
    /// Assumed working time of one set, used to derive the exercise count.
    pub average_work_seconds: u32,
    pub seconds_per_rep: u32,
    /// Lower bound for the estimated working time of one set.
    pub min_work_seconds: u32,
    pub min_exercises: usize,
    pub max_exercises: usize,
    pub kid: KidSettings,
}

impl GeneratorSettings {
    /// Upper bound for any minute value in the duration tables.
    pub const MAX_MINUTES: u32 = 240;
    /// Upper bound for any work, rest or per-rep time.
    pub const MAX_SECONDS: u32 = 600;
    pub const MAX_SETS: u32 = 20;
    pub const MAX_EXERCISES: usize = 50;

    /// Check the tables for degenerate or out-of-range values.
    ///
    /// Settings read from host configuration must pass this check before they
    /// are handed to a [`crate::Generator`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        for bucket in DurationBucket::iter() {
            let range = self.durations.get(bucket);
            if range.min == 0 || range.min > range.max || range.max > Self::MAX_MINUTES {
                return Err(SettingsError::InvalidDuration(bucket.to_string()));
            }
        }

        for intensity in Intensity::iter() {
            let parameters = self.intensities.get(intensity);
            if parameters.sets == 0
                || parameters.sets > Self::MAX_SETS
                || parameters.min_rest_seconds > parameters.max_rest_seconds
                || parameters.max_rest_seconds > Self::MAX_SECONDS
                || !(parameters.min_rest_seconds..=parameters.max_rest_seconds)
                    .contains(&parameters.rest_seconds)
            {
                return Err(SettingsError::InvalidIntensity(intensity.to_string()));
            }
        }

        let valid_seconds = 1..=Self::MAX_SECONDS;

        if !valid_seconds.contains(&self.average_work_seconds)
            || !valid_seconds.contains(&self.seconds_per_rep)
            || self.min_work_seconds > Self::MAX_SECONDS
        {
            return Err(SettingsError::InvalidWorkTime);
        }

        if self.min_exercises == 0
            || self.min_exercises > self.max_exercises
            || self.max_exercises > Self::MAX_EXERCISES
        {
            return Err(SettingsError::InvalidExerciseCount {
                min: self.min_exercises,
                max: self.max_exercises,
            });
        }

        for duration in KidDuration::iter() {
            if !(1..=Self::MAX_MINUTES).contains(&self.kid.minutes(duration)) {
                return Err(SettingsError::InvalidDuration(duration.to_string()));
            }
        }

        for energy in EnergyLevel::iter() {
            if !valid_seconds.contains(&self.kid.work_seconds(energy)) {
                return Err(SettingsError::InvalidWorkTime);
            }
        }

        Ok(())
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            durations: DurationTable::default(),
            intensities: IntensityTable::default(),
            average_work_seconds: 40,
            seconds_per_rep: 3,
            min_work_seconds: 20,
            min_exercises: 3,
            max_exercises: 12,
            kid: KidSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteRange {
    pub min: u32,
    pub max: u32,
}

impl MinuteRange {
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationTable {
    pub short: MinuteRange,
    pub medium: MinuteRange,
    pub long: MinuteRange,
}

impl DurationTable {
    #[must_use]
    pub fn get(&self, bucket: DurationBucket) -> MinuteRange {
        match bucket {
            DurationBucket::Short => self.short,
            DurationBucket::Medium => self.medium,
            DurationBucket::Long => self.long,
        }
    }
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            short: MinuteRange { min: 15, max: 20 },
            medium: MinuteRange { min: 25, max: 35 },
            long: MinuteRange { min: 40, max: 50 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityParameters {
    pub sets: u32,
    pub rest_seconds: u32,
    pub min_rest_seconds: u32,
    pub max_rest_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityTable {
    pub easy: IntensityParameters,
    pub medium: IntensityParameters,
    pub hard: IntensityParameters,
}

impl IntensityTable {
    #[must_use]
    pub fn get(&self, intensity: Intensity) -> IntensityParameters {
        match intensity {
            Intensity::Easy => self.easy,
            Intensity::Medium => self.medium,
            Intensity::Hard => self.hard,
        }
    }
}

impl Default for IntensityTable {
    fn default() -> Self {
        Self {
            easy: IntensityParameters {
                sets: 2,
                rest_seconds: 75,
                min_rest_seconds: 60,
                max_rest_seconds: 90,
            },
            medium: IntensityParameters {
                sets: 3,
                rest_seconds: 50,
                min_rest_seconds: 45,
                max_rest_seconds: 60,
            },
            hard: IntensityParameters {
                sets: 4,
                rest_seconds: 40,
                min_rest_seconds: 30,
                max_rest_seconds: 45,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KidSettings {
    pub short_minutes: u32,
    pub medium_minutes: u32,
    pub long_minutes: u32,
    pub low_energy_seconds: u32,
    pub medium_energy_seconds: u32,
    pub high_energy_seconds: u32,
}

impl KidSettings {
    #[must_use]
    pub fn minutes(&self, duration: KidDuration) -> u32 {
        match duration {
            KidDuration::Short => self.short_minutes,
            KidDuration::Medium => self.medium_minutes,
            KidDuration::Long => self.long_minutes,
        }
    }

    #[must_use]
    pub fn work_seconds(&self, energy: EnergyLevel) -> u32 {
        match energy {
            EnergyLevel::Low => self.low_energy_seconds,
            EnergyLevel::Medium => self.medium_energy_seconds,
            EnergyLevel::High => self.high_energy_seconds,
        }
    }
}

impl Default for KidSettings {
    fn default() -> Self {
        Self {
            short_minutes: 5,
            medium_minutes: 10,
            long_minutes: 15,
            low_energy_seconds: 90,
            medium_energy_seconds: 75,
            high_energy_seconds: 60,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("invalid minute range for {0} duration")]
    InvalidDuration(String),
    #[error("invalid sets or rest for {0} intensity")]
    InvalidIntensity(String),
    #[error("work time must be between 1 and 600 seconds")]
    InvalidWorkTime,
    #[error("invalid exercise count bounds ({min} to {max})")]
    InvalidExerciseCount { min: usize, max: usize },
}
