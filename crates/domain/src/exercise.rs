use std::fmt;

use derive_more::{AsRef, Deref, Display};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use uuid::Uuid;

use crate::{EnergyLevel, GeneratorSettings, Name};

/// Catalog entry from which exercise instances are created.
///
/// Templates are static data. A routine never refers to a template after
/// generation, it carries its own [`ExerciseInstance`] copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub equipment: Equipment,
    /// The first entry is the primary focus.
    pub focus: &'static [MuscleFocus],
    pub instructions: Option<&'static str>,
    pub sets: u32,
    pub reps: &'static str,
    pub rest_seconds: u32,
    pub kid_friendly: bool,
    /// Energy-specific variations of kid activities.
    pub cues: &'static [(EnergyLevel, &'static str)],
}

impl ExerciseTemplate {
    #[must_use]
    pub fn primary_focus(&self) -> MuscleFocus {
        self.focus.first().copied().unwrap_or(MuscleFocus::FullBody)
    }

    #[must_use]
    pub fn has_focus(&self, focus: MuscleFocus) -> bool {
        self.focus.contains(&focus)
    }

    #[must_use]
    pub fn cue(&self, energy: EnergyLevel) -> Option<&'static str> {
        self.cues
            .iter()
            .find(|(e, _)| *e == energy)
            .map(|(_, cue)| *cue)
    }
}

#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, Serialize, Deserialize,
)]
pub enum Equipment {
    /// Bodyweight only.
    None,
    Dumbbells,
    ResistanceBands,
    Treadmill,
    ExerciseBike,
    GymMachine,
    Bench,
    LegPressMachine,
}

impl Equipment {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Equipment::None => "Bodyweight",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::Treadmill => "Treadmill",
            Equipment::ExerciseBike => "Exercise Bike",
            Equipment::GymMachine => "Gym Machine",
            Equipment::Bench => "Bench",
            Equipment::LegPressMachine => "Leg Press Machine",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, Serialize, Deserialize,
)]
pub enum MuscleFocus {
    LowerBody,
    UpperBody,
    Core,
    FullBody,
    Cardio,
}

impl MuscleFocus {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleFocus::LowerBody => "Lower Body",
            MuscleFocus::UpperBody => "Upper Body",
            MuscleFocus::Core => "Core",
            MuscleFocus::FullBody => "Full Body",
            MuscleFocus::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for MuscleFocus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Free-form repetition target like `12`, `8-12`, `30 sec` or `10 each side`.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepDescriptor(String);

impl RepDescriptor {
    pub fn new(reps: &str) -> Result<Self, RepDescriptorError> {
        let trimmed = reps.trim();

        if trimmed.is_empty() {
            return Err(RepDescriptorError::Empty);
        }

        let len = trimmed.len();

        if len > 32 {
            return Err(RepDescriptorError::TooLong(len));
        }

        Ok(RepDescriptor(trimmed.to_string()))
    }

    /// Estimate the working time of a single set.
    ///
    /// Time-based descriptors (`30 sec`, `45s`, `1 min`, `1 min 30 sec`,
    /// `1:30`) are taken literally, rep counts are multiplied by
    /// `seconds_per_rep`. A range uses its midpoint, rounded up. Unilateral
    /// descriptors (`each side`, `per leg`) count twice. Returns `None` if the
    /// descriptor contains no number. Large values saturate at `u32::MAX`.
    #[must_use]
    pub fn estimated_work_seconds(&self, seconds_per_rep: u32) -> Option<u32> {
        let text = self.0.to_lowercase();
        let numbers = numbers(&text);
        let first = *numbers.first()?;
        let range = text.contains('-') || text.contains(" to ");

        let base = match numbers.get(1) {
            Some(second) if range => first.saturating_add(*second).div_ceil(2),
            _ => first,
        };

        let seconds = if let Some(seconds) = clock_seconds(&text) {
            seconds
        } else if text.contains("min") {
            match numbers.get(1) {
                Some(second) if !range && text.contains("sec") => {
                    first.saturating_mul(60).saturating_add(*second)
                }
                _ => base.saturating_mul(60),
            }
        } else if text.contains("sec") || has_seconds_suffix(&text) {
            base
        } else {
            base.saturating_mul(seconds_per_rep)
        };

        let sides = ["each side", "per side", "each leg", "per leg", "each arm", "per arm"];

        if sides.iter().any(|s| text.contains(s)) {
            Some(seconds.saturating_mul(2))
        } else {
            Some(seconds)
        }
    }
}

/// Seconds of the first `m:ss` token, if any.
fn clock_seconds(text: &str) -> Option<u32> {
    text.split_whitespace().find_map(|token| {
        let (minutes, seconds) = token.split_once(':')?;
        let minutes = minutes.parse::<u32>().ok()?;
        let seconds = seconds.parse::<u32>().ok()?;
        Some(minutes.saturating_mul(60).saturating_add(seconds))
    })
}

fn numbers(text: &str) -> Vec<u32> {
    let mut result = vec![];
    let mut current: Option<u32> = None;

    for c in text.chars() {
        if let Some(d) = c.to_digit(10) {
            current = Some(current.unwrap_or(0).saturating_mul(10).saturating_add(d));
        } else if let Some(n) = current.take() {
            result.push(n);
        }
    }

    if let Some(n) = current {
        result.push(n);
    }

    result
}

fn has_seconds_suffix(text: &str) -> bool {
    text.split(|c: char| c.is_whitespace() || c == '-')
        .filter_map(|token| token.strip_suffix('s'))
        .any(|number| !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()))
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepDescriptorError {
    #[error("Reps must not be empty")]
    Empty,
    #[error("Reps must be 32 characters or fewer ({0} > 32)")]
    TooLong(usize),
}

#[derive(
    Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InstanceID(Uuid);

impl InstanceID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(crate::random_uuid(rng))
    }
}

impl From<Uuid> for InstanceID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for InstanceID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// An exercise as it appears inside a routine or a stored workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseInstance {
    pub id: InstanceID,
    /// Identifier of the catalog template this instance was copied from.
    pub template_id: Option<String>,
    pub name: String,
    pub equipment: Equipment,
    pub focus: Vec<MuscleFocus>,
    pub instructions: Option<String>,
    pub prescription: Prescription,
}

impl ExerciseInstance {
    #[must_use]
    pub fn estimated_seconds(&self, settings: &GeneratorSettings) -> u32 {
        self.prescription.estimated_seconds(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prescription {
    Sets {
        sets: u32,
        reps: RepDescriptor,
        rest_seconds: u32,
    },
    /// Duration-based activity without sets or reps.
    Timed { work_seconds: u32 },
}

impl Prescription {
    /// Time needed to perform the exercise including the rest after each set.
    #[must_use]
    pub fn estimated_seconds(&self, settings: &GeneratorSettings) -> u32 {
        match self {
            Prescription::Sets {
                sets,
                reps,
                rest_seconds,
            } => {
                let work = reps
                    .estimated_work_seconds(settings.seconds_per_rep)
                    .unwrap_or(settings.average_work_seconds)
                    .max(settings.min_work_seconds);
                sets.saturating_mul(work.saturating_add(*rest_seconds))
            }
            Prescription::Timed { work_seconds } => *work_seconds,
        }
    }
}

#[derive(
    Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CustomExerciseID(Uuid);

impl From<Uuid> for CustomExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for CustomExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// User-defined exercise for hand-built workouts.
///
/// Custom exercises share the shape of catalog templates but are never
/// offered to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomExercise {
    pub id: CustomExerciseID,
    pub name: Name,
    pub equipment: Equipment,
    pub focus: Vec<MuscleFocus>,
    pub instructions: Option<String>,
    pub sets: u32,
    pub reps: RepDescriptor,
    pub rest_seconds: u32,
}

impl CustomExercise {
    pub fn instantiate<R: Rng + ?Sized>(&self, rng: &mut R) -> ExerciseInstance {
        ExerciseInstance {
            id: InstanceID::random(rng),
            template_id: None,
            name: self.name.to_string(),
            equipment: self.equipment,
            focus: self.focus.clone(),
            instructions: self.instructions.clone(),
            prescription: Prescription::Sets {
                sets: self.sets,
                reps: self.reps.clone(),
                rest_seconds: self.rest_seconds,
            },
        }
    }
}
