use derive_more::Deref;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    CreateError, CustomExercise, DeleteError, ExerciseInstance, GeneratorSettings, Name, ProfileID,
    ProfileType, ReadError, Shortfall, UpdateError, assembler::summary,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self, profile_id: ProfileID) -> Result<Vec<Workout>, ReadError>;
    async fn save_generated(
        &self,
        routine: GeneratedRoutine,
        profile_id: ProfileID,
    ) -> Result<Workout, CreateError>;
    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
    async fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self, profile_id: ProfileID) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
    async fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[derive(
    Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
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

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Result of a generation call.
///
/// The routine is not stored by the generator. The caller either saves it as
/// a [`Workout`] or discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRoutine {
    pub id: WorkoutID,
    pub name: Name,
    pub summary: String,
    pub exercises: Vec<ExerciseInstance>,
    /// Computed from the selected exercises, not taken from the request.
    pub estimated_minutes: u32,
    pub profile: ProfileType,
    pub shortfall: Option<Shortfall>,
}

impl GeneratedRoutine {
    #[must_use]
    pub fn into_workout(self, profile_id: ProfileID) -> Workout {
        Workout {
            id: self.id,
            profile_id,
            name: self.name,
            summary: self.summary,
            exercises: self.exercises,
            estimated_minutes: self.estimated_minutes,
            origin: WorkoutOrigin::Generated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutOrigin {
    Generated,
    Custom,
}

/// Stored workout, either hand-built or promoted from a generated routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutID,
    pub profile_id: ProfileID,
    pub name: Name,
    pub summary: String,
    pub exercises: Vec<ExerciseInstance>,
    pub estimated_minutes: u32,
    pub origin: WorkoutOrigin,
}

impl Workout {
    /// Build a hand-made workout from custom exercises.
    pub fn custom<R: Rng + ?Sized>(
        profile_id: ProfileID,
        name: Name,
        exercises: &[CustomExercise],
        settings: &GeneratorSettings,
        rng: &mut R,
    ) -> Self {
        let id = WorkoutID::random(rng);
        let exercises = exercises
            .iter()
            .map(|e| e.instantiate(rng))
            .collect::<Vec<_>>();

        Self {
            id,
            profile_id,
            name,
            summary: summary(&exercises, "exercise", "exercises"),
            estimated_minutes: estimated_minutes(&exercises, settings),
            exercises,
            origin: WorkoutOrigin::Custom,
        }
    }

    /// Recompute the estimate after the exercises have been edited.
    pub fn update_estimate(&mut self, settings: &GeneratorSettings) {
        self.estimated_minutes = estimated_minutes(&self.exercises, settings);
    }
}

/// Total time of the exercises in minutes, rounded up.
#[must_use]
pub fn estimated_minutes(exercises: &[ExerciseInstance], settings: &GeneratorSettings) -> u32 {
    exercises
        .iter()
        .map(|e| e.estimated_seconds(settings))
        .fold(0, u32::saturating_add)
        .div_ceil(60)
}
