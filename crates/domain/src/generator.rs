use std::collections::BTreeSet;

use log::{debug, info};
use rand::Rng;

use crate::{
    Catalog, DurationBucket, EnergyLevel, Equipment, ExerciseInstance, ExerciseTemplate,
    GeneratedRoutine, GenerationError, GeneratorSettings, InstanceID, Intensity, KidDuration,
    MuscleFocus, Prescription, ProfileType, RepDescriptor, assemble, estimated_minutes,
    generate_for_child, resolve, sample,
};

/// Input of a generation call.
///
/// Young children use a separate set of parameters, so the request type
/// decides which generation path is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Standard(StandardRequest),
    Kid(KidRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardRequest {
    /// An empty set allows any equipment. Bodyweight exercises are always allowed.
    pub equipment: BTreeSet<Equipment>,
    pub duration: DurationBucket,
    pub intensity: Intensity,
    /// No focus means a full body routine.
    pub focus: Option<MuscleFocus>,
    pub profile: ProfileType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KidRequest {
    pub duration: KidDuration,
    pub energy: EnergyLevel,
}

/// Entry point of the workout generator.
///
/// The generator only reads the catalog and the settings. Concurrent
/// generation calls can share both.
///
/// The settings are expected to have passed [`GeneratorSettings::validate`].
/// Out-of-range values saturate instead of overflowing, but may produce
/// routines far from the requested duration.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    catalog: &'a Catalog,
    settings: &'a GeneratorSettings,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, settings: &'a GeneratorSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<GeneratedRoutine, GenerationError> {
        match request {
            GenerationRequest::Standard(standard) => self.generate_standard(standard, rng),
            GenerationRequest::Kid(kid) => {
                generate_for_child(self.catalog, self.settings, kid.duration, kid.energy, rng)
            }
        }
    }

    pub fn generate_adult_routine<R: Rng + ?Sized>(
        &self,
        equipment: &BTreeSet<Equipment>,
        duration: DurationBucket,
        intensity: Intensity,
        focus: Option<MuscleFocus>,
        profile: ProfileType,
        rng: &mut R,
    ) -> Result<GeneratedRoutine, GenerationError> {
        self.generate(
            &GenerationRequest::Standard(StandardRequest {
                equipment: equipment.clone(),
                duration,
                intensity,
                focus,
                profile,
            }),
            rng,
        )
    }

    pub fn generate_kid_routine<R: Rng + ?Sized>(
        &self,
        duration: KidDuration,
        energy: EnergyLevel,
        profile: ProfileType,
        rng: &mut R,
    ) -> Result<GeneratedRoutine, GenerationError> {
        if !profile.is_child() {
            return Err(GenerationError::ProfileMismatch(profile));
        }

        self.generate(
            &GenerationRequest::Kid(KidRequest { duration, energy }),
            rng,
        )
    }

    fn generate_standard<R: Rng + ?Sized>(
        &self,
        request: &StandardRequest,
        rng: &mut R,
    ) -> Result<GeneratedRoutine, GenerationError> {
        if request.profile.is_child() {
            return Err(GenerationError::ProfileMismatch(request.profile));
        }

        let constraints = resolve(request.duration, request.intensity, self.settings);

        debug!(
            "resolved {} exercises with {} sets and {} s rest for {} {} request",
            constraints.target_exercise_count,
            constraints.sets_per_exercise,
            constraints.rest_seconds,
            request.duration,
            request.intensity
        );

        let pool = self
            .catalog
            .templates_matching(&request.equipment, request.focus, false);
        let sample = sample(&pool, constraints.target_exercise_count, request.focus, rng)?;

        let exercises = sample
            .templates
            .iter()
            .map(|t| -> Result<ExerciseInstance, GenerationError> {
                let reps = RepDescriptor::new(t.reps)
                    .map_err(|_| GenerationError::InvalidTemplate(t.id.to_string()))?;
                Ok(instantiate(
                    t,
                    Prescription::Sets {
                        sets: constraints.sets_per_exercise,
                        reps,
                        rest_seconds: constraints.rest_seconds,
                    },
                    t.instructions,
                ))
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;

        let minutes = estimated_minutes(&exercises, self.settings);
        let routine = assemble(
            exercises,
            &GenerationRequest::Standard(request.clone()),
            minutes,
            sample.shortfall,
            rng,
        );

        info!(
            "generated \"{}\" with {} exercises ({} min)",
            routine.name,
            routine.exercises.len(),
            routine.estimated_minutes
        );

        Ok(routine)
    }
}

/// Copy a template into a routine. The identifier is assigned on assembly.
pub(crate) fn instantiate(
    template: &ExerciseTemplate,
    prescription: Prescription,
    instructions: Option<&str>,
) -> ExerciseInstance {
    ExerciseInstance {
        id: InstanceID::nil(),
        template_id: Some(template.id.to_string()),
        name: template.name.to_string(),
        equipment: template.equipment,
        focus: template.focus.to_vec(),
        instructions: instructions.map(str::to_string),
        prescription,
    }
}
