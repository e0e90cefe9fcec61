use std::{collections::BTreeSet, fmt};

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::{
    Catalog, GeneratedRoutine, GenerationError, GenerationRequest, GeneratorSettings, KidRequest,
    Prescription, assemble, constraint::exercise_count, estimated_minutes, generator::instantiate,
    sample,
};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
pub enum KidDuration {
    Short,
    Medium,
    Long,
}

impl fmt::Display for KidDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                KidDuration::Short => "short",
                KidDuration::Medium => "medium",
                KidDuration::Long => "long",
            }
        )
    }
}

#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, Serialize, Deserialize,
)]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EnergyLevel::Low => "low",
                EnergyLevel::Medium => "medium",
                EnergyLevel::High => "high",
            }
        )
    }
}

/// Build a routine of playful timed activities for a young child.
///
/// Activities have no sets or reps. Each one lasts the work time of the
/// energy level and is described by its energy-specific cue.
pub fn generate_for_child<R: Rng + ?Sized>(
    catalog: &Catalog,
    settings: &GeneratorSettings,
    duration: KidDuration,
    energy: EnergyLevel,
    rng: &mut R,
) -> Result<GeneratedRoutine, GenerationError> {
    let work_seconds = settings.kid.work_seconds(energy);
    let count = exercise_count(
        f64::from(settings.kid.minutes(duration)) * 60.0,
        f64::from(work_seconds),
        settings,
    );

    debug!("resolved {count} activities of {work_seconds} s for {duration} {energy} energy");

    let pool = catalog.templates_matching(&BTreeSet::new(), None, true);
    let sample = sample(&pool, count, None, rng)?;

    let activities = sample
        .templates
        .iter()
        .map(|t| {
            instantiate(
                t,
                Prescription::Timed { work_seconds },
                t.cue(energy).or(t.instructions),
            )
        })
        .collect::<Vec<_>>();

    let minutes = estimated_minutes(&activities, settings);
    let routine = assemble(
        activities,
        &GenerationRequest::Kid(KidRequest { duration, energy }),
        minutes,
        sample.shortfall,
        rng,
    );

    info!(
        "generated \"{}\" with {} activities ({} min)",
        routine.name,
        routine.exercises.len(),
        routine.estimated_minutes
    );

    Ok(routine)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;
    use crate::{Equipment, ExerciseTemplate, MuscleFocus, ProfileType, Shortfall};

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2024)]
    fn test_generate_for_child_short_high(#[case] seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let routine = generate_for_child(
            &Catalog::default(),
            &GeneratorSettings::default(),
            KidDuration::Short,
            EnergyLevel::High,
            &mut rng,
        )
        .unwrap();
        assert!((4..=6).contains(&routine.exercises.len()));
        for activity in &routine.exercises {
            assert_eq!(activity.equipment, Equipment::None);
            assert_eq!(
                activity.prescription,
                Prescription::Timed { work_seconds: 60 }
            );
            assert!(activity.instructions.is_some());
        }
        assert_eq!(routine.profile, ProfileType::Child);
        assert_eq!(routine.estimated_minutes, 5);
        assert_eq!(routine.shortfall, None);
    }

    #[rstest]
    #[case(KidDuration::Short, EnergyLevel::Low, 3)]
    #[case(KidDuration::Medium, EnergyLevel::Medium, 8)]
    #[case(KidDuration::Long, EnergyLevel::Low, 10)]
    #[case(KidDuration::Long, EnergyLevel::High, 12)]
    fn test_generate_for_child_count(
        #[case] duration: KidDuration,
        #[case] energy: EnergyLevel,
        #[case] count: usize,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let routine = generate_for_child(
            &Catalog::default(),
            &GeneratorSettings::default(),
            duration,
            energy,
            &mut rng,
        )
        .unwrap();
        assert_eq!(routine.exercises.len(), count);
        let templates = routine
            .exercises
            .iter()
            .map(|a| a.template_id.clone())
            .collect::<HashSet<_>>();
        assert_eq!(templates.len(), count);
    }

    #[test]
    fn test_generate_for_child_uses_energy_cue() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let catalog = Catalog::default();
        let routine = generate_for_child(
            &catalog,
            &GeneratorSettings::default(),
            KidDuration::Short,
            EnergyLevel::Low,
            &mut rng,
        )
        .unwrap();
        let pool = catalog.templates_matching(&BTreeSet::new(), None, true);
        for activity in &routine.exercises {
            let template = pool
                .iter()
                .find(|t| Some(t.id.to_string()) == activity.template_id)
                .unwrap();
            assert_eq!(
                activity.instructions.as_deref(),
                template.cue(EnergyLevel::Low)
            );
        }
    }

    #[test]
    fn test_generate_for_child_shortfall() {
        let catalog = Catalog::new([ExerciseTemplate {
            id: "hop",
            name: "Hop",
            equipment: Equipment::None,
            focus: &[MuscleFocus::Cardio],
            instructions: Some("Hop on the spot."),
            sets: 1,
            reps: "60 sec",
            rest_seconds: 0,
            kid_friendly: true,
            cues: &[],
        }]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let routine = generate_for_child(
            &catalog,
            &GeneratorSettings::default(),
            KidDuration::Short,
            EnergyLevel::High,
            &mut rng,
        )
        .unwrap();
        assert_eq!(routine.exercises.len(), 1);
        assert_eq!(
            routine.exercises[0].instructions.as_deref(),
            Some("Hop on the spot.")
        );
        assert_eq!(
            routine.shortfall,
            Some(Shortfall {
                requested: 5,
                available: 1
            })
        );
    }

    #[test]
    fn test_generate_for_child_unvalidated_settings() {
        let mut settings = GeneratorSettings::default();
        settings.kid.long_minutes = u32::MAX;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let routine = generate_for_child(
            &Catalog::default(),
            &settings,
            KidDuration::Long,
            EnergyLevel::Medium,
            &mut rng,
        )
        .unwrap();
        assert_eq!(routine.exercises.len(), settings.max_exercises);
    }

    #[test]
    fn test_generate_for_child_empty_catalog() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            generate_for_child(
                &Catalog::new([]),
                &GeneratorSettings::default(),
                KidDuration::Medium,
                EnergyLevel::Medium,
                &mut rng,
            ),
            Err(GenerationError::EmptyCatalog)
        );
    }
}
