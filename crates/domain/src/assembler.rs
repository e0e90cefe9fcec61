use std::collections::BTreeSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    EnergyLevel, Equipment, ExerciseInstance, GeneratedRoutine, GenerationRequest, InstanceID,
    MuscleFocus, Name, ProfileType, Shortfall, WorkoutID,
};

const THEMES: [(EnergyLevel, &[&str]); 3] = [
    (
        EnergyLevel::Low,
        &["Sleepy Animal Stretch", "Quiet Forest Walk", "Moonlight Moves"],
    ),
    (
        EnergyLevel::Medium,
        &["Jungle Adventure", "Animal Parade", "Backyard Explorer"],
    ),
    (
        EnergyLevel::High,
        &["Superhero Training", "Rocket Power Hour", "Wild Safari Dash"],
    ),
];

/// Package selected exercises into a routine with fresh identifiers.
pub fn assemble<R: Rng + ?Sized>(
    mut exercises: Vec<ExerciseInstance>,
    request: &GenerationRequest,
    estimated_minutes: u32,
    shortfall: Option<Shortfall>,
    rng: &mut R,
) -> GeneratedRoutine {
    let (name, summary, profile) = match request {
        GenerationRequest::Standard(request) => (
            format!(
                "{} - {} Intensity",
                request.focus.unwrap_or(MuscleFocus::FullBody),
                request.intensity.name()
            ),
            summary(&exercises, "exercise", "exercises"),
            request.profile,
        ),
        GenerationRequest::Kid(request) => (
            theme(request.energy, rng).to_string(),
            summary(&exercises, "activity", "activities"),
            ProfileType::Child,
        ),
    };

    let id = WorkoutID::random(rng);

    for exercise in &mut exercises {
        exercise.id = InstanceID::random(rng);
    }

    GeneratedRoutine {
        id,
        name: Name::generated(&name),
        summary,
        exercises,
        estimated_minutes,
        profile,
        shortfall,
    }
}

fn theme<R: Rng + ?Sized>(energy: EnergyLevel, rng: &mut R) -> &'static str {
    THEMES
        .iter()
        .find(|(e, _)| *e == energy)
        .and_then(|(_, names)| names.choose(rng))
        .copied()
        .unwrap_or("Playtime")
}

pub(crate) fn summary(exercises: &[ExerciseInstance], singular: &str, plural: &str) -> String {
    let equipment = exercises
        .iter()
        .map(|e| e.equipment)
        .collect::<BTreeSet<Equipment>>()
        .into_iter()
        .map(Equipment::name)
        .collect::<Vec<_>>();

    let noun = if exercises.len() == 1 { singular } else { plural };

    match equipment.split_last() {
        None => format!("{} {noun}", exercises.len()),
        Some((last, [])) => format!("{} {noun} using {last}", exercises.len()),
        Some((last, rest)) => format!(
            "{} {noun} using {} and {last}",
            exercises.len(),
            rest.join(", ")
        ),
    }
}
