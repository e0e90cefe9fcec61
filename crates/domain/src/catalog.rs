use std::collections::BTreeSet;

use crate::{EnergyLevel, Equipment, ExerciseTemplate, MuscleFocus};

/// Read-only collection of exercise templates.
///
/// The catalog is split into the adult/teen exercises and the kid activities.
/// A query only ever returns templates from one of the two parts.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<ExerciseTemplate>,
    activities: Vec<ExerciseTemplate>,
}

impl Catalog {
    /// Build a catalog from arbitrary templates, partitioned by their kid-friendly flag.
    #[must_use]
    pub fn new(templates: impl IntoIterator<Item = ExerciseTemplate>) -> Self {
        let (activities, exercises): (Vec<_>, Vec<_>) =
            templates.into_iter().partition(|t| t.kid_friendly);
        Self {
            exercises,
            activities,
        }
    }

    #[must_use]
    pub fn templates_matching(
        &self,
        equipment: &BTreeSet<Equipment>,
        focus: Option<MuscleFocus>,
        kid_friendly: bool,
    ) -> Vec<&ExerciseTemplate> {
        let templates = if kid_friendly {
            &self.activities
        } else {
            &self.exercises
        };
        templates
            .iter()
            .filter(|t| {
                equipment.is_empty()
                    || t.equipment == Equipment::None
                    || equipment.contains(&t.equipment)
            })
            .filter(|t| match focus {
                None | Some(MuscleFocus::FullBody) => true,
                Some(focus) => t.has_focus(focus),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len() + self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(EXERCISES.iter().chain(ACTIVITIES.iter()).cloned())
    }
}

pub(crate) static EXERCISES: [ExerciseTemplate; 38] = [
    ExerciseTemplate {
        id: "band-bicep-curl",
        name: "Band Bicep Curl",
        equipment: Equipment::ResistanceBands,
        focus: &[MuscleFocus::UpperBody],
        instructions: Some("Stand on the band and curl the handles to your shoulders."),
        sets: 3,
        reps: "12",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "band-face-pull",
        name: "Band Face Pull",
        equipment: Equipment::ResistanceBands,
        focus: &[MuscleFocus::UpperBody],
        instructions: Some("Anchor the band at head height and pull it towards your face."),
        sets: 3,
        reps: "15",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "band-pull-apart",
        name: "Band Pull Apart",
        equipment: Equipment::ResistanceBands,
        focus: &[MuscleFocus::UpperBody],
        instructions: None,
        sets: 3,
        reps: "15",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "band-squat",
        name: "Band Squat",
        equipment: Equipment::ResistanceBands,
        focus: &[MuscleFocus::LowerBody],
        instructions: Some("Stand on the band with the handles at your shoulders and squat."),
        sets: 3,
        reps: "12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "bench-dip",
        name: "Bench Dip",
        equipment: Equipment::Bench,
        focus: &[MuscleFocus::UpperBody],
        instructions: Some("Lower your hips in front of the bench by bending your elbows."),
        sets: 3,
        reps: "10-12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "bicycle-crunch",
        name: "Bicycle Crunch",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Core],
        instructions: None,
        sets: 3,
        reps: "20",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "bike-intervals",
        name: "Bike Intervals",
        equipment: Equipment::ExerciseBike,
        focus: &[MuscleFocus::Cardio],
        instructions: Some("Alternate a hard sprint with easy pedalling."),
        sets: 4,
        reps: "30 sec",
        rest_seconds: 30,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "bike-steady-ride",
        name: "Bike Steady Ride",
        equipment: Equipment::ExerciseBike,
        focus: &[MuscleFocus::Cardio, MuscleFocus::LowerBody],
        instructions: None,
        sets: 2,
        reps: "1 min",
        rest_seconds: 30,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "bird-dog",
        name: "Bird Dog",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Core, MuscleFocus::LowerBody],
        instructions: Some("Extend the opposite arm and leg from all fours."),
        sets: 3,
        reps: "10 each side",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "bodyweight-squat",
        name: "Bodyweight Squat",
        equipment: Equipment::None,
        focus: &[MuscleFocus::LowerBody],
        instructions: None,
        sets: 3,
        reps: "15",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "burpee",
        name: "Burpee",
        equipment: Equipment::None,
        focus: &[MuscleFocus::FullBody, MuscleFocus::Cardio],
        instructions: Some("Squat, kick back to a plank, return and jump."),
        sets: 3,
        reps: "10",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "chest-press-machine",
        name: "Chest Press Machine",
        equipment: Equipment::GymMachine,
        focus: &[MuscleFocus::UpperBody],
        instructions: None,
        sets: 3,
        reps: "10-12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "dead-bug",
        name: "Dead Bug",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Core],
        instructions: None,
        sets: 3,
        reps: "10 each side",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "dumbbell-bent-over-row",
        name: "Dumbbell Bent-Over Row",
        equipment: Equipment::Dumbbells,
        focus: &[MuscleFocus::UpperBody],
        instructions: Some("Hinge at the hips and row the weights to your ribs."),
        sets: 3,
        reps: "10-12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "dumbbell-floor-press",
        name: "Dumbbell Floor Press",
        equipment: Equipment::Dumbbells,
        focus: &[MuscleFocus::UpperBody],
        instructions: None,
        sets: 3,
        reps: "10",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "dumbbell-goblet-squat",
        name: "Dumbbell Goblet Squat",
        equipment: Equipment::Dumbbells,
        focus: &[MuscleFocus::LowerBody],
        instructions: Some("Hold one dumbbell at your chest and squat between your knees."),
        sets: 3,
        reps: "12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "dumbbell-lunge",
        name: "Dumbbell Lunge",
        equipment: Equipment::Dumbbells,
        focus: &[MuscleFocus::LowerBody],
        instructions: None,
        sets: 3,
        reps: "10 each leg",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "dumbbell-romanian-deadlift",
        name: "Dumbbell Romanian Deadlift",
        equipment: Equipment::Dumbbells,
        focus: &[MuscleFocus::LowerBody],
        instructions: Some("Keep a flat back and push the hips back."),
        sets: 3,
        reps: "10-12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "dumbbell-russian-twist",
        name: "Dumbbell Russian Twist",
        equipment: Equipment::Dumbbells,
        focus: &[MuscleFocus::Core],
        instructions: None,
        sets: 3,
        reps: "20",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "dumbbell-shoulder-press",
        name: "Dumbbell Shoulder Press",
        equipment: Equipment::Dumbbells,
        focus: &[MuscleFocus::UpperBody],
        instructions: None,
        sets: 3,
        reps: "10",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "dumbbell-thruster",
        name: "Dumbbell Thruster",
        equipment: Equipment::Dumbbells,
        focus: &[MuscleFocus::FullBody],
        instructions: Some("Front squat and drive the weights overhead in one motion."),
        sets: 3,
        reps: "10",
        rest_seconds: 75,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "glute-bridge",
        name: "Glute Bridge",
        equipment: Equipment::None,
        focus: &[MuscleFocus::LowerBody, MuscleFocus::Core],
        instructions: None,
        sets: 3,
        reps: "15",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "incline-push-up",
        name: "Incline Push-Up",
        equipment: Equipment::Bench,
        focus: &[MuscleFocus::UpperBody],
        instructions: Some("Hands on the bench, body in one line."),
        sets: 3,
        reps: "12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "jumping-jacks",
        name: "Jumping Jacks",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Cardio, MuscleFocus::FullBody],
        instructions: None,
        sets: 3,
        reps: "45 sec",
        rest_seconds: 30,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "lat-pulldown-machine",
        name: "Lat Pulldown Machine",
        equipment: Equipment::GymMachine,
        focus: &[MuscleFocus::UpperBody],
        instructions: None,
        sets: 3,
        reps: "10-12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "leg-extension-machine",
        name: "Leg Extension Machine",
        equipment: Equipment::GymMachine,
        focus: &[MuscleFocus::LowerBody],
        instructions: None,
        sets: 3,
        reps: "12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "leg-press",
        name: "Leg Press",
        equipment: Equipment::LegPressMachine,
        focus: &[MuscleFocus::LowerBody],
        instructions: Some("Lower the sled until your knees reach ninety degrees."),
        sets: 3,
        reps: "10-12",
        rest_seconds: 90,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "leg-press-calf-raise",
        name: "Leg Press Calf Raise",
        equipment: Equipment::LegPressMachine,
        focus: &[MuscleFocus::LowerBody],
        instructions: None,
        sets: 3,
        reps: "15",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "mountain-climber",
        name: "Mountain Climber",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Core, MuscleFocus::Cardio],
        instructions: None,
        sets: 3,
        reps: "30 sec",
        rest_seconds: 30,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "plank",
        name: "Plank",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Core],
        instructions: Some("Hold a straight line from head to heels."),
        sets: 3,
        reps: "45 sec",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "push-up",
        name: "Push-Up",
        equipment: Equipment::None,
        focus: &[MuscleFocus::UpperBody],
        instructions: None,
        sets: 3,
        reps: "10-15",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "reverse-lunge",
        name: "Reverse Lunge",
        equipment: Equipment::None,
        focus: &[MuscleFocus::LowerBody],
        instructions: None,
        sets: 3,
        reps: "10 each leg",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "seated-row-machine",
        name: "Seated Row Machine",
        equipment: Equipment::GymMachine,
        focus: &[MuscleFocus::UpperBody],
        instructions: None,
        sets: 3,
        reps: "10-12",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "side-plank",
        name: "Side Plank",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Core],
        instructions: None,
        sets: 3,
        reps: "30 sec each side",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "step-up",
        name: "Step-Up",
        equipment: Equipment::Bench,
        focus: &[MuscleFocus::LowerBody],
        instructions: Some("Drive through the heel of the leg on the bench."),
        sets: 3,
        reps: "10 each leg",
        rest_seconds: 60,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "treadmill-incline-walk",
        name: "Treadmill Incline Walk",
        equipment: Equipment::Treadmill,
        focus: &[MuscleFocus::Cardio, MuscleFocus::LowerBody],
        instructions: None,
        sets: 2,
        reps: "1 min",
        rest_seconds: 30,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "treadmill-sprint",
        name: "Treadmill Sprint",
        equipment: Equipment::Treadmill,
        focus: &[MuscleFocus::Cardio],
        instructions: Some("Sprint, then straddle the belt to recover."),
        sets: 4,
        reps: "30 sec",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
    ExerciseTemplate {
        id: "wall-sit",
        name: "Wall Sit",
        equipment: Equipment::None,
        focus: &[MuscleFocus::LowerBody],
        instructions: None,
        sets: 3,
        reps: "45 sec",
        rest_seconds: 45,
        kid_friendly: false,
        cues: &[],
    },
];

pub(crate) static ACTIVITIES: [ExerciseTemplate; 14] = [
    ExerciseTemplate {
        id: "bear-crawl",
        name: "Bear Crawl",
        equipment: Equipment::None,
        focus: &[MuscleFocus::FullBody],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Creep slowly like a sleepy bear."),
            (EnergyLevel::Medium, "Walk on hands and feet like a bear."),
            (EnergyLevel::High, "Race across the room like a hungry bear!"),
        ],
    },
    ExerciseTemplate {
        id: "bunny-hops",
        name: "Bunny Hops",
        equipment: Equipment::None,
        focus: &[MuscleFocus::LowerBody, MuscleFocus::Cardio],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Take tiny quiet hops."),
            (EnergyLevel::Medium, "Hop around like a bunny."),
            (EnergyLevel::High, "Hop as fast as a bunny running from a fox!"),
        ],
    },
    ExerciseTemplate {
        id: "crab-walk",
        name: "Crab Walk",
        equipment: Equipment::None,
        focus: &[MuscleFocus::UpperBody],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Walk slowly backwards like a crab."),
            (EnergyLevel::Medium, "Scuttle sideways like a crab."),
            (EnergyLevel::High, "Scuttle super fast to your hiding rock!"),
        ],
    },
    ExerciseTemplate {
        id: "dance-party",
        name: "Dance Party",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Cardio],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Sway slowly to the music."),
            (EnergyLevel::Medium, "Dance to your favourite song."),
            (EnergyLevel::High, "Dance as wildly as you can!"),
        ],
    },
    ExerciseTemplate {
        id: "flamingo-balance",
        name: "Flamingo Balance",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Core],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Stand on one leg and breathe slowly."),
            (EnergyLevel::Medium, "Stand on one leg and flap your wings."),
            (EnergyLevel::High, "Switch legs every time someone claps!"),
        ],
    },
    ExerciseTemplate {
        id: "freeze-dance",
        name: "Freeze Dance",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Cardio, MuscleFocus::FullBody],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Move slowly and freeze like a statue."),
            (EnergyLevel::Medium, "Dance and freeze when the music stops."),
            (EnergyLevel::High, "Dance fast and freeze in a funny pose!"),
        ],
    },
    ExerciseTemplate {
        id: "frog-jumps",
        name: "Frog Jumps",
        equipment: Equipment::None,
        focus: &[MuscleFocus::LowerBody],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Squat low and take small frog hops."),
            (EnergyLevel::Medium, "Jump from lily pad to lily pad."),
            (EnergyLevel::High, "Leap as far as a champion frog!"),
        ],
    },
    ExerciseTemplate {
        id: "giant-steps",
        name: "Giant Steps",
        equipment: Equipment::None,
        focus: &[MuscleFocus::LowerBody],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Take slow giant steps across the room."),
            (EnergyLevel::Medium, "Stomp like a giant."),
            (EnergyLevel::High, "Stomp fast like a giant chasing a dragon!"),
        ],
    },
    ExerciseTemplate {
        id: "inchworm",
        name: "Inchworm",
        equipment: Equipment::None,
        focus: &[MuscleFocus::FullBody],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Walk your hands out slowly like a tiny worm."),
            (EnergyLevel::Medium, "Walk your hands out and your feet in."),
            (EnergyLevel::High, "Inch along as quickly as you can!"),
        ],
    },
    ExerciseTemplate {
        id: "log-roll",
        name: "Log Roll",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Core],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Roll slowly like a log on a gentle hill."),
            (EnergyLevel::Medium, "Roll across the mat and back."),
            (EnergyLevel::High, "Roll quickly down the big hill!"),
        ],
    },
    ExerciseTemplate {
        id: "rocket-jumps",
        name: "Rocket Jumps",
        equipment: Equipment::None,
        focus: &[MuscleFocus::LowerBody, MuscleFocus::Cardio],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Crouch, count down and float up."),
            (EnergyLevel::Medium, "Count down and blast off high."),
            (EnergyLevel::High, "Blast off again and again!"),
        ],
    },
    ExerciseTemplate {
        id: "starfish-jumps",
        name: "Starfish Jumps",
        equipment: Equipment::None,
        focus: &[MuscleFocus::FullBody, MuscleFocus::Cardio],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Stretch out wide like a starfish."),
            (EnergyLevel::Medium, "Jump out wide like a starfish."),
            (EnergyLevel::High, "Jump out wide as fast as you can!"),
        ],
    },
    ExerciseTemplate {
        id: "superhero-flight",
        name: "Superhero Flight",
        equipment: Equipment::None,
        focus: &[MuscleFocus::Core],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Lie on your tummy and float like a hero."),
            (EnergyLevel::Medium, "Lift your arms and legs and fly."),
            (EnergyLevel::High, "Fly fast to save the day!"),
        ],
    },
    ExerciseTemplate {
        id: "windmill-arms",
        name: "Windmill Arms",
        equipment: Equipment::None,
        focus: &[MuscleFocus::UpperBody],
        instructions: None,
        sets: 1,
        reps: "60 sec",
        rest_seconds: 0,
        kid_friendly: true,
        cues: &[
            (EnergyLevel::Low, "Turn your arms in slow big circles."),
            (EnergyLevel::Medium, "Spin your arms like a windmill."),
            (EnergyLevel::High, "Spin your arms like a windmill in a storm!"),
        ],
    },
];
