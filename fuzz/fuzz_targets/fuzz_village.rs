#![no_main]

use arbitrary::Arbitrary;
use hamlet::sim::check_invariants;
use hamlet::{BuilderPolicy, MealTime, Occupation, ProjectKind, SimConfig, Village};
use libfuzzer_sys::fuzz_target;

/// One fuzzed player action.
#[derive(Arbitrary, Debug)]
enum Step {
    Hire { name: u8, occupation: u8 },
    HireLabel { name: u8, label: String },
    Queue { project: u8 },
    QueueName { name: String },
    Build { name: u8 },
    BuildOn { name: u8, project: u32 },
    Day,
    SetStock { food: u16, wood: u16, metal: u16 },
}

/// Structured input for whole-game fuzzing.
#[derive(Arbitrary, Debug)]
struct VillageInput {
    one_per_project: bool,
    before_work: bool,
    /// Starvation threshold, capped to keep games short.
    starvation_days: u8,
    steps: Vec<Step>,
}

fuzz_target!(|input: VillageInput| {
    let config = SimConfig {
        builder_policy: if input.one_per_project {
            BuilderPolicy::OnePerProject
        } else {
            BuilderPolicy::Shared
        },
        meal_time: if input.before_work {
            MealTime::BeforeWork
        } else {
            MealTime::AfterWork
        },
        starvation_days: u32::from(input.starvation_days % 5) + 1,
        ..SimConfig::default()
    };
    let Ok(mut village) = Village::with_config(config) else {
        return;
    };

    // Cap steps to avoid timeouts
    for step in input.steps.iter().take(2_000) {
        let before = village.clone();
        match step {
            Step::Hire { name, occupation } => {
                let occupation = Occupation::ALL[usize::from(*occupation) % Occupation::ALL.len()];
                let _ = village.try_add_worker(&format!("W{}", name % 16), occupation);
            }
            Step::HireLabel { name, label } => {
                village.add_worker(&format!("W{}", name % 16), label);
            }
            Step::Queue { project } => {
                let kind = ProjectKind::ALL[usize::from(*project) % ProjectKind::ALL.len()];
                let _ = village.try_add_project(kind);
            }
            Step::QueueName { name } => {
                village.add_project(name);
            }
            Step::Build { name } => {
                village.build(&format!("W{}", name % 16));
            }
            Step::BuildOn { name, project } => {
                village.build_on(&format!("W{}", name % 16), hamlet::ProjectId(*project));
            }
            Step::Day => {
                village.day();
            }
            Step::SetStock { food, wood, metal } => {
                village.set_food(u32::from(*food));
                village.set_wood(u32::from(*wood));
                village.set_metal(u32::from(*metal));
            }
        }

        let violations = check_invariants(&village);
        assert!(violations.is_empty(), "{step:?} broke invariants: {violations:?}");

        // A finished game only changes through the stock setters.
        if before.is_game_over() && !matches!(step, Step::SetStock { .. }) {
            assert_eq!(village, before, "{step:?} changed a finished game");
        }
    }
});
