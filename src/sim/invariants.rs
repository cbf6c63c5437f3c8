//! Village invariants - sanity checks that detect engine bugs.
//!
//! A village driven only through its actions and [`Village::day`] should
//! never violate these. The `set_*` seeding methods bypass the rules and can,
//! for example, put more living workers on the roster than there are slots.

use crate::catalog::Occupation;
use crate::sim::{Outcome, Village};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all village invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(village: &Village) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut violated = |message: String| violations.push(InvariantViolation { message });

    let living = village.roster().living_count();
    if living > village.max_workers() {
        violated(format!(
            "{living} living workers exceed capacity {}",
            village.max_workers()
        ));
    }

    for worker in village.workers() {
        if worker.alive && worker.hungry_days >= village.config().starvation_days {
            violated(format!(
                "worker {} is alive after {} hungry days",
                worker.id, worker.hungry_days
            ));
        }
        if worker.hungry != (worker.hungry_days > 0) {
            violated(format!(
                "worker {} hungry flag disagrees with {} hungry days",
                worker.id, worker.hungry_days
            ));
        }
    }

    for project in village.projects() {
        if project.days_left == 0 {
            violated(format!("finished project {} is still queued", project.id));
        }
        if let Some(builder) = project.builder {
            match village.roster().get(builder) {
                Some(worker) if !worker.alive => violated(format!(
                    "project {} is pinned to dead worker {builder}",
                    project.id
                )),
                Some(worker) if worker.occupation != Occupation::Builder => violated(format!(
                    "project {} is pinned to {builder}, a {}",
                    project.id, worker.occupation
                )),
                Some(_) => {}
                None => violated(format!(
                    "project {} is pinned to unknown worker {builder}",
                    project.id
                )),
            }
        }
        let pins = village
            .projects()
            .iter()
            .filter(|p| p.builder.is_some() && p.builder == project.builder)
            .count();
        if pins > 1 {
            violated(format!(
                "project {} shares its builder with another project",
                project.id
            ));
        }
    }

    let victory = village.registry().has_victory();
    if victory != (village.outcome() == Some(Outcome::Victory)) {
        violated(format!(
            "victory building present: {victory}, outcome: {:?}",
            village.outcome()
        ));
    }
    if village.outcome() == Some(Outcome::Defeat) && !village.roster().all_dead() {
        violated("defeat recorded while workers live".to_owned());
    }
    if village.roster().all_dead() && village.outcome().is_none() {
        violated("every worker is dead but the game is not over".to_owned());
    }

    violations
}

/// Assert all village invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(village: &Village) {
    let violations = check_invariants(village);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Village invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_village: &Village) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Worker;

    fn busy_village() -> Village {
        let mut village = Village::new();
        village.set_wood(20);
        village.set_metal(10);
        village.add_worker("Amber", "farmer");
        village.add_worker("Bob", "builder");
        village.add_project("House");
        village.add_project("Quarry");
        village.build("Bob");
        village.day();
        village
    }

    #[test]
    fn test_valid_village_passes() {
        assert!(check_invariants(&busy_village()).is_empty());
    }

    #[test]
    fn test_overfull_roster_detected() {
        let mut village = Village::new();
        village.set_workers(vec![Worker::new("Crowd", Occupation::Farmer); 7]);

        let violations = check_invariants(&village);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("exceed capacity"));
    }

    #[test]
    fn test_inconsistent_hunger_detected() {
        let mut village = Village::new();
        let mut worker = Worker::new("Odd", Occupation::Miner);
        worker.hungry = true;
        village.set_workers(vec![worker]);

        let violations = check_invariants(&village);
        assert!(violations[0].message.contains("hungry flag"));
    }

    #[test]
    fn test_clean_after_starvation() {
        let mut village = Village::new();
        village.add_worker("Kent", "miner");
        village.add_worker("Bob", "builder");
        village.set_wood(5);
        village.add_project("House");
        village.build("Bob");
        village.set_food(0);
        village.day();
        village.day();

        assert!(village.is_game_over());
        assert!(check_invariants(&village).is_empty());
    }

    #[test]
    fn test_clean_after_dead_roster_seeded() {
        let mut dead = Worker::new("Ghost", Occupation::Miner);
        dead.alive = false;
        dead.hungry = true;
        dead.hungry_days = 2;
        let mut village = Village::new();
        village.set_workers(vec![dead; 2]);

        assert_eq!(village.outcome(), Some(Outcome::Defeat));
        assert!(check_invariants(&village).is_empty());
    }

    #[test]
    #[should_panic(expected = "exceed capacity")]
    #[cfg(debug_assertions)]
    fn test_assert_invariants_panics() {
        let mut village = Village::new();
        village.set_workers(vec![Worker::new("Crowd", Occupation::Farmer); 7]);
        assert_invariants(&village);
    }
}
