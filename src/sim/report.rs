//! What happened during one simulated day.

use serde::{Deserialize, Serialize};

use crate::catalog::{ProjectKind, Resources};
use crate::sim::WorkerId;

/// How the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A victory building stands.
    Victory,
    /// Every worker has died.
    Defeat,
}

/// Summary of one call to [`Village::day`](crate::sim::Village::day).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// Days elapsed after this call.
    pub day: u32,
    /// False when the game was already over and nothing happened.
    pub advanced: bool,
    /// Resources gathered by workers.
    pub produced: Resources,
    /// Food taken from the stockpile at meals.
    pub food_eaten: u32,
    /// Buildings finished today, in queue order.
    pub completed: Vec<ProjectKind>,
    /// Workers who missed a meal and survived.
    pub hungry: Vec<WorkerId>,
    /// Workers who starved to death.
    pub starved: Vec<WorkerId>,
    /// Set on the day the game ends, and on every no-op day afterwards.
    pub outcome: Option<Outcome>,
}

impl DayReport {
    pub(crate) fn new(day: u32) -> Self {
        Self {
            day,
            advanced: true,
            ..Self::default()
        }
    }
}
