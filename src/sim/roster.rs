//! Workers, their jobs, and the daily hunger rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Occupation, Resource};
use crate::sim::ResourceLedger;

/// Stable identifier for a worker within one village.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(pub u32);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// A single villager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    /// Assigned by the roster on insertion.
    pub id: WorkerId,
    /// Display name. Not required to be unique.
    pub name: String,
    /// What this worker does all day.
    pub occupation: Occupation,
    /// Dead workers stay on the roster but take no further part in the game.
    pub alive: bool,
    /// Whether the worker went without food at the last meal.
    pub hungry: bool,
    /// Consecutive meals missed.
    pub hungry_days: u32,
}

impl Worker {
    /// A healthy, fed worker. The id is replaced when the worker joins a
    /// roster.
    #[must_use]
    pub fn new(name: impl Into<String>, occupation: Occupation) -> Self {
        Self {
            id: WorkerId(0),
            name: name.into(),
            occupation,
            alive: true,
            hungry: false,
            hungry_days: 0,
        }
    }

    /// Whether the worker is alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether the worker missed the last meal.
    #[must_use]
    pub const fn is_hungry(&self) -> bool {
        self.hungry
    }

    fn eat(&mut self) {
        self.hungry = false;
        self.hungry_days = 0;
    }

    /// Miss a meal. Returns `true` if this meal was the last one the worker
    /// could miss.
    fn go_hungry(&mut self, starvation_days: u32) -> bool {
        self.hungry = true;
        self.hungry_days = self.hungry_days.saturating_add(1);
        if self.hungry_days >= starvation_days {
            self.alive = false;
        }
        !self.alive
    }
}

/// Living workers per occupation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headcount {
    /// Living farmers.
    pub farmers: u32,
    /// Living lumberjacks.
    pub lumberjacks: u32,
    /// Living miners.
    pub miners: u32,
    /// Living builders.
    pub builders: u32,
}

impl Headcount {
    /// Count for one occupation.
    #[must_use]
    pub const fn get(&self, occupation: Occupation) -> u32 {
        match occupation {
            Occupation::Farmer => self.farmers,
            Occupation::Lumberjack => self.lumberjacks,
            Occupation::Miner => self.miners,
            Occupation::Builder => self.builders,
        }
    }

    /// All living workers.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.farmers
            .saturating_add(self.lumberjacks)
            .saturating_add(self.miners)
            .saturating_add(self.builders)
    }

    fn slot(&mut self, occupation: Occupation) -> &mut u32 {
        match occupation {
            Occupation::Farmer => &mut self.farmers,
            Occupation::Lumberjack => &mut self.lumberjacks,
            Occupation::Miner => &mut self.miners,
            Occupation::Builder => &mut self.builders,
        }
    }
}

/// Result of one round of meals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Mealtime {
    /// Food actually taken from the stockpile.
    pub(crate) eaten: u32,
    /// Workers who missed the meal and survived it.
    pub(crate) hungry: Vec<WorkerId>,
    /// Workers who died of starvation at this meal.
    pub(crate) starved: Vec<WorkerId>,
}

/// All workers ever added, dead or alive, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerRoster {
    workers: Vec<Worker>,
    next_id: u32,
}

impl WorkerRoster {
    /// An empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            workers: Vec::new(),
            next_id: 0,
        }
    }

    /// Every worker, in insertion order.
    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Look a worker up by id.
    #[must_use]
    pub fn get(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Find a worker by name. A living match wins over a dead one; among
    /// equals, the earliest added wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Worker> {
        self.workers
            .iter()
            .find(|w| w.alive && w.name == name)
            .or_else(|| self.workers.iter().find(|w| w.name == name))
    }

    /// Whether the roster has no workers at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Living workers per occupation.
    #[must_use]
    pub fn headcount(&self) -> Headcount {
        let mut headcount = Headcount::default();
        for worker in self.living() {
            let slot = headcount.slot(worker.occupation);
            *slot = slot.saturating_add(1);
        }
        headcount
    }

    /// Number of living workers.
    #[must_use]
    pub fn living_count(&self) -> u32 {
        self.headcount().total()
    }

    /// Whether the roster has workers and every one of them is dead.
    #[must_use]
    pub fn all_dead(&self) -> bool {
        !self.workers.is_empty() && self.workers.iter().all(|w| !w.alive)
    }

    /// Living builders in insertion order.
    #[must_use]
    pub fn living_builders(&self) -> Vec<WorkerId> {
        self.living()
            .filter(|w| w.occupation == Occupation::Builder)
            .map(|w| w.id)
            .collect()
    }

    fn living(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(|w| w.alive)
    }

    pub(crate) fn push(&mut self, mut worker: Worker) -> WorkerId {
        let id = WorkerId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        worker.id = id;
        self.workers.push(worker);
        id
    }

    /// Replace every worker. Ids are reassigned in the new order.
    pub(crate) fn replace(&mut self, workers: Vec<Worker>) {
        self.workers.clear();
        self.next_id = 0;
        for worker in workers {
            self.push(worker);
        }
    }

    /// Each living worker, in insertion order, eats `ration` food from the
    /// ledger. A worker who cannot get a full ration takes nothing and goes
    /// hungry; one who reaches `starvation_days` consecutive hungry meals
    /// dies.
    pub(crate) fn serve_meals(
        &mut self,
        ledger: &mut ResourceLedger,
        ration: u32,
        starvation_days: u32,
    ) -> Mealtime {
        let mut meal = Mealtime::default();
        for worker in self.workers.iter_mut().filter(|w| w.alive) {
            if ledger.take(Resource::Food, ration) {
                meal.eaten = meal.eaten.saturating_add(ration);
                worker.eat();
            } else if worker.go_hungry(starvation_days) {
                meal.starved.push(worker.id);
            } else {
                meal.hungry.push(worker.id);
            }
        }
        meal
    }
}
