//! The village aggregate and the day-advancement engine.

use tracing::{debug, info};

use crate::catalog::{Occupation, ProjectKind, Resource, Resources};
use crate::config::{MealTime, SimConfig};
use crate::error::{ConfigError, Rejection};
use crate::sim::{
    Action, Building, BuildingRegistry, ConstructionQueue, DayReport, Outcome, Project, ProjectId,
    ResourceLedger, Worker, WorkerId, WorkerRoster,
};

/// A whole village: stockpile, workers, construction, and buildings.
///
/// The village owns every sub-collection outright and is the only thing that
/// mutates them. All operations are synchronous and deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Village {
    config: SimConfig,
    ledger: ResourceLedger,
    roster: WorkerRoster,
    queue: ConstructionQueue,
    registry: BuildingRegistry,
    days_gone: u32,
    outcome: Option<Outcome>,
}

impl Default for Village {
    fn default() -> Self {
        Self::from_valid_config(SimConfig::default())
    }
}

impl Village {
    /// A village with the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A village built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the config fails validation.
    pub fn with_config(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimConfig) -> Self {
        let registry = BuildingRegistry::with_founding(&config.founding_buildings, &config.catalog);
        let mut ledger = ResourceLedger::new(config.starting_stock, config.catalog.base_yield);
        ledger.refresh_yields(config.catalog.base_yield, &registry);

        let mut village = Self {
            config,
            ledger,
            roster: WorkerRoster::new(),
            queue: ConstructionQueue::new(),
            registry,
            days_gone: 0,
            outcome: None,
        };
        village.outcome = village.judge();
        village
    }

    // ---------------------------------------------------------------------
    // Actions
    // ---------------------------------------------------------------------

    /// Hire a worker by occupation label. Returns `false`, leaving the village
    /// unchanged, if the label is unknown or the village is full.
    pub fn add_worker(&mut self, name: &str, occupation: &str) -> bool {
        let result = occupation
            .parse::<Occupation>()
            .and_then(|occupation| self.try_add_worker(name, occupation));
        accepted(result)
    }

    /// Hire a worker.
    ///
    /// # Errors
    ///
    /// [`Rejection::VillageFull`] if living workers already fill every slot,
    /// [`Rejection::GameOver`] once the game has ended.
    pub fn try_add_worker(
        &mut self,
        name: &str,
        occupation: Occupation,
    ) -> Result<WorkerId, Rejection> {
        self.ensure_running()?;
        if self.is_full() {
            return Err(Rejection::VillageFull {
                capacity: self.max_workers(),
            });
        }
        let id = self.roster.push(Worker::new(name, occupation));
        debug!(%id, name, %occupation, "worker added");
        Ok(id)
    }

    /// Queue a project by name. Returns `false`, leaving the village
    /// unchanged, if the name is unknown or the project is unaffordable.
    pub fn add_project(&mut self, name: &str) -> bool {
        let result = name
            .parse::<ProjectKind>()
            .and_then(|kind| self.try_add_project(kind));
        accepted(result)
    }

    /// Queue a project, paying its full cost now.
    ///
    /// # Errors
    ///
    /// [`Rejection::Unaffordable`] if wood or metal fall short,
    /// [`Rejection::GameOver`] once the game has ended.
    pub fn try_add_project(&mut self, kind: ProjectKind) -> Result<ProjectId, Rejection> {
        self.ensure_running()?;
        let blueprint = *self.config.catalog.blueprint(kind);
        if !self.ledger.spend(&blueprint.cost) {
            return Err(Rejection::Unaffordable {
                project: kind,
                cost: blueprint.cost,
                available: self.ledger.stock(),
            });
        }
        let id = self.queue.enqueue(kind, &blueprint);
        debug!(%id, %kind, cost = %blueprint.cost, days = blueprint.days, "project queued");
        Ok(id)
    }

    /// Pin the named builder to the oldest project without a builder.
    /// Returns `false` if the worker cannot be pinned.
    pub fn build(&mut self, worker_name: &str) -> bool {
        accepted(self.try_build(worker_name))
    }

    /// Pin the named builder to the oldest project without a builder.
    ///
    /// # Errors
    ///
    /// [`Rejection::UnknownWorker`], [`Rejection::WorkerDead`], or
    /// [`Rejection::NotABuilder`] if the worker cannot build;
    /// [`Rejection::NoOpenProject`] if every project already has a builder.
    pub fn try_build(&mut self, worker_name: &str) -> Result<ProjectId, Rejection> {
        self.ensure_running()?;
        let worker = self.builder_named(worker_name)?;
        self.queue.pin(worker, None)
    }

    /// Pin the named builder to a specific project.
    pub fn build_on(&mut self, worker_name: &str, project: ProjectId) -> bool {
        accepted(self.try_build_on(worker_name, project))
    }

    /// Pin the named builder to a specific project, displacing any builder
    /// already pinned there.
    ///
    /// # Errors
    ///
    /// As [`Village::try_build`], plus [`Rejection::UnknownProjectId`].
    pub fn try_build_on(
        &mut self,
        worker_name: &str,
        project: ProjectId,
    ) -> Result<ProjectId, Rejection> {
        self.ensure_running()?;
        let worker = self.builder_named(worker_name)?;
        self.queue.pin(worker, Some(project))
    }

    /// Apply one scripted action. Returns whether it was accepted; a day is
    /// accepted if it advanced the clock.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::AddWorker { name, occupation } => self.add_worker(name, occupation),
            Action::AddProject { name } => self.add_project(name),
            Action::Build { worker } => self.build(worker),
            Action::Day => self.day().advanced,
        }
    }

    /// Apply a whole script in order, returning how many actions were
    /// accepted.
    pub fn run(&mut self, script: &[Action]) -> usize {
        script.iter().filter(|action| self.apply(action)).count()
    }

    fn ensure_running(&self) -> Result<(), Rejection> {
        if self.outcome.is_some() {
            return Err(Rejection::GameOver);
        }
        Ok(())
    }

    fn builder_named(&self, name: &str) -> Result<WorkerId, Rejection> {
        let worker = self
            .roster
            .find_by_name(name)
            .ok_or_else(|| Rejection::UnknownWorker(name.to_owned()))?;
        if !worker.alive {
            return Err(Rejection::WorkerDead(name.to_owned()));
        }
        if worker.occupation != Occupation::Builder {
            return Err(Rejection::NotABuilder {
                name: name.to_owned(),
                occupation: worker.occupation,
            });
        }
        Ok(worker.id)
    }

    // ---------------------------------------------------------------------
    // Day engine
    // ---------------------------------------------------------------------

    /// Advance the simulation by one day.
    ///
    /// In order:
    /// 1. With no living workers the day passes idle: only the day counter
    ///    moves.
    /// 2. Producing workers add their yield to the stockpile.
    /// 3. Builders advance construction; finished projects become buildings
    ///    and their bonuses apply from the next day.
    /// 4. Every living worker eats, going hungry or starving if food runs
    ///    out. With [`MealTime::BeforeWork`] this step runs first instead.
    /// 5. The day counter moves.
    /// 6. The game ends in victory if a victory building stands, or in
    ///    defeat if every worker is dead.
    ///
    /// Once the game is over this is a no-op and the report has
    /// `advanced == false`.
    pub fn day(&mut self) -> DayReport {
        if let Some(outcome) = self.outcome {
            debug!(day = self.days_gone, ?outcome, "game over, day ignored");
            return DayReport {
                day: self.days_gone,
                advanced: false,
                outcome: Some(outcome),
                ..DayReport::default()
            };
        }

        if self.roster.living_count() == 0 {
            self.days_gone = self.days_gone.saturating_add(1);
            self.outcome = self.judge();
            debug!(day = self.days_gone, "no living workers, day passes idle");
            let mut report = DayReport::new(self.days_gone);
            report.outcome = self.outcome;
            return report;
        }

        let mut report = DayReport::new(self.days_gone.saturating_add(1));

        if self.config.meal_time == MealTime::BeforeWork {
            self.serve_meals(&mut report);
        }
        report.produced = self.ledger.produce(&self.roster.headcount());
        self.advance_construction(&mut report);
        if self.config.meal_time == MealTime::AfterWork {
            self.serve_meals(&mut report);
        }

        self.days_gone = report.day;
        self.outcome = self.judge();
        report.outcome = self.outcome;

        debug!(
            day = self.days_gone,
            produced = %report.produced,
            eaten = report.food_eaten,
            stock = %self.ledger.stock(),
            "day complete"
        );
        if let Some(outcome) = self.outcome {
            info!(day = self.days_gone, ?outcome, "game over");
        }
        report
    }

    fn advance_construction(&mut self, report: &mut DayReport) {
        let builders = self.roster.living_builders();
        let finished = self.queue.advance(self.config.builder_policy, &builders);
        if finished.is_empty() {
            return;
        }
        for project in finished {
            let effect = self.config.catalog.blueprint(project.kind).effect;
            self.registry.push(Building {
                kind: project.kind,
                effect,
                completed_on: report.day,
            });
            info!(day = report.day, id = %project.id, kind = %project.kind, "building completed");
            report.completed.push(project.kind);
        }
        self.ledger
            .refresh_yields(self.config.catalog.base_yield, &self.registry);
    }

    fn serve_meals(&mut self, report: &mut DayReport) {
        let meal = self.roster.serve_meals(
            &mut self.ledger,
            self.config.ration,
            self.config.starvation_days,
        );
        for &id in &meal.starved {
            self.queue.release(id);
            info!(day = report.day, %id, "worker starved");
        }
        report.food_eaten = report.food_eaten.saturating_add(meal.eaten);
        report.hungry.extend(meal.hungry);
        report.starved.extend(meal.starved);
    }

    fn judge(&self) -> Option<Outcome> {
        if self.registry.has_victory() {
            Some(Outcome::Victory)
        } else if self.roster.all_dead() {
            Some(Outcome::Defeat)
        } else {
            None
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Food in stock.
    #[must_use]
    pub const fn food(&self) -> u32 {
        self.ledger.amount(Resource::Food)
    }

    /// Wood in stock.
    #[must_use]
    pub const fn wood(&self) -> u32 {
        self.ledger.amount(Resource::Wood)
    }

    /// Metal in stock.
    #[must_use]
    pub const fn metal(&self) -> u32 {
        self.ledger.amount(Resource::Metal)
    }

    /// The whole stockpile.
    #[must_use]
    pub const fn stock(&self) -> Resources {
        self.ledger.stock()
    }

    /// Food one farmer gathers per day, bonuses included.
    #[must_use]
    pub const fn food_per_day(&self) -> u32 {
        self.ledger.yields().food
    }

    /// Wood one lumberjack gathers per day, bonuses included.
    #[must_use]
    pub const fn wood_per_day(&self) -> u32 {
        self.ledger.yields().wood
    }

    /// Metal one miner gathers per day, bonuses included.
    #[must_use]
    pub const fn metal_per_day(&self) -> u32 {
        self.ledger.yields().metal
    }

    /// What the current living workforce would gather tomorrow.
    #[must_use]
    pub fn daily_output(&self) -> Resources {
        self.ledger.daily_output(&self.roster.headcount())
    }

    /// Worker capacity: base plus every building's bonus.
    #[must_use]
    pub fn max_workers(&self) -> u32 {
        self.config
            .base_capacity
            .saturating_add(self.registry.capacity_bonus())
    }

    /// Days simulated so far.
    #[must_use]
    pub const fn days_gone(&self) -> u32 {
        self.days_gone
    }

    /// Every worker ever hired, dead or alive, in hiring order.
    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        self.roster.workers()
    }

    /// Projects under construction, oldest first.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        self.queue.projects()
    }

    /// Look up a queued project.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.queue.get(id)
    }

    /// Finished buildings, founding ones first.
    #[must_use]
    pub fn buildings(&self) -> &[Building] {
        self.registry.buildings()
    }

    /// Whether living workers fill every slot.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.roster.living_count() >= self.max_workers()
    }

    /// Whether the game has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// How the game ended, if it has.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The configuration this village runs on.
    #[must_use]
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The resource ledger.
    #[must_use]
    pub const fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// The worker roster.
    #[must_use]
    pub const fn roster(&self) -> &WorkerRoster {
        &self.roster
    }

    /// The construction queue.
    #[must_use]
    pub const fn queue(&self) -> &ConstructionQueue {
        &self.queue
    }

    /// The building registry.
    #[must_use]
    pub const fn registry(&self) -> &BuildingRegistry {
        &self.registry
    }

    // ---------------------------------------------------------------------
    // Direct state injection, for test harnesses
    // ---------------------------------------------------------------------

    /// Overwrite the food stock.
    pub fn set_food(&mut self, amount: u32) {
        self.ledger.set(Resource::Food, amount);
    }

    /// Overwrite the wood stock.
    pub fn set_wood(&mut self, amount: u32) {
        self.ledger.set(Resource::Wood, amount);
    }

    /// Overwrite the metal stock.
    pub fn set_metal(&mut self, amount: u32) {
        self.ledger.set(Resource::Metal, amount);
    }

    /// Replace the roster wholesale. Worker ids are reassigned and every
    /// builder pin is dropped. Capacity is not checked.
    ///
    /// The outcome is judged again, so a roster of only dead workers ends
    /// the game in defeat.
    pub fn set_workers(&mut self, workers: Vec<Worker>) {
        self.roster.replace(workers);
        self.queue.release_all();
        self.outcome = self.judge();
    }
}

fn accepted<T>(result: Result<T, Rejection>) -> bool {
    match result {
        Ok(_) => true,
        Err(rejection) => {
            debug!(%rejection, "action rejected");
            false
        }
    }
}
