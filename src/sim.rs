//! Village simulation layer.
//!
//! Implements the day-advancement engine on top of the catalog:
//! - Resource ledger (stockpile, per-worker yields)
//! - Worker roster (occupations, hunger, starvation)
//! - Construction queue (builder-days, completion)
//! - Building registry (capacity and yield bonuses, victory)
//! - The [`Village`] aggregate that owns and orders all of the above

mod action;
mod construction;
mod invariants;
mod ledger;
mod registry;
mod report;
mod roster;
mod village;

pub use action::Action;
pub use construction::{ConstructionQueue, Project, ProjectId};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use ledger::ResourceLedger;
pub use registry::{Building, BuildingRegistry};
pub use report::{DayReport, Outcome};
pub use roster::{Headcount, Worker, WorkerId, WorkerRoster};
pub use village::Village;
