// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Hamlet: a deterministic village-management simulation engine.
//!
//! Workers with occupations gather food, wood, and metal each simulated day.
//! Wood and metal pay for construction projects; builders turn projects into
//! buildings that raise worker capacity or yields. Workers who go without food
//! for too long starve. The game ends in victory when a Castle stands and in
//! defeat when every worker has died.
//!
//! The engine is a pure function of its state and the sequence of actions
//! applied to it: there is no randomness, no I/O during simulation, and no
//! concurrency.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Village (sim::village)       │
//! ├──────────┬──────────┬───────────────┤
//! │  Ledger  │  Roster  │ Queue/Registry│
//! ├──────────┴──────────┴───────────────┤
//! │   Catalog + SimConfig (plain data)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use hamlet::Village;
//!
//! let mut village = Village::new();
//! assert!(village.add_worker("Amber", "farmer"));
//! assert!(village.add_worker("Brian", "lumberjack"));
//! assert!(village.add_worker("Kent", "miner"));
//! village.day();
//!
//! assert_eq!(village.food(), 12);
//! assert_eq!(village.wood(), 1);
//! assert_eq!(village.metal(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod sim;

pub use error::{ConfigError, Rejection};

// Re-export key types at crate root for convenience
pub use catalog::{Catalog, Occupation, ProjectKind, Resource, Resources};
pub use config::{BuilderPolicy, MealTime, SimConfig};
pub use sim::{Action, Building, DayReport, Outcome, Project, ProjectId, Village, Worker, WorkerId};
