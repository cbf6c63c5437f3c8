//! Error types for village actions and configuration loading.

use std::io;
use std::path::PathBuf;

use crate::catalog::{Cost, Occupation, ProjectKind, Resources};
use crate::sim::ProjectId;

/// Why the village refused an action.
///
/// Refusals are ordinary game outcomes, not faults: the village is left
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The occupation label is not one of farmer, lumberjack, miner, builder.
    #[error("unknown occupation: {0:?}")]
    UnknownOccupation(String),

    /// The project name is not in the catalog.
    #[error("unknown project: {0:?}")]
    UnknownProject(String),

    /// Every worker slot is taken by a living worker.
    #[error("village is full ({capacity} workers)")]
    VillageFull {
        /// Current maximum number of workers.
        capacity: u32,
    },

    /// The stockpile does not cover the project's cost.
    #[error("cannot afford {project}: needs {cost}, have {available}")]
    Unaffordable {
        /// The requested project.
        project: ProjectKind,
        /// Its full cost.
        cost: Cost,
        /// The stockpile at the time of the request.
        available: Resources,
    },

    /// No worker has this name.
    #[error("no worker named {0:?}")]
    UnknownWorker(String),

    /// The named worker exists but cannot build.
    #[error("{name} is a {occupation}, not a builder")]
    NotABuilder {
        /// Worker name.
        name: String,
        /// Their actual occupation.
        occupation: Occupation,
    },

    /// The named worker has starved.
    #[error("{0} is dead")]
    WorkerDead(String),

    /// Every queued project already has a builder, or the queue is empty.
    #[error("no project is waiting for a builder")]
    NoOpenProject,

    /// No queued project has this id.
    #[error("no queued project with id {0}")]
    UnknownProjectId(ProjectId),

    /// The game has ended; the village accepts no further actions.
    #[error("the game is over")]
    GameOver,
}

/// Failure to load or validate a [`SimConfig`](crate::config::SimConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The config is not valid JSON or does not match the schema.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The config parsed but describes an impossible village.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let full = Rejection::VillageFull { capacity: 6 };
        assert_eq!(full.to_string(), "village is full (6 workers)");

        let poor = Rejection::Unaffordable {
            project: ProjectKind::Castle,
            cost: Cost::new(50, 50),
            available: Resources::new(10, 10, 10),
        };
        let message = poor.to_string();
        assert!(message.contains("Castle"));
        assert!(message.contains("50 wood, 50 metal"));

        let wrong_job = Rejection::NotABuilder {
            name: "Kent".to_owned(),
            occupation: Occupation::Miner,
        };
        assert_eq!(wrong_job.to_string(), "Kent is a miner, not a builder");
    }

    #[test]
    fn test_config_error_from_json() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let config_err = ConfigError::from(err);
        assert!(config_err.to_string().starts_with("invalid config JSON"));
    }
}
