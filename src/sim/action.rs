//! Scripted village actions.
//!
//! A script is a list of [`Action`]s replayed against a
//! [`Village`](crate::sim::Village). Because the engine is deterministic,
//! the same script on the same config always ends in the same state, so a
//! script plus a config is a complete description of a game.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One call on the village's public surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Hire a worker.
    AddWorker {
        /// Worker name.
        name: String,
        /// Occupation label.
        occupation: String,
    },
    /// Queue a project.
    AddProject {
        /// Project name.
        name: String,
    },
    /// Pin a builder to the oldest open project.
    Build {
        /// Builder name.
        worker: String,
    },
    /// Advance one day.
    Day,
}

impl Action {
    /// Shorthand for [`Action::AddWorker`].
    #[must_use]
    pub fn add_worker(name: &str, occupation: &str) -> Self {
        Self::AddWorker {
            name: name.to_owned(),
            occupation: occupation.to_owned(),
        }
    }

    /// Shorthand for [`Action::AddProject`].
    #[must_use]
    pub fn add_project(name: &str) -> Self {
        Self::AddProject {
            name: name.to_owned(),
        }
    }

    /// Shorthand for [`Action::Build`].
    #[must_use]
    pub fn build(worker: &str) -> Self {
        Self::Build {
            worker: worker.to_owned(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddWorker { name, occupation } => write!(f, "add worker {name} ({occupation})"),
            Self::AddProject { name } => write!(f, "add project {name}"),
            Self::Build { worker } => write!(f, "build with {worker}"),
            Self::Day => f.write_str("day"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_json_shape() {
        let script = vec![
            Action::add_worker("Amber", "farmer"),
            Action::add_project("House"),
            Action::build("Bob"),
            Action::Day,
        ];
        let json = serde_json::to_string(&script).unwrap();
        assert!(json.contains(r#"{"action":"add_worker","name":"Amber","occupation":"farmer"}"#));
        assert!(json.contains(r#"{"action":"day"}"#));

        let parsed: Vec<Action> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, script);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::add_project("Farm").to_string(), "add project Farm");
        assert_eq!(Action::Day.to_string(), "day");
    }
}
