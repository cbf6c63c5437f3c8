//! Simulation configuration.
//!
//! [`SimConfig::default`] reproduces the standard game. Every field is
//! `#[serde(default)]`, so a JSON file only needs the values it changes:
//!
//! ```json
//! {
//!   "starvation_days": 3,
//!   "builder_policy": "one_per_project",
//!   "catalog": { "base_yield": { "food": 4, "wood": 1, "metal": 1 } }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ProjectKind, Resources};
use crate::error::ConfigError;

/// How builders are matched to queued projects each day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderPolicy {
    /// While any builder is alive, every queued project advances one day.
    #[default]
    Shared,
    /// Each builder advances exactly one project per day. Pinned builders
    /// serve their own project; the rest go to the oldest unstaffed ones.
    OnePerProject,
}

/// When workers eat relative to the day's production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealTime {
    /// Produce and build first, then eat from the updated stock.
    #[default]
    AfterWork,
    /// Eat from yesterday's stock, then produce and build.
    BeforeWork,
}

/// Complete configuration for a [`Village`](crate::sim::Village).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Stockpile on day 0.
    pub starting_stock: Resources,
    /// Worker capacity before any building bonus.
    pub base_capacity: u32,
    /// Buildings standing on day 0, in order.
    pub founding_buildings: Vec<ProjectKind>,
    /// Food one living worker eats per day.
    pub ration: u32,
    /// Consecutive hungry days after which a worker dies.
    pub starvation_days: u32,
    /// Builder assignment policy.
    pub builder_policy: BuilderPolicy,
    /// Meal timing.
    pub meal_time: MealTime,
    /// Yields and blueprints.
    pub catalog: Catalog,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_stock: Resources::new(10, 0, 0),
            base_capacity: 0,
            founding_buildings: vec![ProjectKind::House; 3],
            ration: 1,
            starvation_days: 2,
            builder_policy: BuilderPolicy::default(),
            meal_time: MealTime::default(),
            catalog: Catalog::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`SimConfig::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configs the engine cannot run sensibly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ration == 0 {
            return Err(ConfigError::Invalid("ration must be at least 1".to_owned()));
        }
        if self.starvation_days == 0 {
            return Err(ConfigError::Invalid(
                "starvation_days must be at least 1".to_owned(),
            ));
        }
        for kind in ProjectKind::ALL {
            if self.catalog.blueprint(kind).days == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{kind} must take at least one day to build"
                )));
            }
        }
        Ok(())
    }
}
