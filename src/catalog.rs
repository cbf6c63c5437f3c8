//! Static game tables: occupations, resources, and the project catalog.
//!
//! The engine never hard-codes a yield, a cost, or a bonus. Everything it
//! needs to know about "what a farmer makes" or "what a House does" lives in a
//! [`Catalog`], which is plain data and can be loaded from JSON alongside the
//! rest of [`SimConfig`](crate::config::SimConfig).
//!
//! # Default catalog
//!
//! | Project  | Wood | Metal | Days | Effect                   |
//! |----------|------|-------|------|--------------------------|
//! | House    | 5    | 0     | 3    | +2 worker capacity       |
//! | Woodmill | 5    | 1     | 5    | +1 wood per lumberjack   |
//! | Quarry   | 3    | 5     | 7    | +1 metal per miner       |
//! | Farm     | 5    | 2     | 5    | +5 food per farmer       |
//! | Castle   | 50   | 50    | 49   | victory                  |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Rejection;

/// A worker's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    /// Produces food.
    Farmer,
    /// Produces wood.
    Lumberjack,
    /// Produces metal.
    Miner,
    /// Produces nothing; puts builder-days into construction projects.
    Builder,
}

impl Occupation {
    /// Every occupation, in declaration order.
    pub const ALL: [Self; 4] = [Self::Farmer, Self::Lumberjack, Self::Miner, Self::Builder];

    /// The lowercase label used by the string-typed API.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Lumberjack => "lumberjack",
            Self::Miner => "miner",
            Self::Builder => "builder",
        }
    }

    /// The resource this occupation gathers, if any.
    #[must_use]
    pub const fn produces(self) -> Option<Resource> {
        match self {
            Self::Farmer => Some(Resource::Food),
            Self::Lumberjack => Some(Resource::Wood),
            Self::Miner => Some(Resource::Metal),
            Self::Builder => None,
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Occupation {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|occupation| occupation.label() == s)
            .ok_or_else(|| Rejection::UnknownOccupation(s.to_owned()))
    }
}

/// One of the three stockpiled resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Eaten by workers.
    Food,
    /// Spent on construction.
    Wood,
    /// Spent on construction.
    Metal,
}

/// A food/wood/metal triple.
///
/// Used both for stockpiles and for per-worker daily yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    /// Food units.
    pub food: u32,
    /// Wood units.
    pub wood: u32,
    /// Metal units.
    pub metal: u32,
}

impl Resources {
    /// All zeros.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create a new triple.
    #[must_use]
    pub const fn new(food: u32, wood: u32, metal: u32) -> Self {
        Self { food, wood, metal }
    }

    /// Read one component.
    #[must_use]
    pub const fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Food => self.food,
            Resource::Wood => self.wood,
            Resource::Metal => self.metal,
        }
    }

    /// Mutable access to one component.
    pub fn get_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Food => &mut self.food,
            Resource::Wood => &mut self.wood,
            Resource::Metal => &mut self.metal,
        }
    }

    /// Component-wise saturating addition.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            food: self.food.saturating_add(other.food),
            wood: self.wood.saturating_add(other.wood),
            metal: self.metal.saturating_add(other.metal),
        }
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "food {}, wood {}, metal {}",
            self.food, self.wood, self.metal
        )
    }
}

/// Something the village can construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectKind {
    /// Adds worker capacity.
    House,
    /// Boosts lumberjacks.
    Woodmill,
    /// Boosts miners.
    Quarry,
    /// Boosts farmers.
    Farm,
    /// Wins the game.
    Castle,
}

impl ProjectKind {
    /// Every project kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::House,
        Self::Woodmill,
        Self::Quarry,
        Self::Farm,
        Self::Castle,
    ];

    /// The display name, also accepted by the string-typed API.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Woodmill => "Woodmill",
            Self::Quarry => "Quarry",
            Self::Farm => "Farm",
            Self::Castle => "Castle",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectKind {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Rejection::UnknownProject(s.to_owned()))
    }
}

/// Construction materials. Food is never spent on building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Cost {
    /// Wood required.
    pub wood: u32,
    /// Metal required.
    pub metal: u32,
}

impl Cost {
    /// Create a new cost.
    #[must_use]
    pub const fn new(wood: u32, metal: u32) -> Self {
        Self { wood, metal }
    }

    /// Whether `stock` covers this cost in full.
    #[must_use]
    pub const fn is_covered_by(&self, stock: &Resources) -> bool {
        stock.wood >= self.wood && stock.metal >= self.metal
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wood, {} metal", self.wood, self.metal)
    }
}

/// The permanent effect a finished building has on the village.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingEffect {
    /// Extra worker capacity.
    pub capacity: u32,
    /// Extra daily yield per producing worker, by resource.
    pub yield_bonus: Resources,
    /// Completing this building wins the game.
    pub victory: bool,
}

/// Everything needed to start and finish one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Paid in full when the project is queued.
    pub cost: Cost,
    /// Builder-days needed to finish.
    pub days: u32,
    /// What the finished building grants.
    #[serde(default)]
    pub effect: BuildingEffect,
}

impl Blueprint {
    /// Create a new blueprint.
    #[must_use]
    pub const fn new(cost: Cost, days: u32, effect: BuildingEffect) -> Self {
        Self { cost, days, effect }
    }
}

/// One blueprint per [`ProjectKind`].
///
/// Stored as named fields rather than a map so that a lookup can never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectTable {
    /// House blueprint.
    pub house: Blueprint,
    /// Woodmill blueprint.
    pub woodmill: Blueprint,
    /// Quarry blueprint.
    pub quarry: Blueprint,
    /// Farm blueprint.
    pub farm: Blueprint,
    /// Castle blueprint.
    pub castle: Blueprint,
}

impl ProjectTable {
    /// Look up the blueprint for `kind`.
    #[must_use]
    pub const fn get(&self, kind: ProjectKind) -> &Blueprint {
        match kind {
            ProjectKind::House => &self.house,
            ProjectKind::Woodmill => &self.woodmill,
            ProjectKind::Quarry => &self.quarry,
            ProjectKind::Farm => &self.farm,
            ProjectKind::Castle => &self.castle,
        }
    }
}

impl Default for ProjectTable {
    fn default() -> Self {
        Self {
            house: Blueprint::new(
                Cost::new(5, 0),
                3,
                BuildingEffect {
                    capacity: 2,
                    ..BuildingEffect::default()
                },
            ),
            woodmill: Blueprint::new(
                Cost::new(5, 1),
                5,
                BuildingEffect {
                    yield_bonus: Resources::new(0, 1, 0),
                    ..BuildingEffect::default()
                },
            ),
            quarry: Blueprint::new(
                Cost::new(3, 5),
                7,
                BuildingEffect {
                    yield_bonus: Resources::new(0, 0, 1),
                    ..BuildingEffect::default()
                },
            ),
            farm: Blueprint::new(
                Cost::new(5, 2),
                5,
                BuildingEffect {
                    yield_bonus: Resources::new(5, 0, 0),
                    ..BuildingEffect::default()
                },
            ),
            castle: Blueprint::new(
                Cost::new(50, 50),
                49,
                BuildingEffect {
                    victory: true,
                    ..BuildingEffect::default()
                },
            ),
        }
    }
}

/// Yields and blueprints the engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Daily yield of one producing worker before building bonuses.
    pub base_yield: Resources,
    /// Project blueprints.
    pub projects: ProjectTable,
}

impl Catalog {
    /// Blueprint for `kind`.
    #[must_use]
    pub const fn blueprint(&self, kind: ProjectKind) -> &Blueprint {
        self.projects.get(kind)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            base_yield: Resources::new(5, 1, 1),
            projects: ProjectTable::default(),
        }
    }
}
