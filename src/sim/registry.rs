//! Finished buildings and their combined effects.

use crate::catalog::{BuildingEffect, Catalog, ProjectKind, Resources};

/// A finished project. Never changes and is never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    /// What was built.
    pub kind: ProjectKind,
    /// The effect captured from the blueprint at completion.
    pub effect: BuildingEffect,
    /// Day the building was finished; 0 for founding buildings.
    pub completed_on: u32,
}

impl Building {
    /// Display name of the building.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Every standing building, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingRegistry {
    buildings: Vec<Building>,
}

impl BuildingRegistry {
    /// A registry holding the founding buildings, with effects from `catalog`.
    #[must_use]
    pub fn with_founding(kinds: &[ProjectKind], catalog: &Catalog) -> Self {
        let buildings = kinds
            .iter()
            .map(|&kind| Building {
                kind,
                effect: catalog.blueprint(kind).effect,
                completed_on: 0,
            })
            .collect();
        Self { buildings }
    }

    /// All buildings, oldest first.
    #[must_use]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// How many buildings of `kind` stand.
    #[must_use]
    pub fn count(&self, kind: ProjectKind) -> usize {
        self.buildings.iter().filter(|b| b.kind == kind).count()
    }

    /// Extra worker capacity from all buildings.
    #[must_use]
    pub fn capacity_bonus(&self) -> u32 {
        self.buildings
            .iter()
            .fold(0, |total, b| total.saturating_add(b.effect.capacity))
    }

    /// Extra per-worker yield from all buildings.
    #[must_use]
    pub fn yield_bonus(&self) -> Resources {
        self.buildings
            .iter()
            .fold(Resources::ZERO, |total, b| {
                total.saturating_add(b.effect.yield_bonus)
            })
    }

    /// Whether any standing building wins the game.
    #[must_use]
    pub fn has_victory(&self) -> bool {
        self.buildings.iter().any(|b| b.effect.victory)
    }

    pub(crate) fn push(&mut self, building: Building) {
        self.buildings.push(building);
    }
}
