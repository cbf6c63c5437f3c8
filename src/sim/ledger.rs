//! Resource stockpile and per-worker daily yields.

use crate::catalog::{Cost, Occupation, Resource, Resources};
use crate::sim::{BuildingRegistry, Headcount};

/// Current stock of food, wood, and metal plus what one worker of each
/// producing occupation gathers per day.
///
/// Stock is unsigned and every subtraction saturates, so counts can never go
/// negative. Shortfalls are reported back to the caller instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLedger {
    stock: Resources,
    yields: Resources,
}

impl ResourceLedger {
    /// Create a ledger with the given opening stock and per-worker yields.
    #[must_use]
    pub const fn new(stock: Resources, yields: Resources) -> Self {
        Self { stock, yields }
    }

    /// Current stockpile.
    #[must_use]
    pub const fn stock(&self) -> Resources {
        self.stock
    }

    /// Amount of a single resource in stock.
    #[must_use]
    pub const fn amount(&self, resource: Resource) -> u32 {
        self.stock.get(resource)
    }

    /// Daily yield of one producing worker, bonuses included.
    #[must_use]
    pub const fn yields(&self) -> Resources {
        self.yields
    }

    /// What `headcount` would gather in one day at current yields.
    #[must_use]
    pub fn daily_output(&self, headcount: &Headcount) -> Resources {
        let mut output = Resources::ZERO;
        for occupation in Occupation::ALL {
            if let Some(resource) = occupation.produces() {
                let gathered = self
                    .yields
                    .get(resource)
                    .saturating_mul(headcount.get(occupation));
                let slot = output.get_mut(resource);
                *slot = slot.saturating_add(gathered);
            }
        }
        output
    }

    /// Add one day of production to the stockpile and return what was added.
    pub(crate) fn produce(&mut self, headcount: &Headcount) -> Resources {
        let output = self.daily_output(headcount);
        self.stock = self.stock.saturating_add(output);
        output
    }

    /// Remove `amount` of `resource` if the stock covers it in full.
    /// Nothing is removed otherwise.
    pub(crate) fn take(&mut self, resource: Resource, amount: u32) -> bool {
        let slot = self.stock.get_mut(resource);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    /// Deduct `cost` if the stock covers it in full. Nothing is deducted
    /// otherwise.
    pub(crate) fn spend(&mut self, cost: &Cost) -> bool {
        if !cost.is_covered_by(&self.stock) {
            return false;
        }
        self.stock.wood -= cost.wood;
        self.stock.metal -= cost.metal;
        true
    }

    /// Overwrite one stock value.
    pub(crate) fn set(&mut self, resource: Resource, amount: u32) {
        *self.stock.get_mut(resource) = amount;
    }

    /// Recompute yields from the base rates and the registry's bonuses.
    pub(crate) fn refresh_yields(&mut self, base: Resources, registry: &BuildingRegistry) {
        self.yields = base.saturating_add(registry.yield_bonus());
    }
}
