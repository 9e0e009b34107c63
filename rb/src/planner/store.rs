//! PlannerStore - day x meal-slot assignment grid

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{Day, MealSlot, RecipeSummary};

/// Slot assignments for one day
pub type DayPlan = BTreeMap<MealSlot, RecipeSummary>;

/// Full week grid; a missing day and an empty day read the same
pub type PlannerGrid = BTreeMap<Day, DayPlan>;

/// Holds the planner grid and its mutations
#[derive(Debug, Clone, Default)]
pub struct PlannerStore {
    grid: PlannerGrid,
}

impl PlannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `recipe` in the cell, replacing whatever was there
    pub fn assign(&mut self, recipe: RecipeSummary, day: Day, slot: MealSlot) {
        debug!(%day, %slot, recipe_id = recipe.id, "assign: called");
        if let Some(previous) = self.grid.entry(day).or_default().insert(slot, recipe) {
            debug!(%day, %slot, previous_id = previous.id, "assign: replaced previous recipe");
        }
    }

    /// Clear the cell; the day entry itself stays present
    pub fn unassign(&mut self, day: Day, slot: MealSlot) {
        debug!(%day, %slot, "unassign: called");
        match self.grid.get_mut(&day) {
            Some(plan) => {
                if plan.remove(&slot).is_none() {
                    debug!(%day, %slot, "unassign: cell already empty");
                }
            }
            None => debug!(%day, "unassign: day never assigned"),
        }
    }

    /// Recipe in a cell, if any
    pub fn get(&self, day: Day, slot: MealSlot) -> Option<&RecipeSummary> {
        self.grid.get(&day).and_then(|plan| plan.get(&slot))
    }

    /// Assignments for a day
    pub fn day(&self, day: Day) -> Option<&DayPlan> {
        self.grid.get(&day)
    }

    /// Copy of the grid for rendering
    pub fn snapshot(&self) -> PlannerGrid {
        self.grid.clone()
    }

    /// True when no cell holds a recipe
    pub fn is_empty(&self) -> bool {
        self.grid.values().all(|plan| plan.is_empty())
    }

    /// Number of filled cells
    pub fn assigned_count(&self) -> usize {
        self.grid.values().map(|plan| plan.len()).sum()
    }

    /// Distinct planned recipes in week then slot order
    pub fn planned_recipes(&self) -> Vec<&RecipeSummary> {
        let mut seen = std::collections::HashSet::new();
        self.grid
            .values()
            .flat_map(|plan| plan.values())
            .filter(|recipe| seen.insert(recipe.id))
            .collect()
    }
}
