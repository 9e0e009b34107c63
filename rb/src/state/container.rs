//! AppState - the single owner of both stores

use tracing::debug;

use crate::domain::{Day, Ingredient, MealSlot, RecipeSummary};
use crate::grocery::{AisleGroup, GroceryItem, GroceryStore};
use crate::planner::{PlannerGrid, PlannerStore};

/// Session state: one planner, one grocery list, nothing persisted
#[derive(Debug, Clone, Default)]
pub struct AppState {
    planner: PlannerStore,
    grocery: GroceryStore,
}

impl AppState {
    /// Empty state, as at application start
    pub fn new() -> Self {
        debug!("AppState::new: called");
        Self::default()
    }

    // === Planner ===

    pub fn assign(&mut self, recipe: RecipeSummary, day: Day, slot: MealSlot) {
        self.planner.assign(recipe, day, slot);
    }

    pub fn unassign(&mut self, day: Day, slot: MealSlot) {
        self.planner.unassign(day, slot);
    }

    pub fn planner_snapshot(&self) -> PlannerGrid {
        self.planner.snapshot()
    }

    pub fn planned_recipes(&self) -> Vec<RecipeSummary> {
        self.planner.planned_recipes().into_iter().cloned().collect()
    }

    pub fn planner(&self) -> &PlannerStore {
        &self.planner
    }

    // === Grocery ===

    pub fn add_ingredients(&mut self, ingredients: &[Ingredient]) -> usize {
        self.grocery.add_ingredients(ingredients)
    }

    pub fn toggle_grocery_item(&mut self, id: u64, name: &str) -> bool {
        self.grocery.toggle(id, name)
    }

    pub fn clear_grocery(&mut self) {
        self.grocery.clear();
    }

    pub fn grocery_items(&self) -> Vec<GroceryItem> {
        self.grocery.items().to_vec()
    }

    pub fn grocery_by_aisle(&self) -> Vec<AisleGroup> {
        self.grocery.grouped_by_aisle()
    }

    pub fn grocery(&self) -> &GroceryStore {
        &self.grocery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = AppState::new();
        assert!(state.planner_snapshot().is_empty());
        assert!(state.grocery_items().is_empty());
        assert!(state.grocery_by_aisle().is_empty());
    }

    #[test]
    fn test_stores_are_independent() {
        let mut state = AppState::new();
        state.assign(RecipeSummary::new(1, "Soup"), Day::Monday, MealSlot::Lunch);
        state.add_ingredients(&[Ingredient::new(11, "leek", "Produce")]);

        state.clear_grocery();
        assert_eq!(state.planner().assigned_count(), 1);

        state.unassign(Day::Monday, MealSlot::Lunch);
        state.add_ingredients(&[Ingredient::new(11, "leek", "Produce")]);
        assert!(state.planner().is_empty());
        assert_eq!(state.grocery().len(), 1);
    }
}
