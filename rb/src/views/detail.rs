//! Recipe detail view actions

use tracing::debug;

use crate::domain::{Day, MealSlot, Nutrient, Recipe, RecipeSummary};
use crate::state::{StateManager, StateResponse};

/// Nutrients listed on the detail view, in display order
const HEADLINE_NUTRIENTS: &[&str] = &["Calories", "Fat", "Carbohydrates", "Protein"];

/// Render the provider's HTML summary as Markdown for the terminal
pub fn html_to_text(html: &str) -> String {
    html2md::rewrite_html(html, false).trim().to_string()
}

/// An open recipe and the actions available on it
#[derive(Debug, Clone)]
pub struct RecipeDetailView {
    recipe: Recipe,
}

impl RecipeDetailView {
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn summary(&self) -> &RecipeSummary {
        &self.recipe.info
    }

    pub fn summary_text(&self) -> String {
        html_to_text(&self.recipe.summary)
    }

    /// Headline nutrients as reported by the provider
    pub fn headline_nutrients(&self) -> Vec<&Nutrient> {
        let Some(nutrition) = &self.recipe.nutrition else {
            return Vec::new();
        };
        HEADLINE_NUTRIENTS
            .iter()
            .filter_map(|name| nutrition.nutrients.iter().find(|n| n.name == *name))
            .collect()
    }

    /// Hand every ingredient to the grocery list; returns how many were new
    pub async fn add_to_grocery(&self, state: &StateManager) -> StateResponse<usize> {
        debug!(recipe_id = self.recipe.info.id, count = self.recipe.extended_ingredients.len(), "add_to_grocery: called");
        state.add_ingredients(self.recipe.extended_ingredients.clone()).await
    }

    pub async fn add_to_planner(&self, state: &StateManager, day: Day, slot: MealSlot) -> StateResponse<()> {
        debug!(recipe_id = self.recipe.info.id, %day, %slot, "add_to_planner: called");
        state.assign(self.recipe.info.clone(), day, slot).await
    }
}
