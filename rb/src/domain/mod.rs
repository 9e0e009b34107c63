//! Domain types for RecipeBox
//!
//! Immutable values produced by the recipe provider (recipes, ingredients,
//! products) and the fixed week enumerations the planner is keyed by.

mod ingredient;
mod recipe;
mod week;

pub use ingredient::{Ingredient, IngredientKey, normalize_name};
pub use recipe::{
    AnalyzedInstruction, InstructionStep, Nutrient, Nutrition, ProductSummary, Recipe, RecipeSummary, StepItem,
    StepLength,
};
pub use week::{Day, MealSlot, ParseWeekError};
