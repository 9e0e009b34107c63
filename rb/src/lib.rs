//! RecipeBox - recipe discovery, weekly meal planning and grocery lists
//!
//! The core is the session state: a day × meal-slot planner grid and a
//! deduplicated grocery list fed from recipe ingredient lists. Recipe and
//! product data comes from an external provider behind a trait.
//!
//! # Modules
//!
//! - [`domain`] - Recipe, ingredient and week value types
//! - [`planner`] - Planner store
//! - [`grocery`] - Grocery store and aisle grouping
//! - [`state`] - Shared container and its actor handle
//! - [`provider`] - Recipe provider trait and Spoonacular client
//! - [`views`] - Input validation, fetch outcomes, stale-result guards, cook mode
//! - [`repl`] - Interactive terminal session
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod grocery;
pub mod planner;
pub mod provider;
pub mod repl;
pub mod state;
pub mod views;

// Re-export commonly used types
pub use config::{Config, DisplayConfig, ProviderConfig};
pub use domain::{Day, Ingredient, IngredientKey, MealSlot, Recipe, RecipeSummary, normalize_name};
pub use grocery::{AisleGroup, GroceryItem, GroceryStore};
pub use planner::{PlannerGrid, PlannerStore};
pub use provider::{ProviderError, RecipeProvider, RecipeQuery, SpoonacularClient, create_provider};
pub use state::{AppState, StateCommand, StateError, StateEvent, StateManager, StateResponse};
pub use views::{CookMode, FetchOutcome, InputError, RecipeDetailView, ViewToken, ViewTracker, validate_query};
