//! State manager messages
//!
//! Commands and responses for the actor pattern.

use thiserror::Error;
use tokio::sync::oneshot;

use crate::domain::{Day, Ingredient, MealSlot, RecipeSummary};
use crate::grocery::{AisleGroup, GroceryItem};
use crate::planner::PlannerGrid;

/// Errors from state operations
///
/// The stores themselves never fail; only the channel to the actor can.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("State manager is not running")]
    ChannelError,
}

/// Response from state operations
pub type StateResponse<T> = Result<T, StateError>;

/// Commands sent to the StateManager actor
#[derive(Debug)]
pub enum StateCommand {
    // Planner operations
    Assign {
        recipe: RecipeSummary,
        day: Day,
        slot: MealSlot,
        reply: oneshot::Sender<()>,
    },
    Unassign {
        day: Day,
        slot: MealSlot,
        reply: oneshot::Sender<()>,
    },
    PlannerSnapshot {
        reply: oneshot::Sender<PlannerGrid>,
    },
    PlannedRecipes {
        reply: oneshot::Sender<Vec<RecipeSummary>>,
    },

    // Grocery operations
    AddIngredients {
        ingredients: Vec<Ingredient>,
        reply: oneshot::Sender<usize>,
    },
    ToggleGroceryItem {
        id: u64,
        name: String,
        reply: oneshot::Sender<bool>,
    },
    ClearGrocery {
        reply: oneshot::Sender<()>,
    },
    GroceryItems {
        reply: oneshot::Sender<Vec<GroceryItem>>,
    },
    GroceryByAisle {
        reply: oneshot::Sender<Vec<AisleGroup>>,
    },

    // Shutdown
    Shutdown,
}
