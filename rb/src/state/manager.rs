//! StateManager - actor that owns AppState
//!
//! Processes commands via channels so every mutation runs to completion
//! before the next one starts.

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use super::container::AppState;
use super::messages::{StateCommand, StateError, StateResponse};
use crate::domain::{Day, Ingredient, MealSlot, RecipeSummary};
use crate::grocery::{AisleGroup, GroceryItem};
use crate::planner::PlannerGrid;

/// Event broadcast after a mutation so views can re-render
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// A planner cell was assigned or cleared
    PlannerChanged { day: Day, slot: MealSlot },
    /// Items were added or a checked flag flipped
    GroceryChanged { len: usize },
    /// The grocery list was emptied
    GroceryCleared,
}

/// Handle to send commands to the StateManager
#[derive(Clone)]
pub struct StateManager {
    tx: mpsc::Sender<StateCommand>,
    /// Broadcast sender for state change notifications
    event_tx: broadcast::Sender<StateEvent>,
}

impl StateManager {
    /// Spawn a new StateManager actor over empty state
    pub fn spawn() -> Self {
        Self::spawn_with(AppState::new())
    }

    /// Spawn a StateManager actor over existing state
    pub fn spawn_with(state: AppState) -> Self {
        debug!("spawn_with: called");
        let (tx, rx) = mpsc::channel(256);
        let (event_tx, _) = broadcast::channel(64);

        tokio::spawn(actor_loop(state, rx, event_tx.clone()));

        info!("StateManager spawned");
        Self { tx, event_tx }
    }

    /// Subscribe to state change events
    pub fn subscribe_events(&self) -> broadcast::Receiver<StateEvent> {
        self.event_tx.subscribe()
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> StateCommand) -> StateResponse<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(build(reply_tx))
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)
    }

    // === Planner operations ===

    /// Assign a recipe to a planner cell, replacing any previous one
    pub async fn assign(&self, recipe: RecipeSummary, day: Day, slot: MealSlot) -> StateResponse<()> {
        debug!(recipe_id = recipe.id, %day, %slot, "assign: called");
        self.request(|reply| StateCommand::Assign {
            recipe,
            day,
            slot,
            reply,
        })
        .await
    }

    /// Clear a planner cell
    pub async fn unassign(&self, day: Day, slot: MealSlot) -> StateResponse<()> {
        debug!(%day, %slot, "unassign: called");
        self.request(|reply| StateCommand::Unassign { day, slot, reply })
            .await
    }

    /// Current planner grid
    pub async fn planner_snapshot(&self) -> StateResponse<PlannerGrid> {
        debug!("planner_snapshot: called");
        self.request(|reply| StateCommand::PlannerSnapshot { reply }).await
    }

    /// Distinct recipes on the planner, in week order
    pub async fn planned_recipes(&self) -> StateResponse<Vec<RecipeSummary>> {
        debug!("planned_recipes: called");
        self.request(|reply| StateCommand::PlannedRecipes { reply }).await
    }

    // === Grocery operations ===

    /// Merge ingredients into the grocery list, returning how many were new
    pub async fn add_ingredients(&self, ingredients: Vec<Ingredient>) -> StateResponse<usize> {
        debug!(count = ingredients.len(), "add_ingredients: called");
        self.request(|reply| StateCommand::AddIngredients { ingredients, reply })
            .await
    }

    /// Flip an item's checked flag; false when no item matched
    pub async fn toggle_grocery_item(&self, id: u64, name: &str) -> StateResponse<bool> {
        debug!(id, %name, "toggle_grocery_item: called");
        self.request(|reply| StateCommand::ToggleGroceryItem {
            id,
            name: name.to_string(),
            reply,
        })
        .await
    }

    /// Empty the grocery list
    pub async fn clear_grocery(&self) -> StateResponse<()> {
        debug!("clear_grocery: called");
        self.request(|reply| StateCommand::ClearGrocery { reply }).await
    }

    /// Grocery items in insertion order
    pub async fn grocery_items(&self) -> StateResponse<Vec<GroceryItem>> {
        debug!("grocery_items: called");
        self.request(|reply| StateCommand::GroceryItems { reply }).await
    }

    /// Grocery items grouped by aisle
    pub async fn grocery_by_aisle(&self) -> StateResponse<Vec<AisleGroup>> {
        debug!("grocery_by_aisle: called");
        self.request(|reply| StateCommand::GroceryByAisle { reply }).await
    }

    /// Stop the actor; its state is dropped
    pub async fn shutdown(&self) -> StateResponse<()> {
        debug!("shutdown: called");
        self.tx
            .send(StateCommand::Shutdown)
            .await
            .map_err(|_| StateError::ChannelError)
    }
}

/// The actor loop that owns the AppState and processes commands
async fn actor_loop(mut state: AppState, mut rx: mpsc::Receiver<StateCommand>, event_tx: broadcast::Sender<StateEvent>) {
    debug!("StateManager actor started");

    while let Some(cmd) = rx.recv().await {
        match cmd {
            StateCommand::Assign {
                recipe,
                day,
                slot,
                reply,
            } => {
                state.assign(recipe, day, slot);
                let _ = event_tx.send(StateEvent::PlannerChanged { day, slot });
                let _ = reply.send(());
            }

            StateCommand::Unassign { day, slot, reply } => {
                state.unassign(day, slot);
                let _ = event_tx.send(StateEvent::PlannerChanged { day, slot });
                let _ = reply.send(());
            }

            StateCommand::PlannerSnapshot { reply } => {
                let _ = reply.send(state.planner_snapshot());
            }

            StateCommand::PlannedRecipes { reply } => {
                let _ = reply.send(state.planned_recipes());
            }

            StateCommand::AddIngredients { ingredients, reply } => {
                let added = state.add_ingredients(&ingredients);
                if added > 0 {
                    let _ = event_tx.send(StateEvent::GroceryChanged {
                        len: state.grocery().len(),
                    });
                }
                let _ = reply.send(added);
            }

            StateCommand::ToggleGroceryItem { id, name, reply } => {
                let matched = state.toggle_grocery_item(id, &name);
                if matched {
                    let _ = event_tx.send(StateEvent::GroceryChanged {
                        len: state.grocery().len(),
                    });
                }
                let _ = reply.send(matched);
            }

            StateCommand::ClearGrocery { reply } => {
                state.clear_grocery();
                let _ = event_tx.send(StateEvent::GroceryCleared);
                let _ = reply.send(());
            }

            StateCommand::GroceryItems { reply } => {
                let _ = reply.send(state.grocery_items());
            }

            StateCommand::GroceryByAisle { reply } => {
                let _ = reply.send(state.grocery_by_aisle());
            }

            StateCommand::Shutdown => {
                info!("StateManager shutting down");
                break;
            }
        }
    }

    debug!("StateManager actor stopped");
}
