//! Integration tests for RecipeBox
//!
//! End-to-end behavior of the planner and grocery list through the shared
//! state container and its actor handle.

use std::time::Duration;

use recipebox::domain::{Day, Ingredient, MealSlot, Recipe, RecipeSummary};
use recipebox::state::{AppState, StateEvent, StateManager};
use recipebox::views::RecipeDetailView;

fn flour() -> Ingredient {
    Ingredient::new(1, "flour", "Baking").with_original("2 cups flour")
}

fn milk() -> Ingredient {
    Ingredient::new(2, "milk", "Dairy").with_original("1 cup milk")
}

fn eggs() -> Ingredient {
    Ingredient::new(3, "eggs", "Dairy").with_original("2 eggs")
}

// =============================================================================
// Grocery Scenarios
// =============================================================================

#[tokio::test]
async fn test_grocery_merge_scenario() {
    let state = StateManager::spawn();

    state.add_ingredients(vec![flour(), milk()]).await.unwrap();
    state.add_ingredients(vec![flour(), eggs()]).await.unwrap();

    let items = state.grocery_items().await.unwrap();
    let names: Vec<&str> = items.iter().map(|i| i.ingredient.name.as_str()).collect();
    assert_eq!(names, vec!["flour", "milk", "eggs"]);

    let groups = state.grocery_by_aisle().await.unwrap();
    let view: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|g| {
            (
                g.aisle.as_str(),
                g.items.iter().map(|i| i.ingredient.name.as_str()).collect(),
            )
        })
        .collect();
    assert_eq!(view, vec![("Baking", vec!["flour"]), ("Dairy", vec!["milk", "eggs"])]);

    state.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_readding_keeps_checked_state() {
    let state = StateManager::spawn();

    state.add_ingredients(vec![flour(), milk()]).await.unwrap();
    assert!(state.toggle_grocery_item(1, "flour").await.unwrap());

    let added = state.add_ingredients(vec![flour()]).await.unwrap();
    assert_eq!(added, 0);

    let items = state.grocery_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].checked);
}

#[tokio::test]
async fn test_toggle_tolerates_stale_reference_after_clear() {
    let state = StateManager::spawn();

    state.add_ingredients(vec![flour()]).await.unwrap();
    state.clear_grocery().await.unwrap();

    assert!(!state.toggle_grocery_item(1, "flour").await.unwrap());
    assert!(state.grocery_items().await.unwrap().is_empty());
    assert!(state.grocery_by_aisle().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_same_recipe_added_from_two_views() {
    let recipe = Recipe {
        info: RecipeSummary::new(100, "Pancakes"),
        extended_ingredients: vec![flour(), milk(), eggs()],
        ..Default::default()
    };
    let state = StateManager::spawn();

    let first = RecipeDetailView::new(recipe.clone());
    let second = RecipeDetailView::new(recipe);
    let (a, b) = tokio::join!(first.add_to_grocery(&state), second.add_to_grocery(&state));

    assert_eq!(a.unwrap() + b.unwrap(), 3);
    assert_eq!(state.grocery_items().await.unwrap().len(), 3);
}

// =============================================================================
// Planner Scenarios
// =============================================================================

#[tokio::test]
async fn test_planner_last_assignment_wins() {
    let state = StateManager::spawn();

    state
        .assign(RecipeSummary::new(1, "Recipe A"), Day::Monday, MealSlot::Dinner)
        .await
        .unwrap();
    state
        .assign(RecipeSummary::new(2, "Recipe B"), Day::Monday, MealSlot::Dinner)
        .await
        .unwrap();

    let grid = state.planner_snapshot().await.unwrap();
    assert_eq!(grid[&Day::Monday].len(), 1);
    assert_eq!(grid[&Day::Monday][&MealSlot::Dinner].title, "Recipe B");
}

#[tokio::test]
async fn test_planner_events_reach_subscribers() {
    let state = StateManager::spawn();
    let mut events = state.subscribe_events();

    state
        .assign(RecipeSummary::new(1, "Recipe A"), Day::Sunday, MealSlot::Breakfast)
        .await
        .unwrap();
    state.unassign(Day::Sunday, MealSlot::Breakfast).await.unwrap();

    for _ in 0..2 {
        let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
            .await
            .expect("event should arrive")
            .unwrap();
        assert_eq!(
            event,
            StateEvent::PlannerChanged {
                day: Day::Sunday,
                slot: MealSlot::Breakfast
            }
        );
    }
}

// =============================================================================
// Container
// =============================================================================

#[tokio::test]
async fn test_manager_over_prepared_state() {
    let mut app = AppState::new();
    app.assign(RecipeSummary::new(9, "Stew"), Day::Friday, MealSlot::Lunch);
    app.add_ingredients(&[milk()]);

    let state = StateManager::spawn_with(app);

    assert_eq!(state.grocery_items().await.unwrap().len(), 1);
    assert_eq!(state.planned_recipes().await.unwrap()[0].id, 9);
}
