//! Grocery list
//!
//! Deduplicated, insertion-ordered grocery items fed from recipe ingredient
//! lists, plus the aisle-grouped read view.

mod aisle;
mod store;

pub use aisle::{AisleGroup, OTHER_AISLE, group_by_aisle};
pub use store::{GroceryItem, GroceryStore};
