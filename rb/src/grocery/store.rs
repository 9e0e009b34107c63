//! GroceryStore - set-union merge of recipe ingredients

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aisle::{AisleGroup, group_by_aisle};
use crate::domain::{Ingredient, IngredientKey};

/// An ingredient on the grocery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub checked: bool,
}

impl GroceryItem {
    fn unchecked(ingredient: Ingredient) -> Self {
        Self {
            ingredient,
            checked: false,
        }
    }

    pub fn key(&self) -> IngredientKey {
        self.ingredient.key()
    }
}

/// Ordered grocery items, at most one per ingredient key
#[derive(Debug, Clone, Default)]
pub struct GroceryStore {
    items: Vec<GroceryItem>,
    keys: HashSet<IngredientKey>,
}

impl GroceryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge ingredients into the list
    ///
    /// Ingredients whose key is already present (from earlier calls or earlier
    /// in this same slice) are skipped. Existing items keep their position and
    /// checked state. Returns how many items were appended.
    pub fn add_ingredients(&mut self, ingredients: &[Ingredient]) -> usize {
        debug!(count = ingredients.len(), existing = self.items.len(), "add_ingredients: called");
        let before = self.items.len();

        for ingredient in ingredients {
            let key = ingredient.key();
            if self.keys.contains(&key) {
                debug!(%key, "add_ingredients: already listed, skipping");
                continue;
            }
            self.keys.insert(key);
            self.items.push(GroceryItem::unchecked(ingredient.clone()));
        }

        let added = self.items.len() - before;
        debug!(added, total = self.items.len(), "add_ingredients: merged");
        added
    }

    /// Flip the checked flag on the matching item
    ///
    /// Returns false when nothing matched, which happens for references held
    /// across a `clear`.
    pub fn toggle(&mut self, id: u64, name: &str) -> bool {
        let key = IngredientKey::new(id, name);
        debug!(%key, "toggle: called");
        match self.items.iter_mut().find(|item| item.key() == key) {
            Some(item) => {
                item.checked = !item.checked;
                debug!(%key, checked = item.checked, "toggle: flipped");
                true
            }
            None => {
                debug!(%key, "toggle: no matching item");
                false
            }
        }
    }

    /// Remove every item
    pub fn clear(&mut self) {
        debug!(count = self.items.len(), "clear: called");
        self.items.clear();
        self.keys.clear();
    }

    /// Items grouped by aisle, recomputed on every call
    pub fn grouped_by_aisle(&self) -> Vec<AisleGroup> {
        group_by_aisle(&self.items)
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }
}
