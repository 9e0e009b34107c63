//! Ingredient values and their grocery identity

use serde::{Deserialize, Serialize};

/// Normalize an ingredient name for identity comparison
///
/// Trims surrounding whitespace, collapses internal whitespace runs to a
/// single space, and lowercases. "  Brown   Sugar " and "brown sugar"
/// normalize to the same key.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// An ingredient line from a recipe's detail
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    pub id: u64,
    /// Store aisle ("Baking", "Milk, Eggs, Other Dairy")
    pub aisle: String,
    pub image: String,
    pub consistency: String,
    /// Display name as sent by the provider
    pub name: String,
    /// Provider-cleaned name, when available
    pub name_clean: Option<String>,
    /// Free-text line as written in the recipe ("2 cups flour")
    pub original: String,
    pub original_name: String,
    pub amount: f64,
    pub unit: String,
    pub meta: Vec<String>,
}

impl Ingredient {
    /// Build an ingredient with the fields the grocery list cares about
    pub fn new(id: u64, name: impl Into<String>, aisle: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            aisle: aisle.into(),
            original: name.clone(),
            original_name: name.clone(),
            name,
            ..Default::default()
        }
    }

    /// Set the free-text line shown on the grocery list
    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = original.into();
        self
    }

    /// Identity used to deduplicate grocery items
    pub fn key(&self) -> IngredientKey {
        IngredientKey::new(self.id, &self.name)
    }

    /// Text to show for this ingredient, falling back to the name
    pub fn display_text(&self) -> &str {
        if self.original.trim().is_empty() { &self.name } else { &self.original }
    }
}

/// Grocery identity: provider id plus normalized name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngredientKey {
    pub id: u64,
    pub name: String,
}

impl IngredientKey {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: normalize_name(name),
        }
    }
}

impl std::fmt::Display for IngredientKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.id, self.name)
    }
}
