//! RecipeProvider trait definition

use async_trait::async_trait;

use super::{ProviderError, RecipeQuery};
use crate::domain::{ProductSummary, Recipe, RecipeSummary};

/// Source of recipe and product data
///
/// Every call is independent and may fail; callers turn failures into an
/// empty result state rather than propagating them.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Random recipe summaries for the home and search landing views
    async fn trending(&self, count: u32) -> Result<Vec<RecipeSummary>, ProviderError>;

    /// Recipes matching a keyword and/or ingredient list
    async fn search_recipes(&self, query: &RecipeQuery) -> Result<Vec<RecipeSummary>, ProviderError>;

    /// Full detail including ingredients and instructions
    async fn recipe_details(&self, id: u64) -> Result<Recipe, ProviderError>;

    /// Packaged products matching a keyword
    async fn search_products(&self, query: &str, number: u32) -> Result<Vec<ProductSummary>, ProviderError>;
}
