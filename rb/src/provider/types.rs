//! Request and response types for the provider contract

use serde::Deserialize;

use crate::domain::{ProductSummary, RecipeSummary};

/// Default number of results per search
pub const DEFAULT_RESULTS: u32 = 12;

/// Default number of trending recipes
pub const DEFAULT_TRENDING: u32 = 9;

/// Recipe search parameters
///
/// A keyword search sets `query`; an ingredient search sets
/// `include_ingredients` (comma separated). Diet and cuisine narrow either.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeQuery {
    pub query: Option<String>,
    pub include_ingredients: Option<String>,
    pub diet: Option<String>,
    pub cuisine: Option<String>,
    pub number: u32,
}

impl Default for RecipeQuery {
    fn default() -> Self {
        Self {
            query: None,
            include_ingredients: None,
            diet: None,
            cuisine: None,
            number: DEFAULT_RESULTS,
        }
    }
}

impl RecipeQuery {
    /// Keyword search
    pub fn keyword(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Search by ingredients on hand
    pub fn ingredients(list: impl Into<String>) -> Self {
        Self {
            include_ingredients: Some(list.into()),
            ..Default::default()
        }
    }

    pub fn with_diet(mut self, diet: Option<String>) -> Self {
        self.diet = diet.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn with_cuisine(mut self, cuisine: Option<String>) -> Self {
        self.cuisine = cuisine.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = number;
        self
    }

    /// Query-string pairs for the search endpoint
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.query {
            params.push(("query", q.clone()));
        }
        if let Some(ing) = &self.include_ingredients {
            params.push(("includeIngredients", ing.clone()));
        }
        params.push(("number", self.number.to_string()));
        params.push(("addRecipeInformation", "true".to_string()));
        if let Some(diet) = &self.diet {
            params.push(("diet", diet.clone()));
        }
        if let Some(cuisine) = &self.cuisine {
            params.push(("cuisine", cuisine.clone()));
        }
        params
    }
}

/// `/recipes/random` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct RandomRecipesResponse {
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
}

/// `/recipes/complexSearch` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct SearchRecipesResponse {
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
}

/// `/food/products/search` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct SearchProductsResponse {
    #[serde(default)]
    pub products: Vec<ProductSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_params() {
        let params = RecipeQuery::keyword("pasta").to_params();
        assert_eq!(
            params,
            vec![
                ("query", "pasta".to_string()),
                ("number", "12".to_string()),
                ("addRecipeInformation", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_ingredient_params_with_filters() {
        let params = RecipeQuery::ingredients("tomato,basil")
            .with_diet(Some("vegetarian".to_string()))
            .with_cuisine(Some("".to_string()))
            .with_number(5)
            .to_params();

        assert!(params.contains(&("includeIngredients", "tomato,basil".to_string())));
        assert!(params.contains(&("diet", "vegetarian".to_string())));
        assert!(params.contains(&("number", "5".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "cuisine"));
        assert!(!params.iter().any(|(k, _)| *k == "query"));
    }

    #[test]
    fn test_envelopes_tolerate_missing_lists() {
        let r: SearchRecipesResponse = serde_json::from_str("{}").unwrap();
        assert!(r.results.is_empty());
        let p: SearchProductsResponse =
            serde_json::from_str(r#"{"products": [{"id": 1, "title": "Oat Milk"}]}"#).unwrap();
        assert_eq!(p.products[0].title, "Oat Milk");
    }
}
