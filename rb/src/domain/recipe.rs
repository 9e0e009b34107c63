//! Recipe and product values returned by the provider

use serde::{Deserialize, Serialize};

use super::Ingredient;

/// Recipe reference shown in lists and stored in planner cells
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub health_score: f64,
    pub servings: u32,
}

impl RecipeSummary {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Full recipe detail
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    #[serde(flatten)]
    pub info: RecipeSummary,
    /// HTML summary text
    pub summary: String,
    pub extended_ingredients: Vec<Ingredient>,
    pub analyzed_instructions: Vec<AnalyzedInstruction>,
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Steps of the primary instruction set, empty when none were analyzed
    pub fn steps(&self) -> &[InstructionStep] {
        self.analyzed_instructions
            .first()
            .map(|i| i.steps.as_slice())
            .unwrap_or(&[])
    }
}

/// Named group of instruction steps
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzedInstruction {
    pub name: String,
    pub steps: Vec<InstructionStep>,
}

/// One numbered cooking step
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionStep {
    pub number: u32,
    pub step: String,
    pub ingredients: Vec<StepItem>,
    pub equipment: Vec<StepItem>,
    pub length: Option<StepLength>,
}

/// Ingredient or equipment referenced by a step
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepItem {
    pub id: u64,
    pub name: String,
    pub localized_name: String,
    pub image: String,
}

/// Step duration ("10 minutes")
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StepLength {
    pub number: u32,
    pub unit: String,
}

/// Provider-computed nutrition block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub percent_of_daily_needs: f64,
}

/// Packaged food product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSummary {
    pub id: u64,
    pub title: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_summary_camel_case() {
        let json = r#"{
            "id": 715538,
            "title": "Bruschetta",
            "image": "https://img.example/715538.jpg",
            "readyInMinutes": 35,
            "healthScore": 19.0,
            "servings": 6,
            "vegan": true
        }"#;

        let summary: RecipeSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 715538);
        assert_eq!(summary.ready_in_minutes, 35);
        assert_eq!(summary.servings, 6);
    }

    #[test]
    fn test_deserialize_recipe_detail() {
        let json = r#"{
            "id": 1,
            "title": "Pancakes",
            "readyInMinutes": 20,
            "servings": 4,
            "summary": "<b>Fluffy</b> pancakes",
            "extendedIngredients": [
                {"id": 20081, "name": "flour", "aisle": "Baking", "original": "1 cup flour"}
            ],
            "analyzedInstructions": [
                {"name": "", "steps": [
                    {"number": 1, "step": "Mix.", "length": {"number": 5, "unit": "minutes"}},
                    {"number": 2, "step": "Fry."}
                ]}
            ],
            "nutrition": {"nutrients": [
                {"name": "Calories", "amount": 227.5, "unit": "kcal", "percentOfDailyNeeds": 11.4}
            ]}
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.info.title, "Pancakes");
        assert_eq!(recipe.extended_ingredients.len(), 1);
        assert_eq!(recipe.steps().len(), 2);
        assert_eq!(recipe.steps()[0].length.as_ref().unwrap().number, 5);
        let nutrition = recipe.nutrition.unwrap();
        assert_eq!(nutrition.nutrients[0].name, "Calories");
    }

    #[test]
    fn test_steps_empty_without_instructions() {
        let recipe = Recipe::default();
        assert!(recipe.steps().is_empty());
    }
}
