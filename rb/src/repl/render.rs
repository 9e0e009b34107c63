//! Terminal rendering for lists, recipe detail, planner and grocery views

use colored::Colorize;

use crate::domain::{Day, MealSlot, ProductSummary, RecipeSummary};
use crate::grocery::AisleGroup;
use crate::planner::PlannerGrid;
use crate::views::{CookMode, RecipeDetailView};

const PROGRESS_WIDTH: usize = 20;

/// Numbered recipe list with id, time and servings
pub fn recipe_list(recipes: &[RecipeSummary]) -> String {
    let mut out = String::new();
    for (i, r) in recipes.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {} {}\n",
            i + 1,
            format!("[{}]", r.id).dimmed(),
            r.title.bold()
        ));
        let mut meta = Vec::new();
        if r.ready_in_minutes > 0 {
            meta.push(format!("{} min", r.ready_in_minutes));
        }
        if r.servings > 0 {
            meta.push(format!("serves {}", r.servings));
        }
        if r.health_score > 0.0 {
            meta.push(format!("health {:.0}", r.health_score));
        }
        if !meta.is_empty() {
            out.push_str(&format!("      {}\n", meta.join(" · ").dimmed()));
        }
    }
    out
}

pub fn product_list(products: &[ProductSummary]) -> String {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| format!("  {:>2}. {} {}\n", i + 1, format!("[{}]", p.id).dimmed(), p.title))
        .collect()
}

/// Full recipe page: header, summary, ingredients, nutrition
pub fn recipe_detail(view: &RecipeDetailView) -> String {
    let recipe = view.recipe();
    let info = view.summary();
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", info.title.bright_cyan().bold(), format!("[{}]", info.id).dimmed()));
    out.push_str(&format!(
        "Ready in {} min · Serves {} · Health score {:.0}\n",
        info.ready_in_minutes, info.servings, info.health_score
    ));

    let summary = view.summary_text();
    if !summary.is_empty() {
        out.push('\n');
        out.push_str(&summary);
        out.push('\n');
    }

    out.push_str(&format!("\n{}\n", "Ingredients".bright_cyan()));
    if recipe.extended_ingredients.is_empty() {
        out.push_str(&format!("  {}\n", "No ingredients listed.".dimmed()));
    }
    for ingredient in &recipe.extended_ingredients {
        out.push_str(&format!("  • {}\n", ingredient.display_text()));
    }

    let steps = recipe.steps();
    out.push_str(&format!("\n{}\n", "Instructions".bright_cyan()));
    if steps.is_empty() {
        out.push_str(&format!("  {}\n", "No instructions available.".dimmed()));
    }
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {}\n", i + 1, step.step));
    }

    let nutrients = view.headline_nutrients();
    if !nutrients.is_empty() {
        out.push_str(&format!("\n{}\n", "Nutrition".bright_cyan()));
        for n in nutrients {
            out.push_str(&format!("  {:<14} {:.0} {}\n", n.name, n.amount, n.unit));
        }
    }

    if !steps.is_empty() {
        out.push_str(&format!("\n{}\n", format!("/cook {} to cook step by step", info.id).dimmed()));
    }
    out
}

/// Current cook-mode step with a progress bar
pub fn cook_step(cook: &CookMode) -> String {
    let (cur, total) = cook.position();
    if total == 0 {
        return format!("{}\n", cook.current_text().bright_green());
    }
    let filled = (cook.progress_percent() / 100.0 * PROGRESS_WIDTH as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(PROGRESS_WIDTH - filled));
    format!(
        "{} {}/{} {} {:.0}%\n{}\n",
        "Step".bright_cyan(),
        cur,
        total,
        bar,
        cook.progress_percent(),
        cook.current_text()
    )
}

/// Week grid, one line per slot
pub fn planner(grid: &PlannerGrid) -> String {
    let mut out = String::new();
    for day in Day::ALL {
        out.push_str(&format!("{}\n", day.label().bold()));
        for slot in MealSlot::ALL {
            let cell = grid
                .get(&day)
                .and_then(|plan| plan.get(&slot))
                .map(|r| format!("{} {}", r.title, format!("[{}]", r.id).dimmed()))
                .unwrap_or_else(|| "-".dimmed().to_string());
            out.push_str(&format!("  {:<10} {}\n", slot.to_string(), cell));
        }
    }
    out
}

/// Grocery list grouped by aisle
pub fn grocery(groups: &[AisleGroup]) -> String {
    if groups.is_empty() {
        return format!("{}\n", "Your grocery list is empty.".dimmed());
    }
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("{}\n", group.aisle.bright_cyan()));
        for item in &group.items {
            let mark = if item.checked { "[x]".green() } else { "[ ]".normal() };
            let text = item.ingredient.display_text();
            let text = if item.checked { text.strikethrough().dimmed() } else { text.normal() };
            out.push_str(&format!(
                "  {} {} {}\n",
                mark,
                text,
                format!("({} {})", item.ingredient.id, item.ingredient.name).dimmed()
            ));
        }
    }
    out
}
