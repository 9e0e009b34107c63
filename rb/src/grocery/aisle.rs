//! Aisle-grouped projection of the grocery list

use std::collections::HashMap;

use serde::Serialize;

use super::GroceryItem;

/// Bucket for items with no aisle
pub const OTHER_AISLE: &str = "Other";

/// Items sharing an aisle label, in list order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AisleGroup {
    pub aisle: String,
    pub items: Vec<GroceryItem>,
}

fn aisle_label(item: &GroceryItem) -> &str {
    let aisle = item.ingredient.aisle.trim();
    if aisle.is_empty() { OTHER_AISLE } else { aisle }
}

/// Partition items by aisle
///
/// Groups come back sorted by label ignoring case (ties broken by the exact
/// label); items inside a group keep their input order.
pub fn group_by_aisle(items: &[GroceryItem]) -> Vec<AisleGroup> {
    let mut groups: Vec<AisleGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let label = aisle_label(item);
        let slot = *index.entry(label).or_insert_with(|| {
            groups.push(AisleGroup {
                aisle: label.to_string(),
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item.clone());
    }

    groups.sort_by(|a, b| {
        a.aisle
            .to_lowercase()
            .cmp(&b.aisle.to_lowercase())
            .then_with(|| a.aisle.cmp(&b.aisle))
    });
    groups
}
