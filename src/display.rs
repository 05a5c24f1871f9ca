//! Report formatting for Alchemax.
//!
//! This module renders the allocation result as the crafting list written to
//! the output file and echoed to the terminal.

use crate::models::{IngredientMap, Recipe, RecipeMap};

/// Emitted when the allocation completed no recipe at all.
pub const NO_MATCHES: &str = "No matching potions found.";

/// Introductory line of a non-empty crafting list.
pub const REPORT_HEADER: &str =
    "For optimal leveling, you can craft the following with your provided ingredients: ";

/// Completed recipes in ascending gold-value order.
///
/// Recipes that were never crafted are skipped.
pub fn completed_recipes(recipes: &RecipeMap) -> impl Iterator<Item = &Recipe> {
    recipes.values().filter(|recipe| recipe.quantity() > 0)
}

/// Renders the final crafting list.
///
/// If nothing could be crafted the result is exactly [`NO_MATCHES`].
/// Otherwise it is [`REPORT_HEADER`] followed by one line per completed
/// recipe in ascending value order, each rendered as
/// `"<quantity> x <ingredient>, <ingredient>, <ingredient>"` and
/// newline-terminated.
///
/// # Example
///
/// ```
/// use alchemax::display::format_report;
/// use alchemax::models::RecipeMap;
///
/// assert_eq!(format_report(&RecipeMap::new()), "No matching potions found.");
/// ```
pub fn format_report(recipes: &RecipeMap) -> String {
    let mut lines = String::new();
    for recipe in completed_recipes(recipes) {
        lines.push_str(&recipe.to_string());
        lines.push('\n');
    }

    if lines.is_empty() {
        NO_MATCHES.to_string()
    } else {
        format!("{REPORT_HEADER}\n{lines}")
    }
}

/// Lists the ingredients still in stock after allocation, name-sorted.
///
/// Depleted ingredients are omitted. Returns an empty string when the
/// inventory was consumed completely.
pub fn format_leftovers(ingredients: &IngredientMap) -> String {
    let mut remaining: Vec<_> = ingredients
        .values()
        .filter(|ingredient| !ingredient.is_depleted())
        .collect();
    remaining.sort_by(|a, b| a.name().cmp(b.name()));

    let mut out = String::new();
    for ingredient in remaining {
        out.push_str(&ingredient.to_string());
        out.push('\n');
    }
    out
}
