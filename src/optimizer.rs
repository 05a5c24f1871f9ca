//! Greedy ingredient allocation for Alchemax.
//!
//! This module contains the core algorithm that assigns the finite
//! ingredient stock to potion recipes. Recipes are processed in descending
//! gold-value order and each one is crafted repeatedly until its ingredients
//! run out, so a scarce ingredient shared between two recipes always goes to
//! the more valuable one. Reading the finished list in ascending order then
//! yields the leveling-friendly crafting sequence: cheap potions first while
//! the skill multiplier is low, expensive ones saved for the end.

use std::collections::HashMap;

use crate::models::{IngredientMap, RecipeMap};

/// Assigns ingredient stock to recipes, recording completions in place.
///
/// Both collections are borrowed mutably for the duration of the call:
/// ingredient quantities only decrease and recipe completion counts only
/// increase. The processing order (recipe values, descending) is fixed up
/// front and never re-derived mid-run; once a recipe fails its availability
/// check it is never attempted again. Depletion is monotonic, so a single
/// pass per recipe suffices.
///
/// A recipe naming an ingredient that is missing from the inventory is
/// simply unsatisfiable; that is a normal outcome, not an error.
///
/// # Example
///
/// ```
/// use alchemax::models::{Ingredient, IngredientMap, Recipe, RecipeMap};
/// use alchemax::optimizer::allocate;
///
/// let mut ingredients = IngredientMap::new();
/// ingredients.insert("salt".into(), Ingredient::new("salt", 2));
/// ingredients.insert("water".into(), Ingredient::new("water", 1));
///
/// let mut recipes = RecipeMap::new();
/// recipes.insert(
///     10,
///     Recipe::new(["salt".into(), "salt".into(), "water".into()], 10),
/// );
///
/// allocate(&mut ingredients, &mut recipes);
/// assert_eq!(recipes[&10].quantity(), 1);
/// assert!(ingredients["salt"].is_depleted());
/// ```
pub fn allocate(ingredients: &mut IngredientMap, recipes: &mut RecipeMap) {
    // Most valuable recipe claims ingredients first.
    let order: Vec<u32> = recipes.keys().rev().copied().collect();

    for value in order {
        let Some(recipe) = recipes.get_mut(&value) else {
            continue;
        };
        let needed = recipe.ingredients().clone();

        while can_craft(&needed, ingredients) {
            for name in &needed {
                if let Some(ingredient) = ingredients.get_mut(name) {
                    ingredient.deduct();
                }
            }
            recipe.add_completion();
        }
    }
}

/// Checks whether every required ingredient occurrence is in stock.
///
/// An ingredient missing from the inventory and one depleted to zero are
/// treated identically: the recipe cannot be made. A name listed more than
/// once in the recipe needs that many units of stock, since each occurrence
/// consumes its own unit.
fn can_craft(needed: &[String], ingredients: &IngredientMap) -> bool {
    let mut required: HashMap<&str, u32> = HashMap::new();
    for name in needed {
        *required.entry(name.as_str()).or_insert(0) += 1;
    }

    required.iter().all(|(name, count)| {
        ingredients
            .get(*name)
            .is_some_and(|ingredient| ingredient.quantity() >= *count)
    })
}
