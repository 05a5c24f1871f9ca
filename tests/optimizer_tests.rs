//! Tests for the greedy ingredient allocation algorithm.

use alchemax::data::{load_ingredients, load_recipes, IniConfig};
use alchemax::display::format_report;
use alchemax::models::{Ingredient, IngredientMap, Recipe, RecipeMap};
use alchemax::optimizer::allocate;

fn inventory(entries: &[(&str, u32)]) -> IngredientMap {
    entries
        .iter()
        .map(|(name, quantity)| (name.to_string(), Ingredient::new(name, *quantity)))
        .collect()
}

fn recipe_book(entries: &[([&str; 3], u32)]) -> RecipeMap {
    entries
        .iter()
        .map(|(names, value)| {
            let ingredients = [
                names[0].to_string(),
                names[1].to_string(),
                names[2].to_string(),
            ];
            (*value, Recipe::new(ingredients, *value))
        })
        .collect()
}

#[test]
fn test_single_recipe_crafted_until_stock_runs_out() {
    let mut ingredients = inventory(&[("a", 4), ("b", 4), ("c", 4)]);
    let mut recipes = recipe_book(&[(["a", "b", "c"], 50)]);

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(recipes[&50].quantity(), 4);
    assert!(ingredients["a"].is_depleted());
    assert!(ingredients["b"].is_depleted());
    assert!(ingredients["c"].is_depleted());
}

#[test]
fn test_duplicate_ingredient_consumes_one_unit_per_occurrence() {
    // salt appears twice, so each completion costs two units of salt.
    let mut ingredients = inventory(&[("salt", 2), ("water", 1)]);
    let mut recipes = recipe_book(&[(["salt", "salt", "water"], 10)]);

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(recipes[&10].quantity(), 1, "Should craft exactly once");
    assert!(ingredients["salt"].is_depleted());
    assert!(ingredients["water"].is_depleted());
    assert_eq!(recipes[&10].to_string(), "1 x salt, salt, water");
}

#[test]
fn test_duplicate_ingredient_never_drives_stock_negative() {
    // Two occurrences of salt but only one unit in stock: the recipe is
    // unsatisfiable and the single unit stays untouched.
    let mut ingredients = inventory(&[("salt", 1), ("water", 5)]);
    let mut recipes = recipe_book(&[(["salt", "salt", "water"], 10)]);

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(recipes[&10].quantity(), 0);
    assert_eq!(ingredients["salt"].quantity(), 1);
    assert_eq!(ingredients["water"].quantity(), 5);
}

#[test]
fn test_missing_ingredient_blocks_recipe_silently() {
    let mut ingredients = inventory(&[("x", 5)]);
    let mut recipes = recipe_book(&[(["x", "y", "z"], 1)]);

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(
        recipes[&1].quantity(),
        0,
        "Recipe referencing absent ingredients should never complete"
    );
    assert_eq!(ingredients["x"].quantity(), 5, "No partial deduction");
}

#[test]
fn test_higher_value_recipe_claims_shared_ingredient_first() {
    // Both recipes need the single unit of nirnroot; the more valuable one
    // is processed first and starves the other.
    let mut ingredients = inventory(&[("nirnroot", 1), ("wheat", 2), ("garlic", 2)]);
    let mut recipes = recipe_book(&[
        (["nirnroot", "wheat", "garlic"], 30),
        (["nirnroot", "wheat", "garlic"], 200),
    ]);

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(recipes[&200].quantity(), 1);
    assert_eq!(
        recipes[&30].quantity(),
        0,
        "Lower-value recipe loses the shared ingredient even though it could \
         have been made on its own"
    );
}

#[test]
fn test_lower_value_recipe_gets_what_remains() {
    let mut ingredients = inventory(&[("wheat", 3), ("garlic", 3), ("salt", 3)]);
    let mut recipes = recipe_book(&[
        (["wheat", "garlic", "salt"], 100),
        (["wheat", "garlic", "salt"], 25),
    ]);

    allocate(&mut ingredients, &mut recipes);

    // The high-value recipe exhausts the stock before the low one runs.
    assert_eq!(recipes[&100].quantity(), 3);
    assert_eq!(recipes[&25].quantity(), 0);
}

#[test]
fn test_independent_recipes_both_complete() {
    let mut ingredients = inventory(&[
        ("a", 1),
        ("b", 1),
        ("c", 1),
        ("x", 2),
        ("y", 2),
        ("z", 2),
    ]);
    let mut recipes = recipe_book(&[(["a", "b", "c"], 40), (["x", "y", "z"], 15)]);

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(recipes[&40].quantity(), 1);
    assert_eq!(recipes[&15].quantity(), 2);
}

#[test]
fn test_empty_recipe_book_leaves_inventory_untouched() {
    let mut ingredients = inventory(&[("wheat", 5)]);
    let mut recipes = RecipeMap::new();

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(ingredients["wheat"].quantity(), 5);
}

#[test]
fn test_empty_inventory_completes_nothing() {
    let mut ingredients = IngredientMap::new();
    let mut recipes = recipe_book(&[(["a", "b", "c"], 10)]);

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(recipes[&10].quantity(), 0);
}

#[test]
fn test_allocation_is_deterministic() {
    let base_ingredients = inventory(&[("wheat", 7), ("garlic", 4), ("salt", 9), ("toe", 2)]);
    let base_recipes = recipe_book(&[
        (["wheat", "garlic", "salt"], 120),
        (["wheat", "salt", "salt"], 80),
        (["toe", "wheat", "garlic"], 310),
    ]);

    let mut first_ingredients = base_ingredients.clone();
    let mut first_recipes = base_recipes.clone();
    allocate(&mut first_ingredients, &mut first_recipes);

    for _ in 0..10 {
        let mut ingredients = base_ingredients.clone();
        let mut recipes = base_recipes.clone();
        allocate(&mut ingredients, &mut recipes);

        for (value, recipe) in &recipes {
            assert_eq!(
                recipe.quantity(),
                first_recipes[value].quantity(),
                "Repeated runs must produce identical completion counts"
            );
        }
        for (name, ingredient) in &ingredients {
            assert_eq!(
                ingredient.quantity(),
                first_ingredients[name].quantity(),
                "Repeated runs must produce identical leftover stock"
            );
        }
    }
}

#[test]
fn test_ingredients_never_increase_and_completions_never_decrease() {
    let before = inventory(&[("wheat", 5), ("garlic", 2), ("salt", 8)]);
    let mut after = before.clone();
    let mut recipes = recipe_book(&[
        (["wheat", "garlic", "salt"], 60),
        (["wheat", "salt", "salt"], 45),
    ]);

    allocate(&mut after, &mut recipes);

    for (name, ingredient) in &after {
        assert!(
            ingredient.quantity() <= before[name].quantity(),
            "Stock of '{name}' must not grow during allocation"
        );
    }

    // Every completion accounts for exactly one unit of wheat, so the
    // completion total and the wheat drawdown must agree.
    let completions: u32 = recipes.values().map(|recipe| recipe.quantity()).sum();
    assert_eq!(
        before["wheat"].quantity() - after["wheat"].quantity(),
        completions
    );
}

#[test]
fn test_full_run_from_config_text() {
    let config = IniConfig::parse(
        "[ingredients]\n\
         wheat = 3\n\
         giants toe = 1\n\
         garlic = 4\n\
         salt pile = 4\n\
         \n\
         [potions]\n\
         wheat, giants toe, garlic = 398\n\
         wheat, garlic, salt pile = 78\n\
         frost mirriam, wheat, garlic = 210\n",
    );
    let mut ingredients = load_ingredients(&config).expect("config should load");
    let mut recipes = load_recipes(&config).expect("config should load");

    allocate(&mut ingredients, &mut recipes);

    // 398 claims one of everything it needs; 210 is blocked by the missing
    // frost mirriam; 78 gets the remaining two wheat.
    assert_eq!(recipes[&398].quantity(), 1);
    assert_eq!(recipes[&210].quantity(), 0);
    assert_eq!(recipes[&78].quantity(), 2);

    let report = format_report(&recipes);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 3, "Header plus the two completed recipes");
    assert_eq!(lines[1], "2 x wheat, garlic, salt pile");
    assert_eq!(lines[2], "1 x wheat, giants toe, garlic");
}

#[test]
fn test_run_with_nothing_craftable_reports_sentinel() {
    let config = IniConfig::parse(
        "[ingredients]\n\
         wheat = 2\n\
         \n\
         [potions]\n\
         wheat, nirnroot, garlic = 150\n",
    );
    let mut ingredients = load_ingredients(&config).expect("config should load");
    let mut recipes = load_recipes(&config).expect("config should load");

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(format_report(&recipes), "No matching potions found.");
}

#[test]
fn test_completions_limited_by_scarcest_ingredient() {
    let mut ingredients = inventory(&[("wheat", 10), ("garlic", 10), ("salt", 2)]);
    let mut recipes = recipe_book(&[(["wheat", "garlic", "salt"], 55)]);

    allocate(&mut ingredients, &mut recipes);

    assert_eq!(recipes[&55].quantity(), 2);
    assert_eq!(ingredients["wheat"].quantity(), 8);
    assert_eq!(ingredients["garlic"].quantity(), 8);
    assert!(ingredients["salt"].is_depleted());
}
