//! Data models and structures for Alchemax.
//!
//! This module contains the core data structures used throughout the
//! application: ingredients, potion recipes, and the collection types the
//! allocation engine operates on.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Every potion recipe combines exactly this many ingredients.
pub const RECIPE_LENGTH: usize = 3;

/// Maps a lowercase ingredient name to its remaining stock.
pub type IngredientMap = HashMap<String, Ingredient>;

/// Maps a recipe's gold value to the recipe itself.
///
/// The gold value doubles as the recipe's priority key, so it must be unique;
/// inserting a second recipe with the same value overwrites the first. The
/// ordered map gives the report its ascending order and, iterated in reverse,
/// the engine its descending processing order.
pub type RecipeMap = BTreeMap<u32, Recipe>;

/// A named, quantity-limited consumable resource.
///
/// Names are case-insensitive and stored lowercase. The quantity counts how
/// many more times this ingredient can go into a recipe; once it reaches
/// zero it is depleted for the rest of the run (there is no replenishment).
///
/// # Example
///
/// ```
/// use alchemax::models::Ingredient;
///
/// let mut salt = Ingredient::new("Salt Pile", 2);
/// assert_eq!(salt.name(), "salt pile");
/// salt.deduct();
/// salt.deduct();
/// assert!(salt.is_depleted());
/// ```
#[derive(Debug, Clone)]
pub struct Ingredient {
    name: String,
    quantity: u32,
}

impl Ingredient {
    /// Creates an ingredient, normalizing the name to lowercase.
    pub fn new(name: &str, quantity: u32) -> Self {
        Self {
            name: name.to_lowercase(),
            quantity,
        }
    }

    /// The lowercase ingredient name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units of this ingredient still available.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `true` once the stock has been used up.
    pub fn is_depleted(&self) -> bool {
        self.quantity == 0
    }

    /// Consumes one unit of stock.
    ///
    /// The caller must have verified availability first (see
    /// [`is_depleted`](Self::is_depleted)); deducting a depleted ingredient
    /// is a contract violation, not a guarded branch.
    pub fn deduct(&mut self) {
        self.quantity -= 1;
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.quantity)
    }
}

/// A potion recipe: three ingredient names, a gold value, and a counter of
/// how many times it has been crafted.
///
/// The gold value is both the reward for crafting the potion and the unique
/// priority weight the allocation engine sorts by. Duplicate names within the
/// ingredient list are allowed and each occurrence consumes its own unit of
/// stock.
///
/// # Example
///
/// ```
/// use alchemax::models::Recipe;
///
/// let mut recipe = Recipe::new(
///     ["Wheat".into(), "Giants Toe".into(), "Creep Cluster".into()],
///     398,
/// );
/// recipe.add_completion();
/// assert_eq!(recipe.to_string(), "1 x wheat, giants toe, creep cluster");
/// ```
#[derive(Debug, Clone)]
pub struct Recipe {
    ingredients: [String; RECIPE_LENGTH],
    value: u32,
    quantity: u32,
}

impl Recipe {
    /// Creates a recipe with zero completions, normalizing every ingredient
    /// name to lowercase.
    pub fn new(mut ingredients: [String; RECIPE_LENGTH], value: u32) -> Self {
        for name in &mut ingredients {
            *name = name.to_lowercase();
        }
        Self {
            ingredients,
            value,
            quantity: 0,
        }
    }

    /// The three required ingredient names, in recipe order.
    pub fn ingredients(&self) -> &[String; RECIPE_LENGTH] {
        &self.ingredients
    }

    /// Gold value of one crafted potion; also the priority key.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// How many times this recipe has been crafted so far.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Records one successful crafting of this recipe.
    pub fn add_completion(&mut self) {
        self.quantity += 1;
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.quantity, self.ingredients.join(", "))
    }
}
