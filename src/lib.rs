//! # Alchemax
//!
//! A command-line crafting aid for leveling Alchemy in The Elder Scrolls V:
//! Skyrim.
//!
//! Given the player's ingredient stock and a book of potion recipes (both
//! read from an INI config file), this crate computes which potions to craft
//! and in what order. Alchemy experience scales with potion value, so the
//! generated list puts the cheapest potions first and the most valuable ones
//! last; following it top to bottom makes the experience curve compound.
//! Crafting the list bottom-up instead yields the most gold-per-potion
//! start, because scarce ingredients were already assigned to the highest
//! value recipes during allocation.
//!
//! ## Modules
//!
//! - [`models`] - Ingredients, recipes, and the inventory collections
//! - [`data`] - INI config loading and the loader error types
//! - [`optimizer`] - The greedy ingredient allocation algorithm
//! - [`display`] - Crafting-list and leftover-stock formatting
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use alchemax::{
//!     data::{load_ingredients, load_recipes, IniConfig},
//!     display::format_report,
//!     optimizer::allocate,
//! };
//!
//! # fn main() -> Result<(), alchemax::data::DataError> {
//! let config = IniConfig::from_file(Path::new("config.ini"))?;
//! let mut ingredients = load_ingredients(&config)?;
//! let mut recipes = load_recipes(&config)?;
//!
//! allocate(&mut ingredients, &mut recipes);
//! println!("{}", format_report(&recipes));
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod display;
pub mod models;
pub mod optimizer;
