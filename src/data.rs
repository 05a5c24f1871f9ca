//! Config loading functionality for Alchemax.
//!
//! This module reads the INI-style config file that lists the player's
//! ingredient stock and the known potion recipes, and turns the two sections
//! into the collections the allocation engine consumes.
//!
//! # Config format
//!
//! ```ini
//! [ingredients]
//! wheat = 5
//! giants toe = 2
//!
//! [potions]
//! wheat, giants toe, creep cluster = 398
//! ```
//!
//! Ingredient keys are names (trimmed, lowercased) mapped to an integer
//! stock count. Potion keys are exactly three comma-separated ingredient
//! names mapped to the potion's gold value, which must be unique because it
//! doubles as the recipe's priority. A duplicated gold value silently
//! replaces the earlier recipe (last entry in file order wins).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{Ingredient, IngredientMap, Recipe, RecipeMap, RECIPE_LENGTH};

/// Section header line, e.g. `[potions]`.
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static SECTION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*\[([^\]]*)\]\s*$").ok());

/// Key/value line, e.g. `wheat = 5`.
static KEY_VALUE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*([^=]*)=(.*)$").ok());

/// Errors raised while loading the config file.
///
/// All of these are fatal for the run: a config that cannot be read or
/// parsed halts the whole load rather than skipping the bad entry.
#[derive(Debug, Error)]
pub enum DataError {
    /// The config file could not be read at all.
    #[error("failed to read config file '{path}': {source}")]
    ConfigLoad {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A required section is absent from the config.
    #[error("config is missing the [{0}] section")]
    MissingSection(&'static str),

    /// An ingredient's stock count is not a valid non-negative integer.
    #[error("invalid quantity '{raw}' for ingredient '{name}'")]
    InvalidQuantity {
        /// Ingredient the bad count belongs to.
        name: String,
        /// The unparseable text.
        raw: String,
    },

    /// A recipe's gold value is not a valid positive integer.
    #[error("invalid gold value '{raw}' for recipe '{key}'")]
    InvalidValue {
        /// The recipe's ingredient-list key.
        key: String,
        /// The unparseable text.
        raw: String,
    },

    /// A recipe does not list exactly three comma-separated ingredients.
    #[error("recipe '{0}' must list exactly 3 comma-separated ingredients")]
    MalformedRecipe(String),
}

/// Parsed INI config: named sections of key/value entries.
///
/// Entries keep their file order within each section so that later entries
/// deterministically win when keys collide downstream.
#[derive(Debug, Default)]
pub struct IniConfig {
    sections: HashMap<String, Vec<(String, String)>>,
}

impl IniConfig {
    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::ConfigLoad`] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let text = fs::read_to_string(path).map_err(|source| DataError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Parses INI text line by line.
    ///
    /// Lines that are neither a `[section]` header nor a `key=value` pair
    /// (and key/value pairs appearing before any section header) are
    /// ignored. Keys and values are trimmed; empty keys are dropped.
    pub fn parse(text: &str) -> Self {
        let mut sections: HashMap<String, Vec<(String, String)>> = HashMap::new();
        let mut current: Option<String> = None;

        for line in text.lines() {
            if let Some(caps) = SECTION_PATTERN.as_ref().and_then(|re| re.captures(line)) {
                current = Some(caps[1].trim().to_string());
                continue;
            }
            let Some(section) = &current else { continue };
            if let Some(caps) = KEY_VALUE_PATTERN.as_ref().and_then(|re| re.captures(line)) {
                let key = caps[1].trim().to_string();
                let value = caps[2].trim().to_string();
                if !key.is_empty() {
                    sections
                        .entry(section.clone())
                        .or_default()
                        .push((key, value));
                }
            }
        }

        Self { sections }
    }

    /// All entries of a section, in file order, or `None` if the section
    /// never appeared.
    pub fn section(&self, name: &str) -> Option<&[(String, String)]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    /// Looks up a single key in a section; the last matching entry wins.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Builds the ingredient inventory from the `[ingredients]` section.
///
/// Keys become lowercase ingredient names; values must parse as integer
/// stock counts. A name listed twice keeps its last count.
///
/// # Errors
///
/// Returns [`DataError::MissingSection`] if there is no `[ingredients]`
/// section, or [`DataError::InvalidQuantity`] on an unparseable count.
pub fn load_ingredients(config: &IniConfig) -> Result<IngredientMap, DataError> {
    let entries = config
        .section("ingredients")
        .ok_or(DataError::MissingSection("ingredients"))?;

    let mut ingredients = IngredientMap::new();
    for (key, value) in entries {
        let name = key.to_lowercase();
        let quantity = value
            .parse::<u32>()
            .map_err(|_| DataError::InvalidQuantity {
                name: name.clone(),
                raw: value.clone(),
            })?;
        ingredients.insert(name.clone(), Ingredient::new(&name, quantity));
    }
    Ok(ingredients)
}

/// Builds the recipe book from the `[potions]` section.
///
/// Each key is split on commas into exactly [`RECIPE_LENGTH`] ingredient
/// names (trimmed, lowercased); the value is the potion's gold worth and
/// becomes the recipe's map key. Recipes sharing a gold value collapse to
/// the one loaded last.
///
/// # Errors
///
/// Returns [`DataError::MissingSection`] if there is no `[potions]` section,
/// [`DataError::MalformedRecipe`] when a key does not split into exactly
/// three names, or [`DataError::InvalidValue`] on an unparseable gold value.
pub fn load_recipes(config: &IniConfig) -> Result<RecipeMap, DataError> {
    let entries = config
        .section("potions")
        .ok_or(DataError::MissingSection("potions"))?;

    let mut recipes = RecipeMap::new();
    for (key, value) in entries {
        let names: Vec<&str> = key.split(',').map(str::trim).collect();
        if names.len() != RECIPE_LENGTH || names.iter().any(|n| n.is_empty()) {
            return Err(DataError::MalformedRecipe(key.clone()));
        }
        let gold = value.parse::<u32>().map_err(|_| DataError::InvalidValue {
            key: key.clone(),
            raw: value.clone(),
        })?;
        let ingredients = [
            names[0].to_string(),
            names[1].to_string(),
            names[2].to_string(),
        ];
        recipes.insert(gold, Recipe::new(ingredients, gold));
    }
    Ok(recipes)
}
