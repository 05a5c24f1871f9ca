//! Alchemax - Command Line Interface
//!
//! This is the main entry point for the Alchemy leveling optimizer.
//! Run with `--help` to see all available options.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use alchemax::{
    data::{load_ingredients, load_recipes, DataError, IniConfig},
    display::{format_leftovers, format_report},
    optimizer::allocate,
};

/// Command-line arguments for Alchemax.
#[derive(Parser, Debug)]
#[command(name = "alchemax")]
#[command(author, version, about = "Generate an optimal potion crafting list for leveling Alchemy in Skyrim", long_about = None)]
struct Args {
    /// Path to the INI config listing ingredient stock and potion recipes
    #[arg(short, long, default_value = "config.ini")]
    config: PathBuf,

    /// Path the generated crafting list is written to
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Print the ingredient stock left over after allocation
    #[arg(long, default_value = "false")]
    leftovers: bool,
}

fn fatal(error: &DataError) -> ! {
    eprintln!("Error: {error}");
    process::exit(1);
}

fn main() {
    let args = Args::parse();

    println!("Alchemax - Skyrim Alchemy Leveling Optimizer");
    println!("================================================================");

    let config = match IniConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(error) => fatal(&error),
    };
    let mut ingredients = match load_ingredients(&config) {
        Ok(ingredients) => ingredients,
        Err(error) => fatal(&error),
    };
    let mut recipes = match load_recipes(&config) {
        Ok(recipes) => recipes,
        Err(error) => fatal(&error),
    };

    println!();
    println!(
        "Loaded {} ingredients and {} recipes from '{}'.",
        ingredients.len(),
        recipes.len(),
        args.config.display()
    );

    allocate(&mut ingredients, &mut recipes);

    let report = format_report(&recipes);
    if let Err(error) = fs::write(&args.output, &report) {
        eprintln!(
            "Error: failed to write output file '{}': {error}",
            args.output.display()
        );
        process::exit(1);
    }

    println!();
    println!("{report}");
    println!("Crafting list written to '{}'.", args.output.display());

    if args.leftovers {
        println!();
        println!("Leftover ingredients:");
        let leftovers = format_leftovers(&ingredients);
        if leftovers.is_empty() {
            println!("  (none)");
        } else {
            print!("{leftovers}");
        }
    }
}
