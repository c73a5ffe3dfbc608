use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder_core::explore::StoreSummary;
use larder_core::{db, explore, generate, import, seed, tagger};

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Larder store maintenance utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert the three sample recipes
    Seed,
    /// Generate synthetic recipes, replacing all existing data
    Generate {
        /// Number of recipes to generate
        #[arg(default_value_t = generate::DEFAULT_COUNT)]
        count: usize,
    },
    /// Import recipes from a JSON file
    Import {
        /// Path to a JSON array of {name, steps, ingredients} records
        #[arg(default_value = "recipes.json")]
        path: PathBuf,
    },
    /// Tag every recipe with cuisine, diet, and prep time
    Tag,
    /// Print store counts and sample rows
    Explore,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "recipes.db".to_string());
    let mut conn = db::connect(&database_url)?;

    match cli.command {
        Commands::Seed => {
            let count = seed::seed(&mut conn)?;
            println!("Seeded {count} sample recipes.");
        }
        Commands::Generate { count } => {
            println!("Generating {count} synthetic recipes into {database_url}");
            let (recipes, ingredient_rows) =
                generate::generate(&mut conn, count, &mut rand::thread_rng())?;
            println!("Done.");
            println!("Recipes inserted: {recipes}");
            println!("Ingredient rows: {ingredient_rows}");
        }
        Commands::Import { path } => {
            let count = import::import_file(&mut conn, &path)?;
            println!("Inserted {count} recipes into {database_url}");
        }
        Commands::Tag => {
            let count = tagger::tag_all(&mut conn)?;
            println!("Tagged {count} recipes successfully.");
        }
        Commands::Explore => {
            print_summary(&explore::summarize(&mut conn)?);
        }
    }

    Ok(())
}

fn print_summary(summary: &StoreSummary) {
    println!("Total recipes in DB: {}", summary.recipe_count);
    println!("Total ingredient rows in DB: {}", summary.ingredient_count);

    println!("\nSample ingredients (first 30):");
    for name in &summary.sample_ingredients {
        println!(" - {name}");
    }

    println!("\nSample recipes with ingredients:");
    for recipe in &summary.sample_recipes {
        println!("{}: {}", recipe.id, recipe.name);
        println!("   Ingredients: {}", recipe.ingredients.join(", "));
    }
}
