//! Sample data for a fresh store.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db;
use crate::error::StoreError;

pub struct SeedRecipe {
    pub name: &'static str,
    pub steps: &'static [&'static str],
    pub ingredients: &'static [&'static str],
}

pub const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        name: "Pasta with Tomato Sauce",
        steps: &["Boil pasta", "Make tomato sauce", "Mix and serve"],
        ingredients: &["pasta", "tomato", "garlic"],
    },
    SeedRecipe {
        name: "Veggie Stir Fry",
        steps: &["Chop vegetables", "Stir fry with soy sauce", "Serve hot"],
        ingredients: &["broccoli", "carrot", "soy sauce"],
    },
    SeedRecipe {
        name: "Garlic Butter Rice",
        steps: &["Cook rice", "Fry garlic in butter", "Mix and serve"],
        ingredients: &["rice", "garlic", "butter"],
    },
];

/// Insert the sample recipes. Appends; does not clear existing rows.
pub fn seed(conn: &mut SqliteConnection) -> Result<usize, StoreError> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        for recipe in SAMPLE_RECIPES {
            let steps: Vec<String> = recipe.steps.iter().map(|s| s.to_string()).collect();
            let ingredients: Vec<String> =
                recipe.ingredients.iter().map(|s| s.to_string()).collect();
            db::insert_recipe(conn, recipe.name, &steps, &ingredients)?;
        }
        Ok(())
    })?;
    Ok(SAMPLE_RECIPES.len())
}
