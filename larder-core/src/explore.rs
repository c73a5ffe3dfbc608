//! Read-only store inspection for the `explore` utility.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::error::StoreError;
use crate::models::{Ingredient, Recipe};
use crate::schema::{ingredients, recipes};

const SAMPLE_INGREDIENT_LIMIT: i64 = 30;
const SAMPLE_RECIPE_LIMIT: i64 = 10;

#[derive(Debug)]
pub struct RecipeSample {
    pub id: i32,
    pub name: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug)]
pub struct StoreSummary {
    pub recipe_count: i64,
    pub ingredient_count: i64,
    /// First 30 distinct ingredient names, sorted.
    pub sample_ingredients: Vec<String>,
    /// First 10 recipes with their ingredient lists.
    pub sample_recipes: Vec<RecipeSample>,
}

pub fn summarize(conn: &mut SqliteConnection) -> Result<StoreSummary, StoreError> {
    let recipe_count = recipes::table.count().get_result(conn)?;
    let ingredient_count = ingredients::table.count().get_result(conn)?;

    let sample_ingredients = ingredients::table
        .select(ingredients::name)
        .distinct()
        .order(ingredients::name.asc())
        .limit(SAMPLE_INGREDIENT_LIMIT)
        .load(conn)?;

    let sample: Vec<Recipe> = recipes::table
        .order(recipes::id.asc())
        .limit(SAMPLE_RECIPE_LIMIT)
        .select(Recipe::as_select())
        .load(conn)?;
    let grouped = Ingredient::belonging_to(&sample)
        .order(ingredients::id.asc())
        .select(Ingredient::as_select())
        .load::<Ingredient>(conn)?
        .grouped_by(&sample);

    let sample_recipes = sample
        .into_iter()
        .zip(grouped)
        .map(|(recipe, rows)| RecipeSample {
            id: recipe.id,
            name: recipe.name,
            ingredients: rows.into_iter().map(|i| i.name).collect(),
        })
        .collect();

    Ok(StoreSummary {
        recipe_count,
        ingredient_count,
        sample_ingredients,
        sample_recipes,
    })
}
