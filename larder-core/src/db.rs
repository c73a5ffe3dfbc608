use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::StoreError;
use crate::models::{NewIngredient, NewRecipe};
use crate::schema::{ingredients, recipes};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

/// Open a connection and bring the schema up to date.
///
/// Connections are scoped to a single request or utility run; dropping the
/// handle closes it. There is no pool.
pub fn connect(database_url: &str) -> Result<SqliteConnection, StoreError> {
    let mut conn = SqliteConnection::establish(database_url)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::Migration(e.to_string()))?;
    Ok(conn)
}

/// Insert a recipe and its ingredient rows, recipe first so every ingredient
/// row references an existing recipe id. Ingredient names are stored as
/// given; callers normalize before inserting.
pub fn insert_recipe(
    conn: &mut SqliteConnection,
    name: &str,
    steps: &[String],
    ingredient_names: &[String],
) -> QueryResult<i32> {
    let encoded = crate::models::encode_steps(steps);
    let recipe_id: i32 = diesel::insert_into(recipes::table)
        .values(NewRecipe {
            name,
            steps: Some(&encoded),
        })
        .returning(recipes::id)
        .get_result(conn)?;

    for ingredient in ingredient_names {
        diesel::insert_into(ingredients::table)
            .values(NewIngredient {
                recipe_id,
                name: ingredient,
            })
            .execute(conn)?;
    }

    Ok(recipe_id)
}
