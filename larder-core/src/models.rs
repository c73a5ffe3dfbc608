use diesel::prelude::*;

use crate::schema::{ingredients, recipes};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub steps: Option<String>,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub prep_time: Option<String>,
}

impl Recipe {
    /// Decode the stored step sequence. Rows written before any steps were
    /// recorded decode to an empty list.
    pub fn step_list(&self) -> Vec<String> {
        decode_steps(self.steps.as_deref())
    }
}

#[derive(Insertable)]
#[diesel(table_name = recipes)]
pub struct NewRecipe<'a> {
    pub name: &'a str,
    pub steps: Option<&'a str>,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(Recipe))]
#[diesel(table_name = ingredients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Ingredient {
    pub id: i32,
    pub recipe_id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = ingredients)]
pub struct NewIngredient<'a> {
    pub recipe_id: i32,
    pub name: &'a str,
}

/// Serialize instruction steps for storage as a JSON array. Step text may
/// contain any character, so a plain joined string is not safe to round-trip.
pub fn encode_steps(steps: &[String]) -> String {
    serde_json::to_string(steps).expect("a string array always serializes")
}

/// Inverse of [`encode_steps`]. `None` decodes to an empty list.
pub fn decode_steps(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(s).ok()).unwrap_or_default()
}
