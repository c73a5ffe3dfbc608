//! Keyword-based cuisine, diet, and prep-time classification.
//!
//! Each rule table is an ordered list of (category, keywords) pairs. The
//! first declared category with a keyword found in the recipe text wins, so
//! a recipe mentioning both "paneer" and "masala" tags as Indian. Keeping
//! the tables as slices rather than maps preserves that tie-break.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::error::StoreError;
use crate::models::{Ingredient, Recipe};
use crate::schema::{ingredients, recipes};

pub type RuleTable = &'static [(&'static str, &'static [&'static str])];

pub const CUISINE_RULES: RuleTable = &[
    ("Indian", &["paneer", "masala", "dal", "biryani"]),
    ("Italian", &["pasta", "spaghetti", "pizza"]),
    ("Chinese", &["noodles", "soy sauce", "manchurian"]),
];

pub const DIET_RULES: RuleTable = &[
    ("Non-Vegetarian", &["chicken", "mutton", "beef", "fish"]),
    ("Vegetarian", &["paneer", "cheese", "egg"]),
    ("Vegan", &["tofu", "lentil", "beans"]),
];

pub const PREP_TIME_RULES: RuleTable = &[
    ("Under30", &["salad", "sandwich", "toast"]),
    ("Over60", &["biryani", "slow", "roast"]),
];

pub const DEFAULT_CUISINE: &str = "Various";
pub const DEFAULT_DIET: &str = "Unknown";
pub const DEFAULT_PREP_TIME: &str = "30to60";

/// Classify lowercased recipe text against one rule table. Scans categories
/// in declared order and returns the first whose keyword list contains a
/// substring of the text.
pub fn classify(text: &str, rules: RuleTable) -> Option<&'static str> {
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
}

/// Category labels a rule table can produce, including its fallback.
/// Used to build the filter sidebar.
pub fn category_options(rules: RuleTable, default: &'static str) -> Vec<&'static str> {
    rules
        .iter()
        .map(|(category, _)| *category)
        .chain(std::iter::once(default))
        .collect()
}

/// Tag every recipe from its name plus ingredient names, overwriting any
/// previous tags. Re-running on unchanged data assigns identical tags.
/// Returns the number of recipes updated.
pub fn tag_all(conn: &mut SqliteConnection) -> Result<usize, StoreError> {
    let all: Vec<Recipe> = recipes::table
        .order(recipes::id.asc())
        .select(Recipe::as_select())
        .load(conn)?;
    let grouped = Ingredient::belonging_to(&all)
        .order(ingredients::id.asc())
        .select(Ingredient::as_select())
        .load::<Ingredient>(conn)?
        .grouped_by(&all);

    let mut updated = 0;
    for (recipe, rows) in all.iter().zip(grouped) {
        let names: Vec<String> = rows.into_iter().map(|i| i.name).collect();
        let text = format!("{} {}", recipe.name, names.join(" ")).to_lowercase();

        let cuisine = classify(&text, CUISINE_RULES).unwrap_or(DEFAULT_CUISINE);
        let diet = classify(&text, DIET_RULES).unwrap_or(DEFAULT_DIET);
        let prep_time = classify(&text, PREP_TIME_RULES).unwrap_or(DEFAULT_PREP_TIME);

        diesel::update(recipes::table.find(recipe.id))
            .set((
                recipes::cuisine.eq(cuisine),
                recipes::diet.eq(diet),
                recipes::prep_time.eq(prep_time),
            ))
            .execute(conn)?;
        updated += 1;
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declared_category_wins() {
        // "paneer" (Indian) and "pasta" (Italian) both match; Indian is
        // declared first.
        assert_eq!(classify("paneer pasta bake", CUISINE_RULES), Some("Indian"));
        assert_eq!(classify("paneer masala", CUISINE_RULES), Some("Indian"));
    }

    #[test]
    fn keywords_match_as_substrings() {
        assert_eq!(classify("spaghetti bolognese", CUISINE_RULES), Some("Italian"));
        assert_eq!(classify("stir fry with soy sauce", CUISINE_RULES), Some("Chinese"));
    }

    #[test]
    fn no_match_yields_none() {
        assert_eq!(classify("garlic butter rice", CUISINE_RULES), None);
        assert_eq!(classify("", PREP_TIME_RULES), None);
    }

    #[test]
    fn diet_order_prefers_non_vegetarian() {
        // "chicken" (Non-Vegetarian) beats "cheese" (Vegetarian).
        assert_eq!(
            classify("chicken and cheese melt", DIET_RULES),
            Some("Non-Vegetarian")
        );
        assert_eq!(classify("paneer tikka", DIET_RULES), Some("Vegetarian"));
    }

    #[test]
    fn options_include_the_default() {
        assert_eq!(
            category_options(CUISINE_RULES, DEFAULT_CUISINE),
            vec!["Indian", "Italian", "Chinese", "Various"]
        );
        assert_eq!(
            category_options(PREP_TIME_RULES, DEFAULT_PREP_TIME),
            vec!["Under30", "Over60", "30to60"]
        );
    }
}
