//! Filtered, paginated recipe retrieval.
//!
//! Categorical filters (cuisine, diet, prep time) are pushed down to the
//! store as membership tests on the tag columns. The pantry filter inspects
//! a recipe's full ingredient set, so it runs in memory after the recipes
//! and their ingredient rows have been loaded.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::error::StoreError;
use crate::models::{Ingredient, Recipe};
use crate::schema::{ingredients, recipes};

pub const PAGE_SIZE: i64 = 12;

/// Filter criteria for a recipe search. Every group is optional; an empty
/// group places no constraint on that axis. Active groups combine with AND.
#[derive(Debug, Default, Clone)]
pub struct RecipeFilter {
    /// Pantry terms. A recipe qualifies if ANY term is a case-insensitive
    /// substring of ANY of its ingredient names ("tomato" matches
    /// "cherry tomato").
    pub ingredients: Vec<String>,
    pub cuisines: Vec<String>,
    pub diets: Vec<String>,
    pub prep_times: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RecipeMatch {
    pub id: i32,
    pub name: String,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub prep_time: Option<String>,
    /// The recipe's full ingredient list, not just the names that matched
    /// the pantry filter.
    pub ingredients: Vec<String>,
    /// Number of pantry terms that matched at least one ingredient. Zero
    /// when no pantry filter was supplied. Does not affect result order.
    pub score: usize,
}

#[derive(Debug, Clone)]
pub struct RecipePage {
    pub items: Vec<RecipeMatch>,
    /// Matching recipes before pagination.
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

/// Run a search and return the requested page (1-based, fixed size of 12).
///
/// A page past the end of the results yields an empty item list, not an
/// error. An empty result set yields `total = 0` and `total_pages = 0`.
/// Result order is recipe id order.
pub fn search_recipes(
    conn: &mut SqliteConnection,
    filter: &RecipeFilter,
    page: i64,
) -> Result<RecipePage, StoreError> {
    let mut query = recipes::table.order(recipes::id.asc()).into_boxed();

    if !filter.cuisines.is_empty() {
        query = query.filter(recipes::cuisine.eq_any(as_nullable(&filter.cuisines)));
    }
    if !filter.diets.is_empty() {
        query = query.filter(recipes::diet.eq_any(as_nullable(&filter.diets)));
    }
    if !filter.prep_times.is_empty() {
        query = query.filter(recipes::prep_time.eq_any(as_nullable(&filter.prep_times)));
    }

    let candidates: Vec<Recipe> = query.select(Recipe::as_select()).load(conn)?;
    let ingredient_rows: Vec<Ingredient> = Ingredient::belonging_to(&candidates)
        .order(ingredients::id.asc())
        .select(Ingredient::as_select())
        .load(conn)?;
    let grouped = ingredient_rows.grouped_by(&candidates);

    let terms: Vec<String> = filter
        .ingredients
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    let mut matches = Vec::new();
    for (recipe, rows) in candidates.into_iter().zip(grouped) {
        let names: Vec<String> = rows.into_iter().map(|i| i.name).collect();
        let Some(score) = pantry_score(&terms, &names) else {
            continue;
        };
        matches.push(RecipeMatch {
            id: recipe.id,
            name: recipe.name,
            cuisine: recipe.cuisine,
            diet: recipe.diet,
            prep_time: recipe.prep_time,
            ingredients: names,
            score,
        });
    }

    let total = matches.len() as i64;
    let total_pages = page_count(total);
    let items = page_slice(matches, page);

    Ok(RecipePage {
        items,
        total,
        page,
        total_pages,
    })
}

fn as_nullable(values: &[String]) -> Vec<Option<String>> {
    values.iter().cloned().map(Some).collect()
}

/// OR semantics within the pantry term list. Returns how many terms matched
/// at least one ingredient name, or `None` if the recipe does not qualify.
/// An empty term list qualifies everything with a score of zero.
fn pantry_score(terms: &[String], ingredient_names: &[String]) -> Option<usize> {
    if terms.is_empty() {
        return Some(0);
    }
    let lowered: Vec<String> = ingredient_names.iter().map(|n| n.to_lowercase()).collect();
    let score = terms
        .iter()
        .filter(|term| lowered.iter().any(|name| name.contains(term.as_str())))
        .count();
    (score > 0).then_some(score)
}

fn page_count(total: i64) -> i64 {
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

/// Slice out the 1-based page. No bound checking: pages past the end (or
/// below 1) are simply empty.
fn page_slice<T>(items: Vec<T>, page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    items
        .into_iter()
        .skip(start as usize)
        .take(PAGE_SIZE as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_term_list_matches_everything() {
        assert_eq!(pantry_score(&[], &terms(&["rice"])), Some(0));
        assert_eq!(pantry_score(&[], &[]), Some(0));
    }

    #[test]
    fn any_term_qualifies() {
        let names = terms(&["rice", "garlic", "butter"]);
        assert_eq!(pantry_score(&terms(&["garlic", "anchovy"]), &names), Some(1));
        assert_eq!(pantry_score(&terms(&["garlic", "butter"]), &names), Some(2));
        assert_eq!(pantry_score(&terms(&["anchovy"]), &names), None);
    }

    #[test]
    fn matching_is_substring_and_case_insensitive() {
        let names = terms(&["Cherry Tomato"]);
        assert_eq!(pantry_score(&terms(&["tomato"]), &names), Some(1));
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(12), 1);
        assert_eq!(page_count(13), 2);
        assert_eq!(page_count(36), 3);
    }

    #[test]
    fn page_slice_is_contiguous() {
        let items: Vec<i64> = (0..30).collect();
        assert_eq!(page_slice(items.clone(), 1), (0..12).collect::<Vec<_>>());
        assert_eq!(page_slice(items.clone(), 2), (12..24).collect::<Vec<_>>());
        assert_eq!(page_slice(items.clone(), 3), (24..30).collect::<Vec<_>>());
        assert!(page_slice(items.clone(), 4).is_empty());
        assert!(page_slice(items, 0).is_empty());
    }
}
