//! Query engine behavior against the sample data set.

use diesel::sqlite::SqliteConnection;
use larder_core::query::{search_recipes, RecipeFilter};
use larder_core::{db, seed, tagger};

fn seeded_conn() -> SqliteConnection {
    let mut conn = db::connect(":memory:").expect("in-memory store");
    seed::seed(&mut conn).expect("seed data");
    conn
}

fn names(page: &larder_core::RecipePage) -> Vec<&str> {
    page.items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn empty_filter_returns_everything() {
    let mut conn = seeded_conn();
    let page = search_recipes(&mut conn, &RecipeFilter::default(), 1).unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 1);
    assert_eq!(
        names(&page),
        vec!["Pasta with Tomato Sauce", "Veggie Stir Fry", "Garlic Butter Rice"]
    );
}

#[test]
fn ingredient_filter_uses_or_semantics() {
    let mut conn = seeded_conn();
    let filter = RecipeFilter {
        ingredients: vec!["garlic".to_string()],
        ..Default::default()
    };
    let page = search_recipes(&mut conn, &filter, 1).unwrap();
    assert_eq!(
        names(&page),
        vec!["Pasta with Tomato Sauce", "Garlic Butter Rice"]
    );

    let filter = RecipeFilter {
        ingredients: vec!["garlic".to_string(), "broccoli".to_string()],
        ..Default::default()
    };
    let page = search_recipes(&mut conn, &filter, 1).unwrap();
    assert_eq!(page.total, 3);
}

#[test]
fn ingredient_matching_is_partial_and_case_insensitive() {
    let mut conn = seeded_conn();
    let filter = RecipeFilter {
        ingredients: vec!["TOMAT".to_string()],
        ..Default::default()
    };
    let page = search_recipes(&mut conn, &filter, 1).unwrap();
    assert_eq!(names(&page), vec!["Pasta with Tomato Sauce"]);
}

#[test]
fn cuisine_filter_selects_only_tagged_matches() {
    let mut conn = seeded_conn();
    tagger::tag_all(&mut conn).unwrap();

    let filter = RecipeFilter {
        cuisines: vec!["Italian".to_string()],
        ..Default::default()
    };
    let page = search_recipes(&mut conn, &filter, 1).unwrap();
    assert_eq!(names(&page), vec!["Pasta with Tomato Sauce"]);
}

#[test]
fn untagged_recipes_never_match_categorical_filters() {
    let mut conn = seeded_conn();
    let filter = RecipeFilter {
        cuisines: vec!["Italian".to_string()],
        ..Default::default()
    };
    let page = search_recipes(&mut conn, &filter, 1).unwrap();
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
}

#[test]
fn filter_groups_combine_with_and() {
    let mut conn = seeded_conn();
    tagger::tag_all(&mut conn).unwrap();

    let filter = RecipeFilter {
        ingredients: vec!["broccoli".to_string()],
        cuisines: vec!["Italian".to_string()],
        ..Default::default()
    };
    assert_eq!(search_recipes(&mut conn, &filter, 1).unwrap().total, 0);

    let filter = RecipeFilter {
        ingredients: vec!["garlic".to_string()],
        cuisines: vec!["Italian".to_string()],
        ..Default::default()
    };
    assert_eq!(
        names(&search_recipes(&mut conn, &filter, 1).unwrap()),
        vec!["Pasta with Tomato Sauce"]
    );
}

#[test]
fn membership_filters_accept_multiple_values() {
    let mut conn = seeded_conn();
    tagger::tag_all(&mut conn).unwrap();

    let filter = RecipeFilter {
        cuisines: vec!["Italian".to_string(), "Chinese".to_string()],
        ..Default::default()
    };
    let page = search_recipes(&mut conn, &filter, 1).unwrap();
    assert_eq!(
        names(&page),
        vec!["Pasta with Tomato Sauce", "Veggie Stir Fry"]
    );
}

#[test]
fn results_carry_the_full_ingredient_list() {
    let mut conn = seeded_conn();
    let filter = RecipeFilter {
        ingredients: vec!["tomato".to_string()],
        ..Default::default()
    };
    let page = search_recipes(&mut conn, &filter, 1).unwrap();
    assert_eq!(page.items[0].ingredients, vec!["pasta", "tomato", "garlic"]);
}

#[test]
fn score_counts_matched_pantry_terms() {
    let mut conn = seeded_conn();
    let filter = RecipeFilter {
        ingredients: vec!["garlic".to_string(), "butter".to_string()],
        ..Default::default()
    };
    let page = search_recipes(&mut conn, &filter, 1).unwrap();
    let scores: Vec<(&str, usize)> = page
        .items
        .iter()
        .map(|i| (i.name.as_str(), i.score))
        .collect();
    assert_eq!(
        scores,
        vec![("Pasta with Tomato Sauce", 1), ("Garlic Butter Rice", 2)]
    );

    let page = search_recipes(&mut conn, &RecipeFilter::default(), 1).unwrap();
    assert!(page.items.iter().all(|i| i.score == 0));
}

#[test]
fn out_of_range_page_is_empty_not_an_error() {
    let mut conn = seeded_conn();
    let page = search_recipes(&mut conn, &RecipeFilter::default(), 5).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn empty_store_yields_zero_totals() {
    let mut conn = db::connect(":memory:").unwrap();
    let page = search_recipes(&mut conn, &RecipeFilter::default(), 1).unwrap();
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
}
