//! Synthetic recipe generation for bulk-populating the store.
//!
//! Each recipe gets one main ingredient, a weighted handful of secondary
//! picks, a few spices, and instruction steps assembled from a fixed
//! template pool. Existing data is discarded first; inserts commit in
//! batches of 50 so long runs show progress and keep transactions small.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::db;
use crate::error::StoreError;
use crate::schema::{ingredients, recipes};

pub const DEFAULT_COUNT: usize = 500;

const BATCH_SIZE: usize = 50;

/// Common pantry staples, vegetables, proteins, and spices.
const INGREDIENT_POOL: &[&str] = &[
    "rice", "pasta", "flour", "bread", "egg", "milk", "butter", "cheese", "yogurt", "cream",
    "tomato", "onion", "garlic", "ginger", "potato", "carrot", "peas", "beans", "spinach",
    "cabbage", "capsicum", "broccoli", "mushroom", "corn", "bell pepper", "chili", "lemon",
    "chicken", "mutton", "fish", "paneer", "tofu", "soy sauce", "vinegar", "olive oil",
    "vegetable oil", "salt", "pepper", "turmeric", "cumin", "coriander", "garam masala",
    "chili powder", "sugar", "honey", "peanut", "almond", "walnut", "sesame", "oats", "banana",
    "apple", "orange", "cocoa", "chocolate", "vanilla", "potato chips", "spring roll sheet",
    "noodles", "soy milk", "black pepper", "bay leaf", "cinnamon", "cardamom", "clove",
    "mustard seeds", "fenugreek",
];

const MAIN_INGREDIENTS: &[&str] = &[
    "rice", "pasta", "bread", "potato", "chicken", "paneer", "tofu", "egg", "fish", "mutton",
];

const SPICES: &[&str] = &[
    "salt", "pepper", "turmeric", "cumin", "coriander", "garam masala", "chili powder",
    "cinnamon", "cardamom",
];

/// Mains that pair with a boilable grain in the step templates.
const CARB_MAINS: &[&str] = &["rice", "pasta", "bread", "potato"];
const GRAINS: &[&str] = &["rice", "pasta", "quinoa", "bread"];

/// 3-5 of these are picked (without repeats) and filled in per recipe.
const STEP_TEMPLATES: &[&str] = &[
    "Prepare the main ingredient(s): {main}.",
    "Chop and clean vegetables: {vegs}.",
    "Heat oil in a pan and add spices: {spices}.",
    "Sauté onions and garlic until golden.",
    "Add {main} and cook until done.",
    "Boil {grain} until tender.",
    "Mix ingredients together and simmer for a few minutes.",
    "Bake in preheated oven at 180°C for 20-30 minutes.",
    "Garnish with coriander/lemon and serve hot.",
    "Whisk eggs and pour into pan, cook until set.",
    "Combine all ingredients and blend until smooth.",
    "Fry until golden and crisp, then drain on paper towels.",
    "Layer ingredients and steam for 10-15 minutes.",
];

const NAME_QUALIFIERS: &[&str] = &["Classic", "Simple", "Quick", "Homestyle"];
const NAME_DISHES: &[&str] = &["Curry", "Stir Fry", "Bake", "Salad", "Sandwich"];
const NAME_PAIRINGS: &[&str] = &["Garlic", "Herbs", "Spices", "Butter"];

/// Weights over 0..=3 secondary picks, biased toward 1-2.
const SECONDARY_COUNT_WEIGHTS: [u32; 4] = [5, 30, 40, 25];
/// 0-2 extras, usually none or one.
const EXTRA_COUNTS: [usize; 5] = [0, 0, 1, 1, 2];

/// Generate `count` recipes, replacing whatever the store held before.
/// Returns final (recipe, ingredient-row) counts.
pub fn generate<R: Rng>(
    conn: &mut SqliteConnection,
    count: usize,
    rng: &mut R,
) -> Result<(i64, i64), StoreError> {
    clear_store(conn)?;

    let secondary_dist =
        WeightedIndex::new(SECONDARY_COUNT_WEIGHTS).expect("static weights are valid");

    let mut inserted = 0;
    while inserted < count {
        let batch = BATCH_SIZE.min(count - inserted);
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            for _ in 0..batch {
                insert_synthetic_recipe(conn, rng, &secondary_dist)?;
            }
            Ok(())
        })?;
        inserted += batch;
        tracing::info!(inserted, "committed batch");
    }

    let recipe_count = recipes::table.count().get_result::<i64>(conn)?;
    let ingredient_count = ingredients::table.count().get_result::<i64>(conn)?;
    Ok((recipe_count, ingredient_count))
}

/// Ingredient rows first so the dangling-reference window never opens.
fn clear_store(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(ingredients::table).execute(conn)?;
        diesel::delete(recipes::table).execute(conn)?;
        Ok(())
    })?;
    Ok(())
}

fn insert_synthetic_recipe<R: Rng>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    secondary_dist: &WeightedIndex<u32>,
) -> QueryResult<i32> {
    let main = pick(rng, MAIN_INGREDIENTS);

    let secondary_count = secondary_dist.sample(rng);
    let secondary_pool: Vec<&str> = INGREDIENT_POOL
        .iter()
        .copied()
        .filter(|&i| i != main)
        .collect();
    let secondaries: Vec<&str> = secondary_pool
        .choose_multiple(rng, secondary_count)
        .copied()
        .collect();

    let spice_count = rng.gen_range(1..=3);
    let spices: Vec<&str> = SPICES.choose_multiple(rng, spice_count).copied().collect();

    let extra_count = pick(rng, &EXTRA_COUNTS);
    let extra_pool: Vec<&str> = INGREDIENT_POOL
        .iter()
        .copied()
        .filter(|&i| i != main && !secondaries.contains(&i))
        .collect();
    let extras: Vec<&str> = extra_pool.choose_multiple(rng, extra_count).copied().collect();

    let ingredient_names: Vec<String> = std::iter::once(main)
        .chain(secondaries.iter().copied())
        .chain(spices.iter().copied())
        .chain(extras.iter().copied())
        .map(|i| i.trim().to_lowercase())
        .collect();

    let grain = CARB_MAINS.contains(&main).then(|| pick(rng, GRAINS));
    let name = recipe_name(rng, main);
    let steps = recipe_steps(rng, main, &secondaries, grain, &spices);

    db::insert_recipe(conn, &name, &steps, &ingredient_names)
}

fn pick<R: Rng, T: Copy>(rng: &mut R, pool: &[T]) -> T {
    pool[rng.gen_range(0..pool.len())]
}

fn recipe_name<R: Rng>(rng: &mut R, main: &str) -> String {
    let main = title_case(main);
    match rng.gen_range(0..5) {
        0 => format!("{main} Delight"),
        1 => format!("Easy {main} {}", pick(rng, NAME_DISHES)),
        2 => format!("{main} & Veg Mix"),
        3 => format!("{} {main}", pick(rng, NAME_QUALIFIERS)),
        _ => format!("{main} with {}", pick(rng, NAME_PAIRINGS)),
    }
}

fn recipe_steps<R: Rng>(
    rng: &mut R,
    main: &str,
    vegs: &[&str],
    grain: Option<&str>,
    spices: &[&str],
) -> Vec<String> {
    let step_count = rng.gen_range(3..=5);
    let vegs_text = if vegs.is_empty() {
        "vegetables".to_string()
    } else {
        vegs.join(", ")
    };
    let spices_text = if spices.is_empty() {
        "spices".to_string()
    } else {
        spices.join(", ")
    };

    STEP_TEMPLATES
        .choose_multiple(rng, step_count)
        .map(|template| {
            template
                .replace("{main}", main)
                .replace("{vegs}", &vegs_text)
                .replace("{grain}", grain.unwrap_or("grain"))
                .replace("{spices}", &spices_text)
        })
        .collect()
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
