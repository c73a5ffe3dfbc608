use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::Response;
use larder_core::query::RecipeFilter;
use maud::{html, Markup};
use serde::Deserialize;

use crate::pages::recipes;
use crate::templates;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PantryForm {
    #[serde(default)]
    pub ingredients: String,
}

pub async fn form() -> Markup {
    templates::base(
        "Your pantry",
        html! {
            h1 { "Your pantry" }
            p { "List the ingredients you have, separated by commas." }
            form class="pantry" method="post" action="/ingredients" {
                input type="text" name="ingredients" placeholder="tomato, garlic, rice" autofocus;
                button type="submit" { "Find recipes" }
            }
        },
    )
}

/// Forwards straight to the recipe listing with the pantry filter applied.
pub async fn submit(State(state): State<Arc<AppState>>, Form(form): Form<PantryForm>) -> Response {
    let filter = RecipeFilter {
        ingredients: split_terms(&form.ingredients),
        ..Default::default()
    };
    recipes::render_listing(&state, filter, 1)
}

/// Comma-separated free text to lowercase trimmed tokens, empties dropped.
fn split_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
