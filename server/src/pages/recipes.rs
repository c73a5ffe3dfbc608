use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use larder_core::query::{search_recipes, RecipeFilter, RecipeMatch, RecipePage};
use larder_core::{db, tagger};
use maud::{html, Markup};
use serde::Deserialize;

use crate::templates;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// 1-based; a non-numeric value is rejected by the extractor before the
    /// handler runs.
    pub page: Option<u32>,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub time: Option<String>,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Response {
    let filter = RecipeFilter {
        ingredients: Vec::new(),
        cuisines: split_values(params.cuisine.as_deref()),
        diets: split_values(params.diet.as_deref()),
        prep_times: split_values(params.time.as_deref()),
    };
    render_listing(&state, filter, i64::from(params.page.unwrap_or(1)))
}

/// Shared by `GET /recipes` and the pantry form POST. Opens a store
/// connection for the duration of this call only.
pub fn render_listing(state: &AppState, filter: RecipeFilter, page: i64) -> Response {
    let mut conn = match db::connect(&state.database_url) {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(error = %e, "failed to open store");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                templates::error_page("The recipe store is unavailable."),
            )
                .into_response();
        }
    };

    match search_recipes(&mut conn, &filter, page) {
        Ok(results) => templates::base("Recipes", listing(&filter, &results)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "recipe search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                templates::error_page("The recipe search failed."),
            )
                .into_response()
        }
    }
}

fn listing(filter: &RecipeFilter, results: &RecipePage) -> Markup {
    html! {
        h1 { "Recipes" }
        @if !filter.ingredients.is_empty() {
            p { "Using your pantry: " (filter.ingredients.join(", ")) }
        }
        p { (results.total) " matching recipes" }
        div class="layout" {
            (sidebar(filter))
            div class="cards" {
                @if results.items.is_empty() {
                    p { "No recipes on this page." }
                }
                @for item in &results.items {
                    (card(item))
                }
            }
        }
        (pager(filter, results))
    }
}

fn card(item: &RecipeMatch) -> Markup {
    html! {
        div class="recipe-card" {
            h3 { (item.name) }
            p class="tags" {
                (item.cuisine.as_deref().unwrap_or("Untagged"))
                " · "
                (item.diet.as_deref().unwrap_or("Untagged"))
                " · "
                (item.prep_time.as_deref().unwrap_or("Untagged"))
            }
            p { (item.ingredients.join(", ")) }
            @if item.score > 0 {
                p class="match" { "Matches " (item.score) " of your ingredients" }
            }
        }
    }
}

fn sidebar(filter: &RecipeFilter) -> Markup {
    html! {
        div class="sidebar" {
            (filter_group("Cuisine", Group::Cuisine, filter))
            (filter_group("Diet", Group::Diet, filter))
            (filter_group("Prep time", Group::PrepTime, filter))
        }
    }
}

#[derive(Clone, Copy)]
enum Group {
    Cuisine,
    Diet,
    PrepTime,
}

impl Group {
    fn options(self) -> Vec<&'static str> {
        match self {
            Group::Cuisine => {
                tagger::category_options(tagger::CUISINE_RULES, tagger::DEFAULT_CUISINE)
            }
            Group::Diet => tagger::category_options(tagger::DIET_RULES, tagger::DEFAULT_DIET),
            Group::PrepTime => {
                tagger::category_options(tagger::PREP_TIME_RULES, tagger::DEFAULT_PREP_TIME)
            }
        }
    }

    fn selected(self, filter: &RecipeFilter) -> &[String] {
        match self {
            Group::Cuisine => &filter.cuisines,
            Group::Diet => &filter.diets,
            Group::PrepTime => &filter.prep_times,
        }
    }
}

fn filter_group(title: &str, group: Group, filter: &RecipeFilter) -> Markup {
    let selected = group.selected(filter);
    html! {
        h3 { (title) }
        @for option in group.options() {
            @let active = selected.iter().any(|v| v == option);
            a class=(if active { "active" } else { "" })
                href=(toggle_href(filter, group, option)) {
                (option)
            }
        }
    }
}

/// Link that adds or removes one category value, resetting to page 1.
fn toggle_href(filter: &RecipeFilter, group: Group, value: &str) -> String {
    let mut cuisines = filter.cuisines.clone();
    let mut diets = filter.diets.clone();
    let mut prep_times = filter.prep_times.clone();

    let target = match group {
        Group::Cuisine => &mut cuisines,
        Group::Diet => &mut diets,
        Group::PrepTime => &mut prep_times,
    };
    match target.iter().position(|v| v == value) {
        Some(idx) => {
            target.remove(idx);
        }
        None => target.push(value.to_string()),
    }

    build_href(&cuisines, &diets, &prep_times, 1)
}

fn page_href(filter: &RecipeFilter, page: i64) -> String {
    build_href(&filter.cuisines, &filter.diets, &filter.prep_times, page)
}

fn build_href(cuisines: &[String], diets: &[String], prep_times: &[String], page: i64) -> String {
    let mut parts = Vec::new();
    if page > 1 {
        parts.push(format!("page={page}"));
    }
    if !cuisines.is_empty() {
        parts.push(format!("cuisine={}", cuisines.join(",")));
    }
    if !diets.is_empty() {
        parts.push(format!("diet={}", diets.join(",")));
    }
    if !prep_times.is_empty() {
        parts.push(format!("time={}", prep_times.join(",")));
    }

    if parts.is_empty() {
        "/recipes".to_string()
    } else {
        format!("/recipes?{}", parts.join("&"))
    }
}

fn pager(filter: &RecipeFilter, results: &RecipePage) -> Markup {
    html! {
        div class="pager" {
            @if results.page > 1 {
                a href=(page_href(filter, results.page - 1)) { "Previous" }
            }
            span { "Page " (results.page) " of " (results.total_pages.max(1)) }
            @if results.page < results.total_pages {
                a href=(page_href(filter, results.page + 1)) { "Next" }
            }
        }
    }
}

/// Comma-separated query values to trimmed tokens, empties dropped. Values
/// stay as given; tag membership is exact.
fn split_values(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
