pub mod db;
pub mod error;
pub mod explore;
pub mod generate;
pub mod import;
pub mod models;
pub mod query;
pub mod schema;
pub mod seed;
pub mod tagger;

pub use error::{ImportError, StoreError};
pub use query::{search_recipes, RecipeFilter, RecipeMatch, RecipePage, PAGE_SIZE};
