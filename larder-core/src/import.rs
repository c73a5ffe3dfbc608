//! JSON recipe import.
//!
//! Reads an array of `{name, steps, ingredients}` records and appends them
//! to the store. The whole run is one transaction, so a failed import leaves
//! the store untouched.

use std::fs;
use std::path::Path;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use serde::Deserialize;

use crate::db;
use crate::error::ImportError;

#[derive(Debug, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

pub fn import_file(conn: &mut SqliteConnection, path: &Path) -> Result<usize, ImportError> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<RecipeRecord> = serde_json::from_str(&raw)?;
    import_records(conn, &records)
}

/// Insert the records, recipe before its ingredients, normalizing every
/// ingredient name to lowercase and trimmed.
pub fn import_records(
    conn: &mut SqliteConnection,
    records: &[RecipeRecord],
) -> Result<usize, ImportError> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        for record in records {
            let normalized: Vec<String> = record
                .ingredients
                .iter()
                .map(|i| i.trim().to_lowercase())
                .collect();
            db::insert_recipe(conn, &record.name, &record.steps, &normalized)?;
        }
        Ok(())
    })?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_parse_with_missing_optional_fields() {
        let records: Vec<RecipeRecord> =
            serde_json::from_str(r#"[{"name": "Plain Toast"}]"#).unwrap();
        assert_eq!(records[0].name, "Plain Toast");
        assert!(records[0].steps.is_empty());
        assert!(records[0].ingredients.is_empty());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result: Result<Vec<RecipeRecord>, _> = serde_json::from_str("{not json");
        assert!(result.is_err());
    }
}
