use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to open database: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("Database query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("Migration failed: {0}")]
    Migration(String),
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read import file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Store(#[from] diesel::result::Error),
}
