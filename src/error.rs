use thiserror::Error;

use crate::validation::{Field, FieldError};

#[derive(Error, Debug)]
pub enum ShopListError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Stored list is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored item {index} has an invalid {field}: {reason}")]
    CorruptCollection {
        index: usize,
        field: Field,
        reason: FieldError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShopListError>;
