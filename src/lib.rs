pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod money;
pub mod store;
pub mod telemetry;
pub mod tui;
pub mod validation;

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::Result;

/// Open the SQLite database, creating the file if needed, and run migrations
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    if !sqlx::Sqlite::database_exists(database_url).await? {
        info!(database_url, "Creating database");
        sqlx::Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!(database_url, "Database ready");

    Ok(pool)
}
