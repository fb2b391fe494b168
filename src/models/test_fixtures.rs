use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::config::DEFAULT_STORAGE_KEY;
use crate::models::Item;
use crate::money::Money;
use crate::store::{InMemoryItemRepository, SqliteItemRepository};

/// Test fixture that creates an in-memory SQLite database with migrations applied
///
/// This fixture can be imported and used across all tests that touch storage to
/// ensure consistency in test database setup.
#[fixture]
pub async fn test_db() -> SqlitePool {
    // Create an in-memory SQLite database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[fixture]
pub async fn sqlite_repo(#[future] test_db: SqlitePool) -> SqliteItemRepository {
    SqliteItemRepository::new(test_db.await, DEFAULT_STORAGE_KEY)
}

#[fixture]
pub fn memory_repo() -> InMemoryItemRepository {
    InMemoryItemRepository::default()
}

#[fixture]
pub fn rice() -> Item {
    Item::new("Arroz", "Tio João", 2, Money::from_centavos(250))
}

#[fixture]
pub fn beans() -> Item {
    Item::new("Feijão", "Camil", 1, Money::from_centavos(899))
}
