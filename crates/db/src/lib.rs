//! Database access layer: pool construction, migrations, models, and
//! repositories for the Holocron catalog service.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod models;
pub mod repositories;

/// Convenience alias so callers don't depend on the concrete driver.
pub type DbPool = SqlitePool;

/// Create a connection pool from a `sqlite://` connection string.
///
/// The database file is created on first connect. Foreign key
/// enforcement is left off: the schema carries no cascade/restrict
/// rules and deletes are hard deletes, so referencing rows may outlive
/// their referents.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Apply any pending migrations from the embedded `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Database migrations up to date");
    Ok(())
}
