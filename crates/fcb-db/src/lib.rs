pub mod assemble;
pub mod models;
pub mod repositories;

use std::time::Duration;

use anyhow::Context;
use sqlx::{PgPool, Postgres, migrate::MigrateDatabase, postgres::PgPoolOptions};

pub use repositories::WriteOutcome;

/// Create a PostgreSQL connection pool.
///
/// `acquire_timeout` bounds how long a request may wait for a free connection.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
        .context("failed to connect to database")?;

    Ok(pool)
}

/// Ensure the database exists and run migrations in this crate's `migrations/` folder.
pub async fn ensure_db_and_migrate(database_url: &str, pool: &PgPool) -> anyhow::Result<()> {
    // Ensure database exists (no-op if it already does)
    let exists = Postgres::database_exists(database_url)
        .await
        .context("failed to check database existence")?;
    if !exists {
        Postgres::create_database(database_url)
            .await
            .context("failed to create database")?;
    }

    // Run migrations bundled at compile time from `migrations/`
    sqlx::migrate!()
        .run(pool)
        .await
        .context("failed to run migrations")?;

    Ok(())
}
