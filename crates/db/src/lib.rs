//! PostgreSQL persistence for the gym back-office.
//!
//! - [`collection`] -- the generic CRUD abstraction shared by every table.
//! - [`models`] -- row structs, save DTOs and [`collection::Collection`] impls.
//! - [`repositories`] -- queries that span tables or need a transaction.

use sqlx::postgres::PgPoolOptions;

pub mod collection;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
