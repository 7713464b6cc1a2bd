pub mod categories;
pub mod products;

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

// Alias for "Pool<Sqlite>"
pub type DbPool = Pool<Sqlite>;

pub async fn init_db(db_url: &str) -> Result<DbPool, sqlx::Error> {
    // The database file is created on first start. category_id is a weak
    // reference, so sqlx's default of enforcing foreign keys is switched off
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Single-connection in-memory store. Every call yields an isolated database.
pub async fn init_in_memory() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

    // The memory database lives as long as its one connection, so never recycle it
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Creates both tables if they are missing. Safe to run on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // category_id is declared but not enforced (foreign_keys is off on every connection)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT,
            shop TEXT,
            price INTEGER NOT NULL,
            image_filename TEXT,
            category_id INTEGER REFERENCES categories(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("schema ready");
    Ok(())
}
