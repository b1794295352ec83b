//! Pool construction and person table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// DDL applied at startup; every statement is idempotent.
const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS person (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_person_name ON person (name)",
    "CREATE INDEX IF NOT EXISTS idx_person_age ON person (age)",
];

/// Open a pool for `database_url`, creating the database file if missing.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the person table and its indexes if they do not exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in SCHEMA_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
