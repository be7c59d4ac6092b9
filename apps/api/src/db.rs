use std::path::Path;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

/// Creates the SQLite connection pool, creating the database file (and its
/// parent directory) on first run.
pub async fn create_pool(database_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = database_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .context("Failed to create database directory")?;
    }

    let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
    info!("Connecting to SQLite at {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .context("Failed to connect to SQLite database")?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the schema. Idempotent; runs at every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            company TEXT NOT NULL DEFAULT '',
            email TEXT,
            industry TEXT NOT NULL DEFAULT '',
            platform TEXT NOT NULL,
            profile_url TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id TEXT PRIMARY KEY,
            profile_id TEXT NOT NULL,
            channel TEXT NOT NULL,
            subject TEXT,
            content TEXT NOT NULL,
            cta TEXT NOT NULL,
            tone TEXT NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY(profile_id) REFERENCES profiles(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            profile_id TEXT NOT NULL,
            action TEXT NOT NULL,
            data TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            FOREIGN KEY(profile_id) REFERENCES profiles(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_profiles_industry ON profiles(industry)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_profile ON messages(profile_id)")
        .execute(pool)
        .await?;

    info!("Database migrations completed");
    Ok(())
}
