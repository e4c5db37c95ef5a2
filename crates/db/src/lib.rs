//! SQLite-backed persistence for app records.
//!
//! [`DBService`] owns the connection and guarantees the schema exists before
//! any model operation runs; the models in [`models`] implement the CRUD
//! surface with domain-level error semantics.

pub mod error;
pub mod models;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::error::DbError;

#[derive(Clone)]
pub struct DBService {
    pub pool: SqlitePool,
}

impl DBService {
    /// Open (or create) the database at `path` and ensure the schema exists.
    ///
    /// The containing directory is created if absent. Schema creation failure
    /// is fatal to the caller: the service cannot serve requests without it.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            // Prevent transient "database is locked" errors under concurrent access.
            .busy_timeout(Duration::from_secs(5));

        // Single process-wide connection; SQLite is the sole writer here.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await?;

        let service = Self { pool };
        service.migrate().await?;
        Ok(service)
    }

    /// In-memory database for tests. Keeps its single connection alive for
    /// the lifetime of the pool so data survives between calls.
    pub async fn new_in_memory() -> Result<Self, DbError> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?;

        let service = Self { pool };
        service.migrate().await?;
        Ok(service)
    }

    /// Create the schema if it does not exist yet. Idempotent.
    pub async fn migrate(&self) -> Result<(), DbError> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS apps (
                id          TEXT PRIMARY KEY,
                name        TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL DEFAULT '',
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS app_code (
                id             TEXT PRIMARY KEY,
                app_id         TEXT NOT NULL,
                requirement    TEXT,
                generated_code TEXT,
                created_at     TEXT NOT NULL,
                FOREIGN KEY (app_id) REFERENCES apps (id) ON DELETE CASCADE
            )"#,
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!("database schema verified");
        Ok(())
    }

    /// Close the connection. Safe to call when already closed.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
