//! Database error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain-level database errors.
///
/// `DuplicateName` and `NotFound` are typed outcomes callers branch on;
/// `Database` wraps any other driver failure and is surfaced as-is, never
/// retried.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("app name already exists: {0}")]
    DuplicateName(String),

    #[error("app not found: {0}")]
    NotFound(Uuid),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for database operations.
pub type DbResult<T> = std::result::Result<T, DbError>;
