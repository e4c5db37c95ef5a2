use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::error::{DbError, DbResult};

/// A user-defined application entry.
///
/// `created_at` is set once at creation and never changes; `updated_at` is
/// refreshed on every successful update. `name` is unique across all records
/// (case-sensitive), enforced by the storage layer's unique constraint.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApp {
    pub name: String,
    pub description: Option<String>,
}

impl App {
    pub async fn create(pool: &SqlitePool, data: &CreateApp, id: Uuid) -> DbResult<Self> {
        let now = Utc::now();
        let description = data.description.clone().unwrap_or_default();
        sqlx::query_as::<_, App>(
            r#"INSERT INTO apps (id, name, description, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&description)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|err| map_unique_violation(err, &data.name))
    }

    /// All records, newest first. An empty list is not an error.
    pub async fn find_all(pool: &SqlitePool) -> DbResult<Vec<Self>> {
        let apps = sqlx::query_as::<_, App>(
            r#"SELECT id, name, description, created_at, updated_at
               FROM apps
               ORDER BY created_at DESC"#,
        )
        .fetch_all(pool)
        .await?;
        Ok(apps)
    }

    /// Absence is `None`, not an error; callers distinguish "absent" from
    /// "failure".
    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> DbResult<Option<Self>> {
        let app = sqlx::query_as::<_, App>(
            r#"SELECT id, name, description, created_at, updated_at
               FROM apps
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(app)
    }

    /// Update with fully resolved values; the caller falls unset fields back
    /// to the record's current values before calling.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        name: &str,
        description: &str,
    ) -> DbResult<Self> {
        let now = Utc::now();
        let updated = sqlx::query_as::<_, App>(
            r#"UPDATE apps
               SET name = $2, description = $3, updated_at = $4
               WHERE id = $1
               RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(now)
        .fetch_optional(pool)
        .await
        .map_err(|err| map_unique_violation(err, name))?;

        updated.ok_or(DbError::NotFound(id))
    }

    /// Permanent removal; the id is never reused.
    pub async fn delete(pool: &SqlitePool, id: Uuid) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM apps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(id));
        }
        Ok(())
    }

    /// Advisory existence check. The unique constraint on `name` remains the
    /// authoritative arbiter under concurrent writers; a race between this
    /// check and the following insert still surfaces as `DuplicateName`.
    pub async fn name_exists(
        pool: &SqlitePool,
        name: &str,
        exclude: Option<Uuid>,
    ) -> DbResult<bool> {
        let count: i64 = match exclude {
            Some(id) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM apps WHERE name = $1 AND id != $2")
                    .bind(name)
                    .bind(id)
                    .fetch_one(pool)
                    .await?
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM apps WHERE name = $1")
                    .bind(name)
                    .fetch_one(pool)
                    .await?
            }
        };
        Ok(count > 0)
    }
}

fn map_unique_violation(err: sqlx::Error, name: &str) -> DbError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DbError::DuplicateName(name.to_string())
        }
        _ => DbError::Database(err),
    }
}
