//! Repository for the `startups` table.

use explorer_core::types::DbId;
use sqlx::PgPool;

use crate::models::startup::{Startup, StartupInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category";

/// Provides CRUD operations for startups.
pub struct StartupRepo;

impl StartupRepo {
    /// Insert a new startup, returning the row with its generated id.
    pub async fn create(pool: &PgPool, input: &StartupInput) -> Result<Startup, sqlx::Error> {
        let query = format!(
            "INSERT INTO startups (name, category)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Startup>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a startup by id. `None` means no row matched.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Startup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM startups WHERE id = $1");
        sqlx::query_as::<_, Startup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of startups ordered by id.
    ///
    /// `offset` and `limit` are expected to be clamped by the caller.
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Startup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM startups ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Startup>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite name and category of the row identified by `startup.id`.
    ///
    /// Returns `true` if a row matched. A miss is not an error here.
    pub async fn update(pool: &PgPool, startup: &Startup) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE startups SET name = $2, category = $3 WHERE id = $1")
            .bind(startup.id)
            .bind(&startup.name)
            .bind(&startup.category)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a startup by id. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM startups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
