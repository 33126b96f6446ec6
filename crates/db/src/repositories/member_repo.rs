//! Repository for the `members` table.

use collabhive_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::Member;

const COLUMNS: &str = "id, name, email, role, avatar";

/// Provides CRUD operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// List all members in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members ORDER BY id");
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    /// Insert a new member, returning the created row.
    ///
    /// Fails with a unique violation if the email is already taken;
    /// callers distinguish that case via
    /// [`crate::is_unique_violation`].
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        role: &str,
        avatar: Option<&str>,
    ) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (name, email, role, avatar)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(name)
            .bind(email)
            .bind(role)
            .bind(avatar)
            .fetch_one(pool)
            .await
    }

    /// Find a member by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member by ID. Returns `true` if a row was removed.
    ///
    /// No cascade: tasks and chat messages that referenced the member
    /// keep their now-dangling IDs. That is accepted behavior, not an
    /// oversight.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
