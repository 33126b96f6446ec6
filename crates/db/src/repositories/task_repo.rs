//! Repository for the `tasks` table.

use collabhive_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{NewTask, Task};

const COLUMNS: &str = "id, title, description, status, assignee_id, due_date, priority, project_id";

/// Every task is attached to the bootstrap project. The client never
/// sends a project ID and the API ignores one if it does; this is a
/// known limitation carried over from the original single-project UI.
const DEFAULT_PROJECT_ID: DbId = 1;

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List all tasks across all projects, in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description, status, assignee_id, due_date, priority, project_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.assignee_id)
            .bind(input.due_date)
            .bind(&input.priority)
            .bind(DEFAULT_PROJECT_ID)
            .fetch_one(pool)
            .await
    }

    /// Update only a task's status. Every other field is immutable
    /// through this path.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("UPDATE tasks SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
