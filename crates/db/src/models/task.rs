//! Task entity model, DTOs, and response shapes.
//!
//! Tasks have the quirkiest wire contract of the five resources:
//! `assignee` goes out as a stringified member ID (`""` when
//! unassigned), the list response includes `projectId` but the
//! creation response does not, and the status update echoes only
//! `{id, status}`.

use chrono::NaiveDate;
use collabhive_core::types::DbId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub assignee_id: Option<DbId>,
    pub due_date: Option<NaiveDate>,
    pub priority: String,
    pub project_id: Option<DbId>,
}

/// Raw creation body. `assignee` arrives as whatever the client form
/// holds (number, numeric string, empty string) and is normalized via
/// [`collabhive_core::tasks::normalize_assignee`]; `dueDate` likewise.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assignee: Option<Value>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    pub priority: Option<String>,
}

/// Validated and normalized insert values for a new task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: String,
    pub assignee_id: Option<DbId>,
    pub due_date: Option<NaiveDate>,
    pub priority: String,
}

/// Input body for `PUT /api/tasks/{id}`. Only the status is mutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskStatus {
    pub status: Option<String>,
}

/// Response shape for `GET /api/tasks`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
    pub priority: String,
    pub project_id: Option<DbId>,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        TaskResponse {
            id: t.id,
            title: t.title,
            description: t.description,
            status: t.status,
            assignee: assignee_string(t.assignee_id),
            due_date: t.due_date,
            priority: t.priority,
            project_id: t.project_id,
        }
    }
}

/// Response shape for `POST /api/tasks`. Unlike the list response it
/// carries no `projectId`; the contract has always been this way.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTask {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
    pub priority: String,
}

impl From<Task> for CreatedTask {
    fn from(t: Task) -> Self {
        CreatedTask {
            id: t.id,
            title: t.title,
            description: t.description,
            status: t.status,
            assignee: assignee_string(t.assignee_id),
            due_date: t.due_date,
            priority: t.priority,
        }
    }
}

/// Response shape for `PUT /api/tasks/{id}`.
#[derive(Debug, Serialize)]
pub struct TaskStatus {
    pub id: DbId,
    pub status: String,
}

/// The wire encoding of an optional assignee: the member ID as a
/// string, or `""` for "nobody".
fn assignee_string(assignee_id: Option<DbId>) -> String {
    assignee_id.map(|id| id.to_string()).unwrap_or_default()
}
