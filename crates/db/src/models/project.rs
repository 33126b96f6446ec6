//! Project entity model and DTOs.

use collabhive_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// Serialized with camelCase timestamps (`createdAt`, `updatedAt`).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input body for creating a project. `title` is required (checked in
/// the handler); `description` defaults to an empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Input body for updating a project. Same shape as creation: the
/// update endpoint replaces both fields rather than patching.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Response shape for `PUT /api/projects/{id}`.
///
/// The update response has never carried `createdAt`; clients depend
/// on the exact shape, so it stays that way.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProject {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub updated_at: Timestamp,
}

impl From<Project> for UpdatedProject {
    fn from(p: Project) -> Self {
        UpdatedProject {
            id: p.id,
            title: p.title,
            description: p.description,
            updated_at: p.updated_at,
        }
    }
}
