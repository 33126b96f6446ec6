//! Repository for the `documents` table.

use collabhive_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::Document;

const COLUMNS: &str = "id, project_id, text, code, updated_at";

/// Provides read/update operations for documents.
///
/// Documents are never created through their own endpoint; they come
/// into existence alongside their project (see
/// [`crate::repositories::ProjectRepo::create_with_document`]).
pub struct DocumentRepo;

impl DocumentRepo {
    /// Fetch the document belonging to a project.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE project_id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a project's document content wholesale and bump
    /// `updated_at`. Last write wins; there is no merging.
    ///
    /// Returns `None` if the project has no document.
    pub async fn update_by_project(
        pool: &PgPool,
        project_id: DbId,
        text: &str,
        code: &str,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents
             SET text = $2, code = $3, updated_at = CURRENT_TIMESTAMP
             WHERE project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .bind(text)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a document exists by its own ID (not the
    /// project's). Used before accepting chat messages.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM documents WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
