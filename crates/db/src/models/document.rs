//! Document entity model and DTOs.
//!
//! Every project owns exactly one document, created together with the
//! project and pre-filled with the seed content below.

use collabhive_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Initial `text` content for a freshly created project document.
pub const SEED_TEXT: &str =
    "# Project Notes\n\nThis is a collaborative space for the team to share notes and ideas.";

/// Initial `code` content for a freshly created project document.
pub const SEED_CODE: &str = "// Example code";

/// A document row from the `documents` table.
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub text: Option<String>,
    pub code: Option<String>,
    pub updated_at: Timestamp,
}

/// Input body for `PUT /api/documents/{projectId}`. Both fields are
/// required; the update replaces the content wholesale
/// (last-write-wins, no merging).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocument {
    pub text: Option<String>,
    pub code: Option<String>,
}

/// Response shape for `GET /api/documents/{projectId}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: DbId,
    pub text: Option<String>,
    pub code: Option<String>,
    pub updated_at: Timestamp,
}

impl From<Document> for DocumentResponse {
    fn from(d: Document) -> Self {
        DocumentResponse {
            id: d.id,
            text: d.text,
            code: d.code,
            updated_at: d.updated_at,
        }
    }
}

/// Response shape for `PUT /api/documents/{projectId}` -- no `id`,
/// matching the historical contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedDocument {
    pub text: Option<String>,
    pub code: Option<String>,
    pub updated_at: Timestamp,
}

impl From<Document> for UpdatedDocument {
    fn from(d: Document) -> Self {
        UpdatedDocument {
            text: d.text,
            code: d.code,
            updated_at: d.updated_at,
        }
    }
}
