//! Handlers for the `/api/documents` resource.
//!
//! Documents are addressed by their project's ID, not their own: each
//! project has exactly one document, created alongside it.

use axum::extract::{Path, State};
use axum::Json;
use collabhive_core::error::CoreError;
use collabhive_core::types::DbId;
use collabhive_db::models::document::{DocumentResponse, UpdateDocument, UpdatedDocument};
use collabhive_db::repositories::DocumentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/documents/{projectId}
pub async fn get_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DocumentResponse>> {
    let document = DocumentRepo::find_by_project(&state.pool, project_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Document" })?;
    Ok(Json(DocumentResponse::from(document)))
}

/// PUT /api/documents/{projectId}
///
/// Wholesale replacement of both fields; last write wins.
pub async fn update_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateDocument>,
) -> AppResult<Json<UpdatedDocument>> {
    let text = input.text.ok_or_else(|| CoreError::missing_field("text"))?;
    let code = input.code.ok_or_else(|| CoreError::missing_field("code"))?;

    let document = DocumentRepo::update_by_project(&state.pool, project_id, &text, &code)
        .await?
        .ok_or(CoreError::NotFound { entity: "Document" })?;
    Ok(Json(UpdatedDocument::from(document)))
}
