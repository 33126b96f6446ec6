//! Handlers for chat messages, nested under
//! `/api/documents/{documentId}/messages`.
//!
//! Note the path parameter here is the DOCUMENT's own ID, unlike the
//! sibling document endpoints which take the project's ID.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use collabhive_core::error::CoreError;
use collabhive_core::types::DbId;
use collabhive_db::models::chat_message::{ChatMessageWithSender, CreateChatMessage};
use collabhive_db::repositories::{ChatMessageRepo, DocumentRepo, MemberRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/documents/{documentId}/messages -- oldest first.
pub async fn list(
    State(state): State<AppState>,
    Path(document_id): Path<DbId>,
) -> AppResult<Json<Vec<ChatMessageWithSender>>> {
    let messages = ChatMessageRepo::list_by_document(&state.pool, document_id).await?;
    Ok(Json(messages))
}

/// POST /api/documents/{documentId}/messages
///
/// Both the document and the member are validated before the insert,
/// so a rejected message never leaves a row behind.
pub async fn create(
    State(state): State<AppState>,
    Path(document_id): Path<DbId>,
    Json(input): Json<CreateChatMessage>,
) -> AppResult<(StatusCode, Json<ChatMessageWithSender>)> {
    let member_id = input
        .member_id
        .ok_or_else(|| CoreError::missing_field("member_id"))?;
    let message = input
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| CoreError::missing_field("message"))?;

    if !DocumentRepo::exists(&state.pool, document_id).await? {
        return Err(CoreError::NotFound { entity: "Document" }.into());
    }
    if MemberRepo::find_by_id(&state.pool, member_id).await?.is_none() {
        return Err(CoreError::NotFound { entity: "Member" }.into());
    }

    let created = ChatMessageRepo::create(&state.pool, document_id, member_id, &message).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
