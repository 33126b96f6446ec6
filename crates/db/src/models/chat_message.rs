//! Chat message entity model and DTOs.
//!
//! Chat messages are the one resource serialized in snake_case
//! (`member_id`, `sender_name`, `sender_avatar`, `created_at`). The
//! inconsistency with the camelCase resources is part of the observable
//! contract and is preserved, not normalized.

use collabhive_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A chat message joined with its sender's display fields.
///
/// `sender_name`/`sender_avatar` are `None` when the sending member
/// has since been deleted (`member_id` is a weak reference).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatMessageWithSender {
    pub id: DbId,
    pub document_id: Option<DbId>,
    pub member_id: Option<DbId>,
    pub message: String,
    pub sender_name: Option<String>,
    pub sender_avatar: Option<String>,
    pub created_at: Timestamp,
}

/// Input body for posting a chat message. Both fields are required and
/// `message` must be non-empty (checked in the handler).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatMessage {
    pub member_id: Option<DbId>,
    pub message: Option<String>,
}
