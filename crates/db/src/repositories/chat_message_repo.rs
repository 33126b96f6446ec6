//! Repository for the `chat_messages` table.

use collabhive_core::types::DbId;
use sqlx::PgPool;

use crate::models::chat_message::ChatMessageWithSender;

/// Provides operations for chat messages. Messages are immutable once
/// posted; there is no update or delete.
pub struct ChatMessageRepo;

impl ChatMessageRepo {
    /// List all messages for a document, oldest first, joined with the
    /// sender's display fields. The join is LEFT so messages from
    /// since-deleted members still appear (with null sender fields).
    pub async fn list_by_document(
        pool: &PgPool,
        document_id: DbId,
    ) -> Result<Vec<ChatMessageWithSender>, sqlx::Error> {
        sqlx::query_as::<_, ChatMessageWithSender>(
            "SELECT cm.id, cm.document_id, cm.member_id, cm.message,
                    m.name AS sender_name, m.avatar AS sender_avatar, cm.created_at
             FROM chat_messages cm
             LEFT JOIN members m ON m.id = cm.member_id
             WHERE cm.document_id = $1
             ORDER BY cm.created_at ASC, cm.id ASC",
        )
        .bind(document_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a message and return it joined with the sender's display
    /// fields, in a single statement.
    pub async fn create(
        pool: &PgPool,
        document_id: DbId,
        member_id: DbId,
        message: &str,
    ) -> Result<ChatMessageWithSender, sqlx::Error> {
        sqlx::query_as::<_, ChatMessageWithSender>(
            "WITH inserted AS (
                 INSERT INTO chat_messages (document_id, member_id, message)
                 VALUES ($1, $2, $3)
                 RETURNING id, document_id, member_id, message, created_at
             )
             SELECT i.id, i.document_id, i.member_id, i.message,
                    m.name AS sender_name, m.avatar AS sender_avatar, i.created_at
             FROM inserted i
             LEFT JOIN members m ON m.id = i.member_id",
        )
        .bind(document_id)
        .bind(member_id)
        .bind(message)
        .fetch_one(pool)
        .await
    }
}
