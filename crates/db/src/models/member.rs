//! Member entity model and DTOs.

use collabhive_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A member row from the `members` table. `email` is globally unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
}

/// Input body for creating a member. `name`, `email`, and `role` are
/// required (checked in the handler); `avatar` is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
}
