//! Handlers for the `/api/members` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use collabhive_core::error::CoreError;
use collabhive_core::types::DbId;
use collabhive_db::models::member::{CreateMember, Member};
use collabhive_db::repositories::MemberRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/members
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = MemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// POST /api/members
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let name = input.name.ok_or_else(|| CoreError::missing_field("name"))?;
    let email = input
        .email
        .ok_or_else(|| CoreError::missing_field("email"))?;
    let role = input.role.ok_or_else(|| CoreError::missing_field("role"))?;

    let member = MemberRepo::create(&state.pool, &name, &email, &role, input.avatar.as_deref())
        .await
        .map_err(|err| {
            if collabhive_db::is_unique_violation(&err) {
                AppError::Core(CoreError::Conflict("Email already exists".to_string()))
            } else {
                AppError::Database(err)
            }
        })?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// DELETE /api/members/{id}
///
/// No cascade: tasks and chat messages keep dangling references to the
/// deleted member. Accepted behavior.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = MemberRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(
            serde_json::json!({ "message": "Member deleted successfully" }),
        ))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Member" }))
    }
}
