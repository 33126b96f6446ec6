//! Handlers for the `/api/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use collabhive_core::error::CoreError;
use collabhive_core::types::DbId;
use collabhive_db::models::project::{CreateProject, Project, UpdateProject, UpdatedProject};
use collabhive_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Project" })?;
    Ok(Json(project))
}

/// POST /api/projects
///
/// Also creates the project's seed document (one transaction, see
/// `ProjectRepo::create_with_document`).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let title = input
        .title
        .ok_or_else(|| CoreError::missing_field("title"))?;
    let description = input.description.unwrap_or_default();

    let project = ProjectRepo::create_with_document(&state.pool, &title, &description).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<UpdatedProject>> {
    let title = input
        .title
        .ok_or_else(|| CoreError::missing_field("title"))?;
    let description = input.description.unwrap_or_default();

    let project = ProjectRepo::update(&state.pool, id, &title, &description)
        .await?
        .ok_or(CoreError::NotFound { entity: "Project" })?;
    Ok(Json(UpdatedProject::from(project)))
}
