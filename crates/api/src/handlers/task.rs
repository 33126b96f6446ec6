//! Handlers for the `/api/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use collabhive_core::error::CoreError;
use collabhive_core::tasks::{normalize_assignee, parse_due_date};
use collabhive_core::types::DbId;
use collabhive_db::models::task::{
    CreateTask, CreatedTask, NewTask, TaskResponse, TaskStatus, UpdateTaskStatus,
};
use collabhive_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/tasks -- all tasks across all projects, no filter.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TaskResponse>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /api/tasks
///
/// Any `projectId` in the request body is ignored; the repository pins
/// every task to the bootstrap project.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<CreatedTask>)> {
    let title = input
        .title
        .ok_or_else(|| CoreError::missing_field("title"))?;
    let status = input
        .status
        .ok_or_else(|| CoreError::missing_field("status"))?;
    let priority = input
        .priority
        .ok_or_else(|| CoreError::missing_field("priority"))?;

    let new_task = NewTask {
        title,
        description: input.description.unwrap_or_default(),
        status,
        assignee_id: normalize_assignee(input.assignee.as_ref()),
        due_date: parse_due_date(input.due_date.as_deref())?,
        priority,
    };

    let task = TaskRepo::create(&state.pool, &new_task).await?;
    Ok((StatusCode::CREATED, Json(CreatedTask::from(task))))
}

/// PUT /api/tasks/{id} -- status only; everything else is immutable
/// through this endpoint.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTaskStatus>,
) -> AppResult<Json<TaskStatus>> {
    let status = input
        .status
        .ok_or_else(|| CoreError::missing_field("status"))?;

    let task = TaskRepo::update_status(&state.pool, id, &status)
        .await?
        .ok_or(CoreError::NotFound { entity: "Task" })?;
    Ok(Json(TaskStatus {
        id: task.id,
        status: task.status,
    }))
}
