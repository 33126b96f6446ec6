//! Route definitions for the `/api/tasks` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET  /       -> list (all projects)
/// POST /       -> create
/// PUT  /{id}   -> update_status
/// ```
///
/// Tasks have no delete route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route("/{id}", put(task::update_status))
}
