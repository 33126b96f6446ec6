//! Route definitions for the `/api/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create (also creates the seed document)
/// GET  /{id}   -> get_by_id
/// PUT  /{id}   -> update
/// ```
///
/// Projects are never deleted; there is no DELETE route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id).put(project::update))
}
