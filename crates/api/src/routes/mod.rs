pub mod document;
pub mod health;
pub mod member;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                      list, create
/// /projects/{id}                 get, update
///
/// /members                       list, create
/// /members/{id}                  delete
///
/// /tasks                         list, create
/// /tasks/{id}                    update status
///
/// /documents/{projectId}           get, update
/// /documents/{documentId}/messages list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/members", member::router())
        .nest("/tasks", task::router())
        .nest("/documents", document::router())
}
