//! Route definitions for the `/api/documents` resource and its nested
//! chat messages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{document, message};
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// GET /{projectId}            -> get_by_project
/// PUT /{projectId}            -> update_by_project
/// GET /{documentId}/messages  -> message list (oldest first)
/// POST /{documentId}/messages -> post a message
/// ```
///
/// The bare path takes the PROJECT's ID; the messages path takes the
/// DOCUMENT's ID. Both routes share the `{id}` segment name because
/// the router requires it, but the handlers interpret it differently.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(document::get_by_project).put(document::update_by_project),
        )
        .route("/{id}/messages", get(message::list).post(message::create))
}
