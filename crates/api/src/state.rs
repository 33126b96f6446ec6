use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Handlers depend on the pool capability here rather than opening a
/// driver connection per call; the pool hands out sessions per request
/// and reclaims them when the handler finishes.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: collabhive_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
