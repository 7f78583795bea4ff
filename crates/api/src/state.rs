use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone. Handlers borrow connections from the pool per request;
/// nothing session-like is held here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rigflow_db::DbPool,
    pub config: Arc<ServerConfig>,
}
