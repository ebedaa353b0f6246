use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::CoverStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: kinoteka_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cover-image file store rooted at the configured images directory.
    pub covers: CoverStore,
}
