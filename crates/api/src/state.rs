use std::sync::Arc;

use almacen_core::cache::TtlCell;
use almacen_db::models::dashboard::DashboardStats;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: almacen_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Single-slot cache for the dashboard summary (10-second TTL in
    /// production; tests inject their own cell).
    pub stats_cache: Arc<TtlCell<DashboardStats>>,
}
