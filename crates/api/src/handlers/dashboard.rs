//! Handler for the dashboard summary.

use std::time::Duration;

use almacen_db::models::dashboard::DashboardStats;
use almacen_db::repositories::DashboardRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// How long a computed summary stays fresh. Requests inside the window are
/// answered from the cache without touching the database.
pub const STATS_CACHE_TTL: Duration = Duration::from_secs(10);

/// GET /api/dashboard/stats
///
/// Month-scoped aggregate figures for the landing page, served through the
/// single-slot cache injected in [`AppState`]. The endpoint takes no
/// parameters, so one slot is all the cache there is.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    if let Some(cached) = state.stats_cache.get() {
        return Ok(Json(cached));
    }

    let stats = DashboardRepo::fetch_stats(&state.pool).await?;
    state.stats_cache.store(stats.clone());
    Ok(Json(stats))
}
