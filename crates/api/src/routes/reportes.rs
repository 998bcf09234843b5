//! Route definitions for the `/reportes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reportes;
use crate::state::AppState;

/// Routes mounted at `/reportes`.
///
/// ```text
/// GET  /            -> recent archive metadata (?limit=)
/// GET  /ultimos     -> filtered archive (?limit=&tipo=&subtipo=)
/// POST /upload      -> archive a generated PDF (base64 body)
/// GET  /{id}/pdf    -> download the stored PDF
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reportes::list))
        .route("/ultimos", get(reportes::ultimos))
        .route("/upload", post(reportes::upload))
        .route("/{id}/pdf", get(reportes::download))
}
