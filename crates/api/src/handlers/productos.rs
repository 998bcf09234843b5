//! Handlers for the `/api/productos` resource.

use almacen_core::types::DbId;
use almacen_db::models::categoria::CategoriaOpcion;
use almacen_db::models::producto::{ProductoInput, ProductoListado};
use almacen_db::repositories::{CategoriaRepo, MarcaRepo, ProductoRepo};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for product mutations.
#[derive(Debug, Serialize)]
pub struct ProductoMensaje {
    pub mensaje: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/productos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProductoListado>>> {
    let productos = ProductoRepo::list_active(&state.pool).await?;
    Ok(Json(productos))
}

/// GET /api/productos/categorias
///
/// Compact id/name pairs for the product form's category selector.
pub async fn list_categorias(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoriaOpcion>>> {
    let categorias = CategoriaRepo::list_options(&state.pool).await?;
    Ok(Json(categorias))
}

/// GET /api/productos/proveedores
///
/// Bare array of active brand names, matching what the form binds to.
pub async fn list_proveedores(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let nombres = MarcaRepo::list_names(&state.pool).await?;
    Ok(Json(nombres))
}

/// POST /api/productos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductoInput>,
) -> AppResult<Json<ProductoMensaje>> {
    let id_marca = resolve_marca(&state, &input.provider).await?;
    let id = ProductoRepo::create(&state.pool, &input, id_marca).await?;
    Ok(Json(ProductoMensaje {
        mensaje: "Producto guardado exitosamente".to_string(),
        id: Some(id),
    }))
}

/// PUT /api/productos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProductoInput>,
) -> AppResult<Json<ProductoMensaje>> {
    let id_marca = resolve_marca(&state, &input.provider).await?;
    let updated = ProductoRepo::update(&state.pool, id, &input, id_marca).await?;
    if !updated {
        return Err(AppError::NotFound(
            "Producto no encontrado o inactivo".to_string(),
        ));
    }
    Ok(Json(ProductoMensaje {
        mensaje: "Producto actualizado exitosamente".to_string(),
        id: None,
    }))
}

/// DELETE /api/productos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductoMensaje>> {
    let deleted = ProductoRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Producto no encontrado".to_string()));
    }
    Ok(Json(ProductoMensaje {
        mensaje: "Producto marcado como inactivo exitosamente".to_string(),
        id: None,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the brand display name the form submits into its ID.
async fn resolve_marca(state: &AppState, provider: &str) -> AppResult<DbId> {
    MarcaRepo::find_active_by_name(&state.pool, provider)
        .await?
        .ok_or_else(|| AppError::BadRequest("Marca no encontrada o inactiva".to_string()))
}
