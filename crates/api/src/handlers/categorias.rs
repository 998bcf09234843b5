//! Handlers for the `/api/categorias` resource.

use almacen_core::types::DbId;
use almacen_db::models::categoria::{Categoria, CategoriaInput};
use almacen_db::repositories::CategoriaRepo;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for category mutations.
#[derive(Debug, Serialize)]
pub struct CategoriaMensaje {
    pub mensaje: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

/// GET /api/categorias
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Categoria>>> {
    let categorias = CategoriaRepo::list_active(&state.pool).await?;
    Ok(Json(categorias))
}

/// POST /api/categorias
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CategoriaInput>,
) -> AppResult<Json<CategoriaMensaje>> {
    let id = CategoriaRepo::create(&state.pool, &input).await?;
    Ok(Json(CategoriaMensaje {
        mensaje: "Categoría creada exitosamente".to_string(),
        id: Some(id),
    }))
}

/// PUT /api/categorias/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CategoriaInput>,
) -> AppResult<Json<CategoriaMensaje>> {
    let updated = CategoriaRepo::update(&state.pool, id, &input).await?;
    if !updated {
        return Err(AppError::NotFound("Categoría no encontrada".to_string()));
    }
    Ok(Json(CategoriaMensaje {
        mensaje: "Categoría actualizada exitosamente".to_string(),
        id: None,
    }))
}

/// DELETE /api/categorias/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CategoriaMensaje>> {
    let deleted = CategoriaRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Categoría no encontrada".to_string()));
    }
    Ok(Json(CategoriaMensaje {
        mensaje: "Categoría eliminada exitosamente".to_string(),
        id: None,
    }))
}
