//! Handlers for the `/api/marcas` resource.

use almacen_core::types::DbId;
use almacen_db::models::marca::{Marca, MarcaInput};
use almacen_db::repositories::MarcaRepo;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for brand mutations.
#[derive(Debug, Serialize)]
pub struct MarcaMensaje {
    pub mensaje: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

/// GET /api/marcas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Marca>>> {
    let marcas = MarcaRepo::list_active(&state.pool).await?;
    Ok(Json(marcas))
}

/// POST /api/marcas
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MarcaInput>,
) -> AppResult<Json<MarcaMensaje>> {
    let id = MarcaRepo::create(&state.pool, &input).await?;
    Ok(Json(MarcaMensaje {
        mensaje: "Marca creada exitosamente".to_string(),
        id: Some(id),
    }))
}

/// PUT /api/marcas/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MarcaInput>,
) -> AppResult<Json<MarcaMensaje>> {
    let updated = MarcaRepo::update(&state.pool, id, &input).await?;
    if !updated {
        return Err(AppError::NotFound("Marca no encontrada".to_string()));
    }
    Ok(Json(MarcaMensaje {
        mensaje: "Marca actualizada exitosamente".to_string(),
        id: None,
    }))
}

/// DELETE /api/marcas/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MarcaMensaje>> {
    let deleted = MarcaRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Marca no encontrada".to_string()));
    }
    Ok(Json(MarcaMensaje {
        mensaje: "Marca eliminada exitosamente".to_string(),
        id: None,
    }))
}
