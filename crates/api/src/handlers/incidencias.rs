//! Handlers for the `/api/incidencias` resource.

use almacen_core::types::{Date, DbId};
use almacen_db::models::incidencia::{CreateIncidencia, IncidenciaListado, TipoIncidencia};
use almacen_db::repositories::IncidenciaRepo;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/incidencias`. Required fields arrive as
/// `Option` so an incomplete body answers a clean 400.
#[derive(Debug, Deserialize)]
pub struct CrearIncidenciaRequest {
    pub id_producto: Option<DbId>,
    pub id_tipo_incidencia: Option<DbId>,
    pub cantidad_afectada: Option<i32>,
    pub fecha_incidencia: Option<Date>,
    pub id_usuario_registro: Option<DbId>,
    pub descripcion_detallada: Option<String>,
    pub accion_tomada: Option<String>,
}

/// Response for a registered incident.
#[derive(Debug, Serialize)]
pub struct IncidenciaMensaje {
    pub mensaje: String,
}

/// Query params for `GET /api/incidencias`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Max rows to return. Defaults to 50.
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/incidencias/tipos
pub async fn list_tipos(State(state): State<AppState>) -> AppResult<Json<Vec<TipoIncidencia>>> {
    let tipos = IncidenciaRepo::list_tipos(&state.pool).await?;
    Ok(Json(tipos))
}

/// GET /api/incidencias
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<Vec<IncidenciaListado>>> {
    let limit = params.limit.unwrap_or(50);
    let incidencias = IncidenciaRepo::list(&state.pool, limit).await?;
    Ok(Json(incidencias))
}

/// POST /api/incidencias
///
/// Register an incident. Stock is never adjusted here; incidents only
/// document what happened.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CrearIncidenciaRequest>,
) -> AppResult<(StatusCode, Json<IncidenciaMensaje>)> {
    let incidencia = match (
        input.id_producto,
        input.id_tipo_incidencia,
        input.cantidad_afectada,
        input.fecha_incidencia,
        input.id_usuario_registro,
        input.descripcion_detallada,
    ) {
        (Some(prod), Some(tipo), Some(cantidad), Some(fecha), Some(usuario), Some(desc))
            if cantidad > 0 && !desc.is_empty() =>
        {
            CreateIncidencia {
                id_producto: prod,
                id_tipo_incidencia: tipo,
                cantidad_afectada: cantidad,
                fecha_incidencia: fecha,
                id_usuario_registro: usuario,
                descripcion_detallada: desc,
                accion_tomada: input.accion_tomada,
            }
        }
        _ => {
            return Err(AppError::BadRequest(
                "Faltan campos requeridos".to_string(),
            ))
        }
    };

    IncidenciaRepo::create(&state.pool, &incidencia).await?;

    Ok((
        StatusCode::CREATED,
        Json(IncidenciaMensaje {
            mensaje: "Incidencia registrada correctamente".to_string(),
        }),
    ))
}
