//! Handlers for the `/api/movimientos` resource.

use almacen_core::types::{Date, DbId};
use almacen_db::models::movimiento::{
    DetalleMovimiento, MovimientoListado, NuevoMovimiento, TipoMovimiento, TopSalida,
};
use almacen_db::repositories::MovimientoRepo;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/movimientos`. Required fields arrive as
/// `Option` so an incomplete body answers a clean 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CrearMovimientoRequest {
    pub id_tipo_movimiento: Option<DbId>,
    pub fecha_movimiento: Option<Date>,
    pub id_usuario_responsable: Option<DbId>,
    pub motivo: Option<String>,
    pub observaciones: Option<String>,
    pub detalles: Option<Vec<DetalleMovimiento>>,
}

/// Response body for a registered movement batch.
#[derive(Debug, Serialize)]
pub struct MovimientoRegistrado {
    pub mensaje: String,
    pub productos_afectados: usize,
}

/// Query params for `GET /api/movimientos`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter on the type's stock effect (`Incrementa` / `Decrementa` /
    /// `No_Afecta`).
    pub tipo: Option<String>,
}

/// Query params for `GET /api/movimientos/top-salidas`.
#[derive(Debug, Deserialize)]
pub struct TopSalidasQuery {
    /// Max rows to return. Defaults to 10, floor 1.
    pub limit: Option<i64>,
    pub from: Option<Date>,
    pub to: Option<Date>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/movimientos
///
/// Register a movement batch atomically. The whole batch commits or none of
/// it does; see [`MovimientoRepo::register`].
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CrearMovimientoRequest>,
) -> AppResult<(StatusCode, Json<MovimientoRegistrado>)> {
    let (id_tipo_movimiento, fecha_movimiento, id_usuario_responsable, detalles) = match (
        input.id_tipo_movimiento,
        input.fecha_movimiento,
        input.id_usuario_responsable,
        input.detalles,
    ) {
        (Some(tipo), Some(fecha), Some(usuario), Some(detalles)) if !detalles.is_empty() => {
            (tipo, fecha, usuario, detalles)
        }
        _ => {
            return Err(AppError::BadRequest(
                "Faltan campos requeridos".to_string(),
            ))
        }
    };

    let movimiento = NuevoMovimiento {
        id_tipo_movimiento,
        fecha_movimiento,
        id_usuario_responsable,
        motivo: input.motivo,
        observaciones: input.observaciones,
        detalles,
    };

    let productos_afectados = MovimientoRepo::register(&state.pool, &movimiento).await?;

    Ok((
        StatusCode::CREATED,
        Json(MovimientoRegistrado {
            mensaje: "Movimiento registrado exitosamente".to_string(),
            productos_afectados,
        }),
    ))
}

/// GET /api/movimientos/tipos
pub async fn list_tipos(State(state): State<AppState>) -> AppResult<Json<Vec<TipoMovimiento>>> {
    let tipos = MovimientoRepo::list_tipos(&state.pool).await?;
    Ok(Json(tipos))
}

/// GET /api/movimientos
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<Vec<MovimientoListado>>> {
    let movimientos = MovimientoRepo::list(&state.pool, params.tipo.as_deref()).await?;
    Ok(Json(movimientos))
}

/// GET /api/movimientos/top-salidas
pub async fn top_salidas(
    State(state): State<AppState>,
    Query(params): Query<TopSalidasQuery>,
) -> AppResult<Json<Vec<TopSalida>>> {
    let limit = params.limit.unwrap_or(10).max(1);
    let range = match (params.from, params.to) {
        (Some(from), Some(to)) => Some((from, to)),
        _ => None,
    };
    let ranking = MovimientoRepo::top_salidas(&state.pool, limit, range).await?;
    Ok(Json(ranking))
}
