//! Inventory movement models and DTOs.
//!
//! Movement rows are append-only: created through
//! [`crate::repositories::MovimientoRepo::register`], never updated.

use almacen_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Movement type projection returned by `GET /api/movimientos/tipos`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TipoMovimiento {
    pub id: DbId,
    pub nombre_tipo: String,
    pub descripcion: Option<String>,
    pub afecta_stock: String,
}

/// Movement history row joined with product, type, and responsible user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovimientoListado {
    pub id_movimiento: DbId,
    pub id_producto: DbId,
    pub nombre_producto: String,
    pub codigo_producto: String,
    pub id_tipo_movimiento: DbId,
    pub tipo_movimiento: String,
    pub cantidad: i32,
    pub fecha_movimiento: Date,
    pub id_usuario_responsable: DbId,
    pub responsable: String,
    pub motivo: Option<String>,
    pub lote_afectado: Option<String>,
    pub observaciones: Option<String>,
    pub fecha_registro: Timestamp,
}

/// One (product, quantity) line of a movement batch.
#[derive(Debug, Clone, Deserialize)]
pub struct DetalleMovimiento {
    pub id_producto: DbId,
    pub cantidad: i32,
    pub lote_afectado: Option<String>,
}

/// A validated movement batch ready for [`crate::repositories::MovimientoRepo::register`].
#[derive(Debug)]
pub struct NuevoMovimiento {
    pub id_tipo_movimiento: DbId,
    pub fecha_movimiento: Date,
    pub id_usuario_responsable: DbId,
    pub motivo: Option<String>,
    pub observaciones: Option<String>,
    pub detalles: Vec<DetalleMovimiento>,
}

/// Ranking row for `GET /api/movimientos/top-salidas`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopSalida {
    pub id_producto: DbId,
    pub codigo_producto: String,
    pub nombre_producto: String,
    pub total_salidas: i64,
}
