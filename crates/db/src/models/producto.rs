//! Product entity model and DTOs.
//!
//! The list projection keeps the historical English aliases (`sku`, `name`,
//! `price`, `provider`, ...) the dashboard's product table binds to.

use almacen_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full product row from the `productos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Producto {
    pub id_producto: DbId,
    pub codigo_producto: String,
    pub nombre_producto: String,
    pub descripcion: Option<String>,
    pub precio_unitario: f64,
    pub stock_actual: i32,
    pub stock_minimo: i32,
    pub id_categoria: DbId,
    pub id_marca: DbId,
    pub lote: Option<String>,
    pub estado: String,
    pub fecha_creacion: Timestamp,
}

/// Product projection returned by `GET /api/productos`: the row joined with
/// category and brand names plus the derived stock-availability label.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductoListado {
    pub id: DbId,
    pub sku: String,
    pub name: String,
    pub descripcion: Option<String>,
    pub price: f64,
    pub provider: String,
    pub stock: i32,
    pub stockminimo: i32,
    pub date: Timestamp,
    pub idcategoria: DbId,
    pub estado: i32,
    pub categoria_nombre: String,
    pub id_marca: DbId,
    pub lote: Option<String>,
    pub estado_stock: String,
    pub estado_stock_display: String,
}

/// DTO for creating or fully updating a product. The brand arrives as a
/// display name (`provider`) and is resolved to `id_marca` before insert.
#[derive(Debug, Deserialize)]
pub struct ProductoInput {
    pub sku: String,
    pub name: String,
    pub descripcion: Option<String>,
    pub price: f64,
    pub provider: String,
    pub stock: i32,
    pub stockminimo: Option<i32>,
    pub idcategoria: DbId,
}
