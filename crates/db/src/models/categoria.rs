//! Category entity model and DTOs.

use almacen_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category row from the `categorias` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Categoria {
    pub id_categoria: DbId,
    pub nombre_categoria: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}

/// Compact projection used by the product form
/// (`GET /api/productos/categorias`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoriaOpcion {
    pub idcategoria: DbId,
    pub nombre: String,
}

/// DTO for creating or updating a category.
#[derive(Debug, Deserialize)]
pub struct CategoriaInput {
    pub nombre_categoria: String,
    pub descripcion: Option<String>,
}
