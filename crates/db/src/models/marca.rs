//! Brand entity model and DTOs.

use almacen_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A brand row from the `marcas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Marca {
    pub id_marca: DbId,
    pub nombre_marca: String,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub activo: bool,
}

/// DTO for creating or updating a brand.
#[derive(Debug, Deserialize)]
pub struct MarcaInput {
    pub nombre_marca: String,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
}
