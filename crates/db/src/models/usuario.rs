//! User entity model and DTOs.

use almacen_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `usuarios` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// List endpoints use [`UsuarioListado`]; login uses [`UsuarioCredenciales`].
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id_usuario: DbId,
    pub nombre_completo: String,
    pub email: String,
    pub password_hash: String,
    pub id_rol: DbId,
    pub estado: String,
    pub fecha_ultimo_acceso: Option<Timestamp>,
    pub fecha_creacion: Timestamp,
}

/// User projection returned by `GET /api/usuarios` (active users joined
/// with their role). `estado` is the 1/0 flag the dashboard expects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UsuarioListado {
    pub id: DbId,
    pub nombre_completo: String,
    pub email: String,
    pub id_rol: DbId,
    pub rol_nombre: String,
    pub estado: i32,
    pub fecha_creacion: Timestamp,
    pub rol_permisos: serde_json::Value,
}

/// Credential row fetched at login: the active user joined with role data.
#[derive(Debug, Clone, FromRow)]
pub struct UsuarioCredenciales {
    pub id_usuario: DbId,
    pub nombre_completo: String,
    pub email: String,
    pub password_hash: String,
    pub nombre_rol: String,
}

/// DTO for creating a new user. The handler hashes the password before
/// building this.
#[derive(Debug)]
pub struct CreateUsuario {
    pub nombre_completo: String,
    pub email: String,
    pub password_hash: String,
    pub id_rol: DbId,
}

/// Structured partial update for `PUT /api/usuarios/{id}`.
///
/// All fields optional; `None` leaves the column untouched. The handler
/// translates an incoming plaintext password into `password_hash`.
#[derive(Debug, Default)]
pub struct UpdateUsuario {
    pub nombre_completo: Option<String>,
    pub email: Option<String>,
    pub id_rol: Option<DbId>,
    pub estado: Option<String>,
    pub password_hash: Option<String>,
}
