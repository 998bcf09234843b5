//! Handlers for the `/api/usuarios` resource.

use almacen_core::error::CoreError;
use almacen_core::types::DbId;
use almacen_db::models::rol::RolListado;
use almacen_db::models::usuario::{CreateUsuario, UpdateUsuario, UsuarioListado};
use almacen_db::repositories::{RolRepo, UsuarioRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/usuarios`.
#[derive(Debug, Deserialize)]
pub struct CrearUsuarioRequest {
    pub nombre_completo: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub id_rol: Option<DbId>,
}

/// Request body for `PUT /api/usuarios/{id}`. Every field optional; only the
/// given fields are written.
#[derive(Debug, Deserialize)]
pub struct ActualizarUsuarioRequest {
    pub nombre_completo: Option<String>,
    pub email: Option<String>,
    pub id_rol: Option<DbId>,
    pub estado: Option<String>,
    pub password: Option<String>,
}

/// Response for user mutations.
#[derive(Debug, Serialize)]
pub struct UsuarioMensaje {
    pub mensaje: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/usuarios
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UsuarioListado>>> {
    let usuarios = UsuarioRepo::list_active(&state.pool).await?;
    Ok(Json(usuarios))
}

/// GET /api/usuarios/roles
pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<RolListado>>> {
    let roles = RolRepo::list_active(&state.pool).await?;
    Ok(Json(roles))
}

/// POST /api/usuarios
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CrearUsuarioRequest>,
) -> AppResult<(StatusCode, Json<UsuarioMensaje>)> {
    let (nombre_completo, email, password, id_rol) = match (
        input.nombre_completo,
        input.email,
        input.password,
        input.id_rol,
    ) {
        (Some(n), Some(e), Some(p), Some(r)) if !n.is_empty() && !e.is_empty() && !p.is_empty() => {
            (n, e, p, r)
        }
        _ => {
            return Err(AppError::BadRequest(
                "Todos los campos son obligatorios".to_string(),
            ))
        }
    };

    if UsuarioRepo::email_exists(&state.pool, &email, None).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "El email ya está registrado".to_string(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let id = UsuarioRepo::create(
        &state.pool,
        &CreateUsuario {
            nombre_completo,
            email,
            password_hash,
            id_rol,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UsuarioMensaje {
            mensaje: "Usuario creado exitosamente".to_string(),
            id: Some(id),
        }),
    ))
}

/// PUT /api/usuarios/{id}
///
/// Partial update. Email changes re-check uniqueness excluding the user's
/// own row; password changes are re-hashed before persisting.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ActualizarUsuarioRequest>,
) -> AppResult<Json<UsuarioMensaje>> {
    if let Some(email) = input.email.as_deref() {
        if UsuarioRepo::email_exists(&state.pool, email, Some(id)).await? {
            return Err(AppError::Core(CoreError::Conflict(
                "El email ya está registrado por otro usuario".to_string(),
            )));
        }
    }

    if let Some(estado) = input.estado.as_deref() {
        if estado != "Activo" && estado != "Inactivo" {
            return Err(AppError::BadRequest("Estado no válido".to_string()));
        }
    }

    let password_hash = match input.password.as_deref() {
        Some(p) if !p.is_empty() => Some(
            hash_password(p)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
        ),
        _ => None,
    };

    let cambios = UpdateUsuario {
        nombre_completo: input.nombre_completo,
        email: input.email,
        id_rol: input.id_rol,
        estado: input.estado,
        password_hash,
    };

    let updated = UsuarioRepo::update(&state.pool, id, &cambios).await?;
    if !updated {
        return Err(AppError::NotFound("Usuario no encontrado".to_string()));
    }

    Ok(Json(UsuarioMensaje {
        mensaje: "Usuario actualizado exitosamente".to_string(),
        id: None,
    }))
}

/// DELETE /api/usuarios/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UsuarioMensaje>> {
    let deleted = UsuarioRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Usuario no encontrado".to_string()));
    }
    Ok(Json(UsuarioMensaje {
        mensaje: "Usuario eliminado exitosamente".to_string(),
        id: None,
    }))
}
