//! Handlers for the `/api/auth` resource.

use almacen_core::error::CoreError;
use almacen_core::types::DbId;
use almacen_db::repositories::UsuarioRepo;
use almacen_db::DbPool;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, is_argon2_hash, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUserInfo,
}

/// Public user profile embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct LoginUserInfo {
    pub id: DbId,
    pub nombre_completo: String,
    pub email: String,
    pub rol_nombre: String,
}

/// Claims echo returned by `GET /api/auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: DbId,
    pub email: String,
    pub rol: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password and issue a session token.
///
/// Every authentication failure -- unknown email, inactive account, or wrong
/// password -- answers with the identical 401 body so callers cannot probe
/// which field was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (email, password) = match (input.email.as_deref(), input.password.as_deref()) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => {
            return Err(AppError::BadRequest(
                "Email y contraseña son requeridos".to_string(),
            ))
        }
    };

    // 1. Fetch the active user joined with role. Absent and inactive users
    //    take the same uniform-rejection path below.
    let user = UsuarioRepo::find_active_by_email(&state.pool, email)
        .await?
        .ok_or_else(invalid_credentials)?;

    // 2. Verify the credential. Hashed storage is the normal path; anything
    //    not in the recognized PHC format is legacy plaintext from the
    //    pre-migration database (intentional migration support, see below).
    let valid = if is_argon2_hash(&user.password_hash) {
        verify_password(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?
    } else if !user.password_hash.is_empty() && user.password_hash == password {
        // Legacy plaintext matched: authorize the login now and upgrade the
        // stored credential in the background. The upgrade is best-effort;
        // it must never block or fail the login response.
        let pool = state.pool.clone();
        let password = password.to_string();
        let user_id = user.id_usuario;
        tokio::spawn(async move {
            migrate_legacy_password(&pool, user_id, &password).await;
        });
        true
    } else {
        false
    };

    if !valid {
        return Err(invalid_credentials());
    }

    // 3. Stamp the last access. Fire-and-forget: login does not wait on it.
    {
        let pool = state.pool.clone();
        let user_id = user.id_usuario;
        tokio::spawn(async move {
            touch_last_access(&pool, user_id).await;
        });
    }

    // 4. Issue the session token.
    let token = generate_token(user.id_usuario, &user.email, &user.nombre_rol, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id_usuario, "Login exitoso");

    Ok(Json(LoginResponse {
        token,
        user: LoginUserInfo {
            id: user.id_usuario,
            nombre_completo: user.nombre_completo,
            email: user.email,
            rol_nombre: user.nombre_rol,
        },
    }))
}

/// GET /api/auth/me
///
/// Echo the claims of the presented bearer token.
pub async fn me(user: AuthUser) -> AppResult<Json<MeResponse>> {
    Ok(Json(MeResponse {
        id: user.id,
        email: user.email,
        rol: user.rol,
    }))
}

// ---------------------------------------------------------------------------
// Post-login side effects
// ---------------------------------------------------------------------------

/// Re-hash a legacy plaintext credential and persist it.
///
/// Separated from the login flow so tests can await it directly instead of
/// racing the spawned task. Failures only log; the user already logged in.
pub async fn migrate_legacy_password(pool: &DbPool, user_id: DbId, password: &str) {
    let hash = match hash_password(password) {
        Ok(h) => h,
        Err(e) => {
            tracing::warn!(user_id, error = %e, "No se pudo generar el hash de migración");
            return;
        }
    };
    match UsuarioRepo::update_password(pool, user_id, &hash).await {
        Ok(true) => tracing::info!(user_id, "Password migrado a Argon2id"),
        Ok(false) => tracing::warn!(user_id, "Migración de password: usuario ya no existe"),
        Err(e) => tracing::warn!(user_id, error = %e, "No se pudo migrar el password"),
    }
}

/// Stamp `fecha_ultimo_acceso`. Failures only log.
pub async fn touch_last_access(pool: &DbPool, user_id: DbId) {
    if let Err(e) = UsuarioRepo::touch_last_access(pool, user_id).await {
        tracing::warn!(user_id, error = %e, "No se pudo actualizar el último acceso");
    }
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Credenciales inválidas".into()))
}
