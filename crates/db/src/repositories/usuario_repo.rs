//! Repository for the `usuarios` table.

use almacen_core::types::DbId;
use sqlx::PgPool;

use crate::models::usuario::{
    CreateUsuario, UpdateUsuario, Usuario, UsuarioCredenciales, UsuarioListado,
};

/// Raw column list for single-row fetches.
const COLUMNS: &str = "id_usuario, nombre_completo, email, password_hash, id_rol, \
    estado, fecha_ultimo_acceso, fecha_creacion";

/// Provides CRUD and credential operations for users.
pub struct UsuarioRepo;

impl UsuarioRepo {
    /// List active users joined with their role. The role join carries no
    /// `activo` filter; each endpoint keeps its historical filter semantics.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<UsuarioListado>, sqlx::Error> {
        sqlx::query_as::<_, UsuarioListado>(
            "SELECT u.id_usuario AS id, \
                    u.nombre_completo, \
                    u.email, \
                    u.id_rol, \
                    r.nombre_rol AS rol_nombre, \
                    CASE WHEN u.estado = 'Activo' THEN 1 ELSE 0 END AS estado, \
                    u.fecha_creacion, \
                    r.permisos AS rol_permisos \
             FROM usuarios u \
             INNER JOIN roles r ON u.id_rol = r.id_rol \
             WHERE u.estado = 'Activo' \
             ORDER BY u.fecha_creacion DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Fetch the credential row for an active user by email, joined with
    /// role data. Returns `None` for unknown emails and inactive users
    /// alike; the login handler answers both identically.
    pub async fn find_active_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UsuarioCredenciales>, sqlx::Error> {
        sqlx::query_as::<_, UsuarioCredenciales>(
            "SELECT u.id_usuario, u.nombre_completo, u.email, u.password_hash, \
                    r.nombre_rol \
             FROM usuarios u \
             INNER JOIN roles r ON u.id_rol = r.id_rol \
             WHERE u.email = $1 AND u.estado = 'Activo'",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Find a user by internal ID regardless of status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE id_usuario = $1");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether an email is already taken, optionally excluding one
    /// user's own row (for updates).
    pub async fn email_exists(
        pool: &PgPool,
        email: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let taken: Option<DbId> = match exclude {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT id_usuario FROM usuarios WHERE email = $1 AND id_usuario != $2 \
                     LIMIT 1",
                )
                .bind(email)
                .bind(id)
                .fetch_optional(pool)
                .await?
            }
            None => {
                sqlx::query_scalar("SELECT id_usuario FROM usuarios WHERE email = $1 LIMIT 1")
                    .bind(email)
                    .fetch_optional(pool)
                    .await?
            }
        };
        Ok(taken.is_some())
    }

    /// Insert a new active user, returning its ID.
    pub async fn create(pool: &PgPool, input: &CreateUsuario) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO usuarios (nombre_completo, email, password_hash, id_rol, estado) \
             VALUES ($1, $2, $3, $4, 'Activo') \
             RETURNING id_usuario",
        )
        .bind(&input.nombre_completo)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.id_rol)
        .fetch_one(pool)
        .await
    }

    /// Partial update: only non-`None` fields in `input` are applied.
    /// Returns `true` if the row exists and was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUsuario,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE usuarios SET \
                nombre_completo = COALESCE($2, nombre_completo), \
                email = COALESCE($3, email), \
                id_rol = COALESCE($4, id_rol), \
                estado = COALESCE($5, estado), \
                password_hash = COALESCE($6, password_hash) \
             WHERE id_usuario = $1",
        )
        .bind(id)
        .bind(&input.nombre_completo)
        .bind(&input.email)
        .bind(input.id_rol)
        .bind(&input.estado)
        .bind(&input.password_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE usuarios SET password_hash = $2 WHERE id_usuario = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Stamp `fecha_ultimo_acceso` with the current time.
    pub async fn touch_last_access(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE usuarios SET fecha_ultimo_acceso = now() WHERE id_usuario = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Soft-delete a user (`estado = 'Inactivo'`). Returns `true` if a row
    /// was deactivated.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE usuarios SET estado = 'Inactivo' WHERE id_usuario = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
