//! Repository for the `marcas` table.

use almacen_core::types::DbId;
use sqlx::PgPool;

use crate::models::marca::{Marca, MarcaInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_marca, nombre_marca, contacto, telefono, email, direccion, activo";

/// Provides CRUD operations for brands.
pub struct MarcaRepo;

impl MarcaRepo {
    /// List active brands.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Marca>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marcas WHERE activo = TRUE");
        sqlx::query_as::<_, Marca>(&query).fetch_all(pool).await
    }

    /// Active brand names only, for the product form's provider selector.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT nombre_marca FROM marcas WHERE activo = TRUE")
            .fetch_all(pool)
            .await
    }

    /// Resolve an active brand by its display name (products reference
    /// brands by name on the wire).
    pub async fn find_active_by_name(
        pool: &PgPool,
        nombre: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id_marca FROM marcas WHERE nombre_marca = $1 AND activo = TRUE",
        )
        .bind(nombre)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new brand, returning its ID.
    pub async fn create(pool: &PgPool, input: &MarcaInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO marcas (nombre_marca, contacto, telefono, email, direccion) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id_marca",
        )
        .bind(&input.nombre_marca)
        .bind(&input.contacto)
        .bind(&input.telefono)
        .bind(&input.email)
        .bind(&input.direccion)
        .fetch_one(pool)
        .await
    }

    /// Update an active brand. Returns `true` if a row was updated.
    pub async fn update(pool: &PgPool, id: DbId, input: &MarcaInput) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE marcas \
             SET nombre_marca = $2, contacto = $3, telefono = $4, email = $5, direccion = $6 \
             WHERE id_marca = $1 AND activo = TRUE",
        )
        .bind(id)
        .bind(&input.nombre_marca)
        .bind(&input.contacto)
        .bind(&input.telefono)
        .bind(&input.email)
        .bind(&input.direccion)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a brand (`activo = FALSE`). Returns `true` if a row was
    /// deactivated.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE marcas SET activo = FALSE WHERE id_marca = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
