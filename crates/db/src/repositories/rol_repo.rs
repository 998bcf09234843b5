//! Repository for the `roles` table. Roles are reference data: read-only
//! from the API's point of view.

use sqlx::PgPool;

use crate::models::rol::RolListado;

/// Provides read operations for roles.
pub struct RolRepo;

impl RolRepo {
    /// List active roles ordered by ID.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<RolListado>, sqlx::Error> {
        sqlx::query_as::<_, RolListado>(
            "SELECT id_rol AS id, nombre_rol AS nombre, descripcion, permisos, activo \
             FROM roles \
             WHERE activo = TRUE \
             ORDER BY id_rol",
        )
        .fetch_all(pool)
        .await
    }
}
