//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the endpoint supports it, an update DTO for patches
//!
//! Field names double as the JSON wire contract the dashboard consumes, so
//! they keep the Spanish (and, for products, the historical English-alias)
//! names instead of being normalized.

pub mod categoria;
pub mod dashboard;
pub mod incidencia;
pub mod marca;
pub mod movimiento;
pub mod producto;
pub mod reporte;
pub mod rol;
pub mod usuario;
