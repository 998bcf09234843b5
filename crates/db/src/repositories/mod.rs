//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Repositories hold no state
//! between requests; the pool is the only shared resource.

pub mod categoria_repo;
pub mod dashboard_repo;
pub mod incidencia_repo;
pub mod marca_repo;
pub mod movimiento_repo;
pub mod producto_repo;
pub mod reporte_repo;
pub mod rol_repo;
pub mod usuario_repo;

pub use categoria_repo::CategoriaRepo;
pub use dashboard_repo::DashboardRepo;
pub use incidencia_repo::IncidenciaRepo;
pub use marca_repo::MarcaRepo;
pub use movimiento_repo::MovimientoRepo;
pub use producto_repo::ProductoRepo;
pub use reporte_repo::ReporteRepo;
pub use rol_repo::RolRepo;
pub use usuario_repo::UsuarioRepo;
