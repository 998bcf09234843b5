//! HTTP handlers, one module per resource.

pub mod auth;
pub mod categorias;
pub mod dashboard;
pub mod incidencias;
pub mod marcas;
pub mod movimientos;
pub mod productos;
pub mod reportes;
pub mod usuarios;
