//! Shared domain primitives for the almacen backend.
//!
//! - [`types`] -- ID and timestamp aliases used by every crate.
//! - [`error`] -- the domain error taxonomy ([`error::CoreError`]).
//! - [`stock`] -- the stock-effect classification of movement types.
//! - [`cache`] -- single-slot TTL cache backing the dashboard aggregator.

pub mod cache;
pub mod error;
pub mod stock;
pub mod types;
