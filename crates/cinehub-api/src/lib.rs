//! # cinehub-api
//!
//! HTTP API layer for the CineHub guard: routes, middleware, handlers,
//! and DTOs. The admin panel calls this per navigation event.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
