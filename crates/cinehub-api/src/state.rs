//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use cinehub_core::config::AppConfig;
use cinehub_guard::jwt::JwtDecoder;
use cinehub_guard::orchestrator::GuardOrchestrator;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Access-token decoder
    pub jwt_decoder: Arc<JwtDecoder>,
    /// The guard decision core
    pub orchestrator: Arc<GuardOrchestrator>,
}
