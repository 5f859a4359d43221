//! CineHub Guard — access-decision service for the CineHub admin panel.
//!
//! Main entry point that wires the crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::{EnvFilter, fmt};

use cinehub_core::config::AppConfig;
use cinehub_core::error::AppError;
use cinehub_entity::menu::MenuNode;
use cinehub_entity::route::{RawRouteNode, RouteTree};
use cinehub_guard::jwt::JwtDecoder;
use cinehub_guard::orchestrator::GuardOrchestrator;
use cinehub_guard::store::MemoryReturnPathStore;

/// Shape of `routes.toml`: the route tree and the sidebar menu tree.
#[derive(Debug, Deserialize)]
struct RoutesFile {
    /// Raw route nodes, in declared order.
    routes: Vec<RawRouteNode>,
    /// Menu entries, in declared order.
    #[serde(default)]
    menu: Vec<MenuNode>,
}

#[tokio::main]
async fn main() {
    let env = std::env::var("CINEHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Load and validate the route and menu trees from `routes.toml`.
fn load_trees(path: &str) -> Result<(RouteTree, Vec<MenuNode>), AppError> {
    let file = config::Config::builder()
        .add_source(config::File::with_name(path.trim_end_matches(".toml")))
        .build()
        .map_err(|e| AppError::configuration(format!("Failed to read '{path}': {e}")))?;

    let raw: RoutesFile = file
        .try_deserialize()
        .map_err(|e| AppError::configuration(format!("Failed to parse '{path}': {e}")))?;

    let tree = RouteTree::from_raw(raw.routes)?;
    Ok((tree, raw.menu))
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CineHub Guard v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Loading route tree from '{}'...", config.guard.routes_file);
    let (tree, menu) = load_trees(&config.guard.routes_file)?;

    let store = Arc::new(MemoryReturnPathStore::new(Duration::from_secs(
        config.guard.return_path_ttl_seconds,
    )));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let orchestrator = Arc::new(GuardOrchestrator::new(
        &tree,
        menu,
        config.guard.clone(),
        store,
    )?);
    tracing::info!(
        "Guard initialized ({} navigable pages)",
        orchestrator.table().len()
    );

    let app_state = cinehub_api::state::AppState {
        config: Arc::new(config.clone()),
        jwt_decoder,
        orchestrator,
    };

    let app = cinehub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("CineHub Guard listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("CineHub Guard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
