use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StoreBackend};
use dotenvy::dotenv;
use service::store::{InMemoryTrackerStore, SeaOrmTrackerStore, SharedStore};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// config.toml first, environment variables when the file is missing or unreadable
pub fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unusable, falling back to environment");
            AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
        }
    }
}

/// Wire the store selected by `[store] backend`.
pub async fn build_store(cfg: &AppConfig) -> Result<SharedStore, StartupError> {
    match cfg.store.backend {
        StoreBackend::Memory => {
            info!(backend = "memory", "using seeded in-memory store");
            Ok(Arc::new(InMemoryTrackerStore::seeded()))
        }
        StoreBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            info!(backend = "database", "using SeaORM store");
            Ok(Arc::new(SeaOrmTrackerStore::new(db)))
        }
    }
}

/// Router over an already-built store; used by `run` and by tests.
pub fn build_app(store: SharedStore) -> Router {
    routes::build_router(ServerState::new(store), build_cors())
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = load_config()?;
    let store = build_store(&cfg).await?;
    let app = build_app(store);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting fixit tracker server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
