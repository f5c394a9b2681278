use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::catalog::{seed::seed_if_empty, CatalogRepositories};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Open the configured storage backend, applying migrations or creating the data
/// directory as the backend requires.
pub async fn open_repositories(cfg: &AppConfig) -> Result<CatalogRepositories, StartupError> {
    let repos = match cfg.storage.backend {
        StorageBackend::Memory => CatalogRepositories::in_memory(),
        StorageBackend::File => {
            common::env::ensure_data_dir(&cfg.storage.data_dir).await?;
            CatalogRepositories::json_files(&cfg.storage.data_dir)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?
        }
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Storage(format!("migrations: {e}")))?;
            CatalogRepositories::database(db)
        }
    };
    info!(backend = ?cfg.storage.backend, "storage ready");
    Ok(repos)
}

/// Storage, services and optional seed data for `cfg`.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let (categories, products) = open_repositories(cfg).await?.into_services();
    if cfg.storage.seed {
        seed_if_empty(&categories, &products)
            .await
            .map_err(|e| StartupError::Storage(format!("seed: {e}")))?;
    }
    Ok(ServerState::new(categories, products))
}

/// Public entry: build the app from a validated config and run the HTTP server.
/// Logging and `.env` loading are the caller's job.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
