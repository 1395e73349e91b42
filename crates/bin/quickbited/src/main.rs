//! # quickbited — quickbite daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`quickbite.toml` plus environment overrides)
//! - Initialise `tracing` from the configured filter
//! - Construct the configured storage backend (memory, JSON file or `SQLite`)
//! - Construct the menu service and the axum router
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use quickbite_adapter_http_axum::router;
use quickbite_adapter_http_axum::state::AppState;
use quickbite_adapter_storage_json::JsonFileMenuRepository;
use quickbite_adapter_storage_memory::InMemoryMenuRepository;
use quickbite_adapter_storage_sqlite_sqlx::SqliteMenuRepository;
use quickbite_app::ports::MenuRepository;
use quickbite_app::services::menu_service::MenuService;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    match config.storage.backend {
        StorageBackend::Memory => serve(&config, InMemoryMenuRepository::builtin()).await?,
        StorageBackend::Json => {
            let repo = JsonFileMenuRepository::new(&config.storage.json_path);
            tracing::info!(path = %repo.path().display(), "using JSON menu document");
            serve(&config, repo).await?;
        }
        StorageBackend::Sqlite => {
            let db = quickbite_adapter_storage_sqlite_sqlx::Config {
                database_url: config.database_url().to_string(),
            }
            .build()
            .await?;
            let result = serve(&config, SqliteMenuRepository::new(db.pool().clone())).await;
            db.close().await;
            result?;
        }
    }

    Ok(())
}

async fn serve<R>(config: &Config, repo: R) -> Result<(), std::io::Error>
where
    R: MenuRepository + Send + Sync + 'static,
{
    let state = AppState::new(MenuService::new(repo), config.server.environment.as_str());
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        backend = ?config.storage.backend,
        environment = %config.server.environment,
        "quickbited listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("quickbited stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
