//! # quickbite-seed
//!
//! Loads a JSON menu document into the `SQLite` database used by `quickbited`.
//!
//! Environment:
//! - `QUICKBITE_SEED_FILE` (default `data/menu.json`)
//! - `QUICKBITE_DATABASE_URL` (default `sqlite:quickbite.db?mode=rwc`)
//! - `RUST_LOG` (default `quickbite_seed=info,quickbite_app=info`)
//!
//! Every run appends: seeding twice stores each item twice.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use quickbite_adapter_storage_json::read_document;
use quickbite_adapter_storage_sqlite_sqlx::{Config, Database, SqliteMenuRepository};
use quickbite_app::services::seed::seed_menu;

const DEFAULT_SEED_FILE: &str = "data/menu.json";
const DEFAULT_DATABASE_URL: &str = "sqlite:quickbite.db?mode=rwc";
const DEFAULT_LOG_FILTER: &str = "quickbite_seed=info,quickbite_app=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let seed_file = std::env::var_os("QUICKBITE_SEED_FILE")
        .map_or_else(|| PathBuf::from(DEFAULT_SEED_FILE), PathBuf::from);
    let database_url = Config::from_env().map_or_else(
        |_| DEFAULT_DATABASE_URL.to_string(),
        |config| config.database_url,
    );

    let db = match (Config { database_url }).build().await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "failed to open database");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&db, &seed_file).await;
    db.close().await;

    match result {
        Ok(inserted) => {
            tracing::info!(inserted, "database seeded");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "seeding failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(db: &Database, seed_file: &Path) -> anyhow::Result<usize> {
    let items = read_document(seed_file)
        .await
        .with_context(|| format!("reading {}", seed_file.display()))?;

    let repo = SqliteMenuRepository::new(db.pool().clone());
    let inserted = seed_menu(&repo, items)
        .await
        .context("inserting menu items")?;
    Ok(inserted)
}
