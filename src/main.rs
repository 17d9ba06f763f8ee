//! Demo binary
//!
//! Wires a `Manager` over the SQLite store with the bundled walker, hasher,
//! event sink, and no-op hooks/extractor, then runs one scan to completion.
//! Not part of the core's public surface — a CLI, wire protocol, or any
//! other outer-facing concern belongs to whatever embeds this crate.

use libvaultd::application::Manager;
use libvaultd::domain::entities::LibraryType;
use libvaultd::infrastructure::database::{initialize_schema, ConnectionPool, ConnectionPoolConfig};
use libvaultd::infrastructure::filesystem::WalkdirWalker;
use libvaultd::infrastructure::hashing::Sha256Hasher;
use libvaultd::infrastructure::messaging::BroadcastEventSink;
use libvaultd::infrastructure::metadata::NoopMetadataExtractor;
use libvaultd::infrastructure::persistence::sqlite::{
    SqliteLibraryRepository, SqliteMediaFileRepository, SqliteMediaMetadataRepository,
    SqliteScanJobRepository,
};
use libvaultd::interfaces::hooks::NoopHooks;
use libvaultd::shared::config::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    info!(database_url = %config.database_url, "starting libvaultd demo binary");

    let pool_config = ConnectionPoolConfig::new(config.database_url.clone());
    let connection_pool = ConnectionPool::create(pool_config)
        .await
        .map_err(|e| anyhow::anyhow!("failed to create connection pool: {e}"))?;
    let pool = connection_pool.inner().clone();
    initialize_schema(&pool).await?;

    let library_repo = Arc::new(SqliteLibraryRepository::new(pool.clone()));
    let scan_job_repo = Arc::new(SqliteScanJobRepository::new(pool.clone()));
    let file_repo = Arc::new(SqliteMediaFileRepository::new(pool.clone()));
    let metadata_repo = Arc::new(SqliteMediaMetadataRepository::new(pool.clone()));
    let walker = Arc::new(WalkdirWalker::new());
    let hasher = Arc::new(Sha256Hasher::new());
    let extractor = Arc::new(NoopMetadataExtractor::new());
    let event_sink = Arc::new(BroadcastEventSink::default());
    let hooks = Arc::new(NoopHooks);

    let manager = Manager::new(
        library_repo.clone(),
        scan_job_repo,
        file_repo,
        metadata_repo,
        walker,
        hasher,
        extractor,
        event_sink,
        hooks,
    )
    .await;

    let library_id = std::env::var("LIBRARY_ID").unwrap_or_else(|_| "demo".to_string());
    if library_repo.find_by_id(&library_id).await?.is_none() {
        let library_path =
            std::env::var("LIBRARY_PATH").unwrap_or_else(|_| config.assets_root.display().to_string());
        info!(%library_id, %library_path, "seeding demo library");
        sqlx::query("INSERT INTO libraries (id, path, library_type) VALUES (?, ?, ?)")
            .bind(&library_id)
            .bind(&library_path)
            .bind(LibraryType::Video.to_string())
            .execute(&pool)
            .await?;
    }

    let job = manager.start_scan(&library_id).await?;
    info!(job_id = %job.id, "scan started");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    manager.shutdown().await?;
    Ok(())
}
