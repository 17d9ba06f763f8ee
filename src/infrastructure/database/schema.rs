//! Database Schema Management
//!
//! Provides schema initialization for the scan engine's own tables.
//! Idempotent - safe to call multiple times.

use sqlx::{Pool, Sqlite};
use tracing::info;

/// Initializes the five scan-engine tables. `libraries` is populated by the
/// outer system; the engine only ever reads it, but owns the table's shape
/// here so a fresh database is queryable from the first call.
pub async fn initialize_schema(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    info!("initializing scan engine schema");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS libraries (
            id TEXT PRIMARY KEY,
            path TEXT NOT NULL,
            library_type TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS scan_jobs (
            id TEXT PRIMARY KEY,
            library_id TEXT NOT NULL REFERENCES libraries(id),
            status TEXT NOT NULL,
            started_at TEXT,
            completed_at TEXT,
            files_found INTEGER NOT NULL DEFAULT 0,
            files_processed INTEGER NOT NULL DEFAULT 0,
            bytes_processed INTEGER NOT NULL DEFAULT 0,
            progress INTEGER NOT NULL DEFAULT 0,
            error_message TEXT,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_scan_jobs_library ON scan_jobs(library_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_scan_jobs_status ON scan_jobs(status)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS media_files (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            path TEXT NOT NULL UNIQUE,
            size INTEGER NOT NULL,
            content_hash TEXT NOT NULL,
            library_id TEXT NOT NULL REFERENCES libraries(id),
            scan_job_id TEXT NOT NULL,
            last_seen TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_media_files_library ON media_files(library_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_media_files_scan_job ON media_files(scan_job_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS media_metadata (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            media_file_id INTEGER NOT NULL REFERENCES media_files(id) ON DELETE CASCADE,
            extractor_kind TEXT NOT NULL,
            fields TEXT NOT NULL,
            UNIQUE(media_file_id, extractor_kind)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS media_assets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            media_file_id INTEGER NOT NULL REFERENCES media_files(id) ON DELETE CASCADE,
            relative_path TEXT NOT NULL,
            kind TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_media_assets_media_file ON media_assets(media_file_id)")
        .execute(pool)
        .await?;

    info!("scan engine schema initialized");
    Ok(())
}
