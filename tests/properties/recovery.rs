//! Property: orphan recovery reclassifies a running job as paused and
//! auto-resumes a paused job that already has progress.

use libvaultd::application::Manager;
use libvaultd::domain::entities::{LibraryType, ScanJob, ScanJobStatus};
use libvaultd::infrastructure::database::initialize_schema;
use libvaultd::infrastructure::filesystem::WalkdirWalker;
use libvaultd::infrastructure::hashing::Sha256Hasher;
use libvaultd::infrastructure::messaging::BroadcastEventSink;
use libvaultd::infrastructure::metadata::NoopMetadataExtractor;
use libvaultd::infrastructure::persistence::sqlite::{
    SqliteLibraryRepository, SqliteMediaFileRepository, SqliteMediaMetadataRepository,
    SqliteScanJobRepository,
};
use libvaultd::interfaces::hooks::NoopHooks;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

#[tokio::test]
async fn running_without_progress_is_paused_not_resumed() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    initialize_schema(&pool).await.unwrap();

    let root = tempfile::tempdir().unwrap();
    sqlx::query("INSERT INTO libraries (id, path, library_type) VALUES (?, ?, ?)")
        .bind("lib-1")
        .bind(root.path().display().to_string())
        .bind(LibraryType::Video.to_string())
        .execute(&pool)
        .await
        .unwrap();

    let scan_job_repo = Arc::new(SqliteScanJobRepository::new(pool.clone()));
    let mut stale = ScanJob::new("stale-job".into(), "lib-1".into());
    stale.status = ScanJobStatus::Running;
    stale.files_processed = 0;
    scan_job_repo.insert(&stale).await.unwrap();

    let _manager = Manager::new(
        Arc::new(SqliteLibraryRepository::new(pool.clone())),
        scan_job_repo.clone(),
        Arc::new(SqliteMediaFileRepository::new(pool.clone())),
        Arc::new(SqliteMediaMetadataRepository::new(pool.clone())),
        Arc::new(WalkdirWalker::new()),
        Arc::new(Sha256Hasher::new()),
        Arc::new(NoopMetadataExtractor::new()),
        Arc::new(BroadcastEventSink::default()),
        Arc::new(NoopHooks),
    )
    .await;

    let recovered = scan_job_repo.find_by_id("stale-job").await.unwrap().unwrap();
    assert_eq!(recovered.status, ScanJobStatus::Paused);
}
