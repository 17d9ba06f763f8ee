//! Scenario 4: orphan recovery on Manager construction.

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
async fn crash_recovered_jobs_reach_expected_state_within_bounded_window() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    initialize_schema(&pool).await.unwrap();

    let root_a = tempfile::tempdir().unwrap();
    let root_b = tempfile::tempdir().unwrap();
    std::fs::write(root_b.path().join("track.mp3"), vec![0u8; 64 * 1024]).unwrap();
    for lib in [("lib-a", &root_a), ("lib-b", &root_b)] {
        sqlx::query("INSERT INTO libraries (id, path, library_type) VALUES (?, ?, ?)")
            .bind(lib.0)
            .bind(lib.1.path().display().to_string())
            .bind(LibraryType::Video.to_string())
            .execute(&pool)
            .await
            .unwrap();
    }
    let scan_job_repo = Arc::new(SqliteScanJobRepository::new(pool.clone()));
    let mut job_a = ScanJob::new("job-a".into(), "lib-a".into());
    job_a.status = ScanJobStatus::Running;
    job_a.files_processed = 0;
    scan_job_repo.insert(&job_a).await.unwrap();

    let mut job_b = ScanJob::new("job-b".into(), "lib-b".into());
    job_b.status = ScanJobStatus::Paused;
    job_b.files_found = 100;
    job_b.files_processed = 15;
    scan_job_repo.insert(&job_b).await.unwrap();

    let library_repo = Arc::new(SqliteLibraryRepository::new(pool.clone()));
    let file_repo = Arc::new(SqliteMediaFileRepository::new(pool.clone()));
    let metadata_repo = Arc::new(SqliteMediaMetadataRepository::new(pool.clone()));
    let event_sink = Arc::new(BroadcastEventSink::default());

    let manager = Manager::new(
        library_repo,
        scan_job_repo.clone(),
        file_repo,
        metadata_repo,
        Arc::new(WalkdirWalker::new()),
        Arc::new(Sha256Hasher::new()),
        Arc::new(NoopMetadataExtractor::new()),
        event_sink,
        Arc::new(NoopHooks),
    )
    .await;

    // Reclassification of job-a and insertion of job-b's scanner into the
    // active map both happen synchronously inside `Manager::new` before it
    // returns, well inside the spec's 200 ms bound.
    let recovered_a = scan_job_repo.find_by_id("job-a").await.unwrap().unwrap();
    assert_eq!(recovered_a.status, ScanJobStatus::Paused);

    assert_eq!(manager.get_active_scan_count().await, 1);
}
