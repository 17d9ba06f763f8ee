//! Shared harness for the scenario and property test suites.
//!
//! Builds a `Manager` wired with the real in-process adapters (the same set
//! `main.rs` uses) over an in-memory SQLite database and a `tempfile`
//! directory tree, so the integration suite exercises the real collaborator
//! composition rather than hand-written fakes.

use libvaultd::application::Manager;
use libvaultd::domain::entities::{Library, LibraryType};
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
use libvaultd::interfaces::messaging::{EventSink, ScanEvent};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::broadcast;

pub struct Harness {
    pub manager: Arc<Manager>,
    pub pool: Pool<Sqlite>,
    pub root: TempDir,
    pub events: broadcast::Receiver<ScanEvent>,
}

/// Builds a fresh Manager over an in-memory database and a temp directory
/// tree containing one registered library, and returns a subscriber to the
/// event stream started before any scan so no event is missed.
pub async fn new_harness() -> Harness {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    initialize_schema(&pool).await.expect("init schema");

    let root = tempfile::tempdir().expect("tempdir");

    let library_repo = Arc::new(SqliteLibraryRepository::new(pool.clone()));
    let scan_job_repo = Arc::new(SqliteScanJobRepository::new(pool.clone()));
    let file_repo = Arc::new(SqliteMediaFileRepository::new(pool.clone()));
    let metadata_repo = Arc::new(SqliteMediaMetadataRepository::new(pool.clone()));
    let walker = Arc::new(WalkdirWalker::new());
    let hasher = Arc::new(Sha256Hasher::new());
    let extractor = Arc::new(NoopMetadataExtractor::new());
    let event_sink = Arc::new(BroadcastEventSink::default());
    let events = event_sink.subscribe();
    let hooks = Arc::new(NoopHooks);

    sqlx::query("INSERT INTO libraries (id, path, library_type) VALUES (?, ?, ?)")
        .bind("lib-1")
        .bind(root.path().display().to_string())
        .bind(LibraryType::Video.to_string())
        .execute(&pool)
        .await
        .expect("seed library");

    let manager = Manager::new(
        library_repo,
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

    Harness {
        manager,
        pool,
        root,
        events,
    }
}

/// Registers a second library rooted at its own temp directory, returning
/// its id. Used by scenarios that need more than one library.
pub async fn register_library(pool: &Pool<Sqlite>, id: &str, root: &TempDir) -> Library {
    sqlx::query("INSERT INTO libraries (id, path, library_type) VALUES (?, ?, ?)")
        .bind(id)
        .bind(root.path().display().to_string())
        .bind(LibraryType::Video.to_string())
        .execute(pool)
        .await
        .expect("seed library");
    Library::new(id.to_string(), root.path().display().to_string(), LibraryType::Video).unwrap()
}

pub fn write_file(root: &TempDir, relative: &str, contents: &[u8]) {
    let path = root.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Polls `get_scan_status` until the job reaches a terminal status or the
/// timeout elapses.
pub async fn wait_for_terminal(
    manager: &Manager,
    job_id: &str,
    timeout: std::time::Duration,
) -> libvaultd::domain::entities::ScanJob {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        let job = manager.get_scan_status(job_id).await.expect("job exists");
        if job.status.is_terminal() {
            return job;
        }
        if tokio::time::Instant::now() >= deadline {
            return job;
        }
        tokio::time::sleep(std::time::Duration::from_millis(25)).await;
    }
}
