//! Scan Manager
//!
//! Process-wide supervisor: a library→job registry enforcing at-most-one-
//! scan-per-library, lifecycle transitions, recovery of jobs orphaned by a
//! prior process crash, and a coordinated shutdown path.
//!
//! Modeled as an explicit singleton constructed at program start with
//! injected collaborators, per the no-global-state design note, rather than
//! module-level mutable state or a generic DI container.

use crate::application::services::library_scanner::{LibraryScanner, LibraryScannerConfig};
use crate::domain::entities::{ScanJob, ScanJobStatus};
use crate::domain::repositories::{
    LibraryRepository, MediaFileRepository, MediaMetadataRepository, ScanJobRepository,
};
use crate::interfaces::filesystem::Walker;
use crate::interfaces::hashing::Hasher;
use crate::interfaces::hooks::ScanHooks;
use crate::interfaces::messaging::{EventSink, ScanEvent};
use crate::interfaces::metadata::MetadataExtractor;
use crate::shared::error::ManagerError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

struct ActiveScan {
    library_id: String,
    scanner: Arc<LibraryScanner>,
}

pub struct Manager {
    library_repo: Arc<dyn LibraryRepository>,
    scan_job_repo: Arc<dyn ScanJobRepository>,
    file_repo: Arc<dyn MediaFileRepository>,
    metadata_repo: Arc<dyn MediaMetadataRepository>,
    walker: Arc<dyn Walker>,
    hasher: Arc<dyn Hasher>,
    extractor: Arc<dyn MetadataExtractor>,
    event_sink: Arc<dyn EventSink>,
    hooks: Arc<dyn ScanHooks>,
    active: RwLock<HashMap<String, ActiveScan>>,
    shutting_down: AtomicBool,
}

#[allow(clippy::too_many_arguments)]
impl Manager {
    /// Constructs the manager and immediately runs orphan recovery, matching
    /// the "invoked during construction" requirement within Rust's
    /// constructor-can't-be-async constraint.
    pub async fn new(
        library_repo: Arc<dyn LibraryRepository>,
        scan_job_repo: Arc<dyn ScanJobRepository>,
        file_repo: Arc<dyn MediaFileRepository>,
        metadata_repo: Arc<dyn MediaMetadataRepository>,
        walker: Arc<dyn Walker>,
        hasher: Arc<dyn Hasher>,
        extractor: Arc<dyn MetadataExtractor>,
        event_sink: Arc<dyn EventSink>,
        hooks: Arc<dyn ScanHooks>,
    ) -> Arc<Self> {
        let manager = Arc::new(Self {
            library_repo,
            scan_job_repo,
            file_repo,
            metadata_repo,
            walker,
            hasher,
            extractor,
            event_sink,
            hooks,
            active: RwLock::new(HashMap::new()),
            shutting_down: AtomicBool::new(false),
        });
        manager.clone().recover_orphaned_jobs().await;
        manager
    }

    /// Any job left running has no live owner; reclassify to paused. Jobs
    /// paused with prior progress auto-resume; jobs with no progress stay
    /// paused until an explicit resume.
    async fn recover_orphaned_jobs(self: Arc<Self>) {
        let running = match self.scan_job_repo.find_by_status(ScanJobStatus::Running).await {
            Ok(jobs) => jobs,
            Err(err) => {
                warn!(%err, "failed to list running jobs during recovery");
                return;
            }
        };
        for mut job in running {
            job.mark_paused();
            if let Err(err) = self.scan_job_repo.update(&job).await {
                warn!(%err, job_id = %job.id, "failed to reclassify orphaned job");
            } else {
                info!(job_id = %job.id, "reclassified orphaned running job as paused");
            }
        }

        let paused = match self.scan_job_repo.find_by_status(ScanJobStatus::Paused).await {
            Ok(jobs) => jobs,
            Err(err) => {
                warn!(%err, "failed to list paused jobs during recovery");
                return;
            }
        };
        for job in paused {
            if job.files_processed > 0 {
                if let Err(err) = self.clone().start_scanner(job).await {
                    warn!(%err, "failed to auto-resume paused job with progress");
                }
            }
        }
    }

    pub async fn start_scan(self: &Arc<Self>, library_id: &str) -> Result<ScanJob, ManagerError> {
        if self.shutting_down.load(Ordering::SeqCst) {
            return Err(ManagerError::ShuttingDown);
        }
        let library = self
            .library_repo
            .find_by_id(library_id)
            .await?
            .ok_or_else(|| ManagerError::LibraryNotFound(library_id.to_string()))?;

        {
            let active = self.active.read().await;
            if active.values().any(|s| s.library_id == library_id) {
                return Err(ManagerError::ScanAlreadyRunning(library_id.to_string()));
            }
        }

        let job_id = Uuid::new_v4().to_string();
        let job = ScanJob::new(job_id.clone(), library.id.clone());
        self.scan_job_repo.insert(&job).await?;

        self.clone().start_scanner(job.clone()).await?;

        self.event_sink
            .publish(ScanEvent::Started {
                job_id,
                library_id: library_id.to_string(),
                source: "system",
            })
            .await;

        Ok(job)
    }

    async fn start_scanner(self: Arc<Self>, job: ScanJob) -> Result<(), ManagerError> {
        let library = self
            .library_repo
            .find_by_id(&job.library_id)
            .await?
            .ok_or_else(|| ManagerError::LibraryNotFound(job.library_id.clone()))?;

        let scanner = Arc::new(LibraryScanner::new(
            job.id.clone(),
            library,
            self.scan_job_repo.clone(),
            self.file_repo.clone(),
            self.metadata_repo.clone(),
            self.walker.clone(),
            self.hasher.clone(),
            self.extractor.clone(),
            self.event_sink.clone(),
            self.hooks.clone(),
            LibraryScannerConfig::default(),
        ));

        {
            let mut active = self.active.write().await;
            active.insert(
                job.id.clone(),
                ActiveScan {
                    library_id: job.library_id.clone(),
                    scanner: scanner.clone(),
                },
            );
        }

        let manager = self.clone();
        let job_id = job.id.clone();
        tokio::spawn(async move {
            let result = scanner.run().await;
            let mut active = manager.active.write().await;
            active.remove(&job_id);
            drop(active);
            if let Err(err) = result {
                warn!(%err, %job_id, "scan run exited with error");
            }
        });

        Ok(())
    }

    pub async fn stop_scan(&self, job_id: &str) -> Result<(), ManagerError> {
        let scanner = {
            let mut active = self.active.write().await;
            active.remove(job_id)
        };
        let Some(scanner) = scanner else {
            return Err(ManagerError::ScanJobNotFound(job_id.to_string()));
        };
        scanner.scanner.cancel();
        Ok(())
    }

    pub async fn resume_scan(self: &Arc<Self>, job_id: &str) -> Result<(), ManagerError> {
        let job = self
            .scan_job_repo
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| ManagerError::ScanJobNotFound(job_id.to_string()))?;
        if !matches!(job.status, ScanJobStatus::Paused | ScanJobStatus::Failed) {
            return Err(ManagerError::NotPaused(job_id.to_string()));
        }

        let mut job = job;
        job.error_message = None;
        job.mark_running();
        self.scan_job_repo.update(&job).await?;

        self.clone().start_scanner(job.clone()).await?;
        self.event_sink
            .publish(ScanEvent::Resumed {
                job_id: job.id.clone(),
                library_id: job.library_id.clone(),
            })
            .await;
        Ok(())
    }

    pub async fn get_scan_status(&self, job_id: &str) -> Result<ScanJob, ManagerError> {
        self.scan_job_repo
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| ManagerError::ScanJobNotFound(job_id.to_string()))
    }

    pub async fn get_all_scans(&self) -> Result<Vec<ScanJob>, ManagerError> {
        Ok(self.scan_job_repo.find_all().await?)
    }

    pub async fn get_active_scan_count(&self) -> usize {
        self.active.read().await.len()
    }

    pub async fn cancel_all_scans(&self) -> usize {
        let snapshot: Vec<Arc<LibraryScanner>> = {
            let active = self.active.read().await;
            active.values().map(|s| s.scanner.clone()).collect()
        };
        for scanner in &snapshot {
            scanner.cancel();
        }
        snapshot.len()
    }

    /// Cancels everything, then blocks until every scanner's termination has
    /// been observed (bounded wait). After this returns, start/resume are
    /// rejected.
    pub async fn shutdown(&self) -> Result<(), ManagerError> {
        self.shutting_down.store(true, Ordering::SeqCst);
        self.cancel_all_scans().await;

        let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(30);
        loop {
            if self.active.read().await.is_empty() {
                break;
            }
            if tokio::time::Instant::now() >= deadline {
                warn!("shutdown deadline reached with scanners still active");
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
        Ok(())
    }
}
