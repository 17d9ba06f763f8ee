//! Library Scanner
//!
//! Per-job orchestrator: walks a library, hashes and extracts metadata for
//! each file across an adaptive worker pool, batches writes, estimates
//! progress, and persists the final status.

use crate::application::services::batch_writer::BatchWriter;
use crate::application::services::file_cache::FileCache;
use crate::application::services::metadata_cache::MetadataCache;
use crate::application::services::progress_estimator::ProgressEstimator;
use crate::domain::entities::{Library, MediaFile, MediaMetadata, ScanJob};
use crate::domain::repositories::{
    MediaFileRepository, MediaMetadataRepository, ScanJobRepository,
};
use crate::domain::value_objects::{FileInfo, MediaKind, ScanOutcome, WorkItem};
use crate::interfaces::filesystem::{is_sample_file, WalkEvent, Walker};
use crate::interfaces::hashing::Hasher;
use crate::interfaces::hooks::ScanHooks;
use crate::interfaces::messaging::{EventSink, ScanEvent};
use crate::interfaces::metadata::MetadataExtractor;
use crate::shared::error::ScanError;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

fn worker_bounds() -> (usize, usize) {
    let cores = num_cpus::get();
    let min_workers = std::cmp::max(2, cores / 2);
    let max_workers = std::cmp::min(8, cores);
    (min_workers, std::cmp::max(min_workers, max_workers))
}

pub struct LibraryScannerConfig {
    pub batch_interval: Duration,
    pub progress_interval: Duration,
}

impl Default for LibraryScannerConfig {
    fn default() -> Self {
        Self {
            batch_interval: Duration::from_secs(5),
            progress_interval: Duration::from_secs(1),
        }
    }
}

/// Executes exactly one scan to completion, pause, or failure.
pub struct LibraryScanner {
    job_id: String,
    library: Library,
    scan_job_repo: Arc<dyn ScanJobRepository>,
    file_repo: Arc<dyn MediaFileRepository>,
    walker: Arc<dyn Walker>,
    hasher: Arc<dyn Hasher>,
    extractor: Arc<dyn MetadataExtractor>,
    event_sink: Arc<dyn EventSink>,
    hooks: Arc<dyn ScanHooks>,
    file_cache: FileCache,
    metadata_cache: MetadataCache,
    batch_writer: Arc<BatchWriter>,
    config: LibraryScannerConfig,

    cancel: CancellationToken,
    files_processed: AtomicU64,
    bytes_processed: AtomicU64,
    files_found: AtomicU64,
    bytes_found: AtomicU64,
    errors_count: AtomicU64,
    /// Advisory target pool size; every spawned worker checks this each loop
    /// iteration and parks itself when its index falls outside the target.
    active_workers: AtomicUsize,
    min_workers: usize,
    max_workers: usize,
}

impl LibraryScanner {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        job_id: String,
        library: Library,
        scan_job_repo: Arc<dyn ScanJobRepository>,
        file_repo: Arc<dyn MediaFileRepository>,
        metadata_repo: Arc<dyn MediaMetadataRepository>,
        walker: Arc<dyn Walker>,
        hasher: Arc<dyn Hasher>,
        extractor: Arc<dyn MetadataExtractor>,
        event_sink: Arc<dyn EventSink>,
        hooks: Arc<dyn ScanHooks>,
        config: LibraryScannerConfig,
    ) -> Self {
        let (min_workers, max_workers) = worker_bounds();
        Self {
            job_id,
            library,
            scan_job_repo,
            file_repo: file_repo.clone(),
            walker,
            hasher,
            extractor,
            event_sink,
            hooks,
            file_cache: FileCache::new(),
            metadata_cache: MetadataCache::new(),
            batch_writer: Arc::new(BatchWriter::new(file_repo, metadata_repo)),
            config,
            cancel: CancellationToken::new(),
            files_processed: AtomicU64::new(0),
            bytes_processed: AtomicU64::new(0),
            files_found: AtomicU64::new(0),
            bytes_found: AtomicU64::new(0),
            errors_count: AtomicU64::new(0),
            active_workers: AtomicUsize::new(min_workers),
            min_workers,
            max_workers,
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Cooperative cancellation used by both Pause and Stop.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn files_processed(&self) -> u64 {
        self.files_processed.load(Ordering::SeqCst)
    }

    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed.load(Ordering::SeqCst)
    }

    pub fn errors_count(&self) -> u64 {
        self.errors_count.load(Ordering::SeqCst)
    }

    /// Run protocol: loads the job, preloads the cache, spawns the pipeline,
    /// waits for it to drain, flushes the batch writer, and persists the
    /// final status.
    pub async fn run(self: Arc<Self>) -> Result<ScanJob, ScanError> {
        let mut job = self
            .scan_job_repo
            .find_by_id(&self.job_id)
            .await?
            .ok_or_else(|| ScanError::JobNotFound(self.job_id.clone()))?;

        self.file_cache
            .preload(self.file_repo.as_ref(), &self.library.id)
            .await?;

        job.mark_running();
        self.scan_job_repo.update(&job).await?;
        self.event_sink
            .publish(ScanEvent::Started {
                job_id: self.job_id.clone(),
                library_id: self.library.id.clone(),
                source: "scanner",
            })
            .await;
        self.spawn_hook(job.clone(), HookCall::ScanStarted);
        let job = Arc::new(Mutex::new(job));

        let work_capacity = self.max_workers * 100;
        let result_capacity = self.max_workers * 10;
        let (work_tx, work_rx) = mpsc::channel::<WorkItem>(work_capacity.max(1));
        let (result_tx, mut result_rx) = mpsc::channel::<ScanOutcome>(result_capacity.max(1));
        let work_rx = Arc::new(Mutex::new(work_rx));

        let estimator = Arc::new(ProgressEstimator::new(0, 0));

        let (walk_events_tx, mut walk_events_rx) = mpsc::channel::<WalkEvent>(256);
        let walk_join = {
            let walker = self.walker.clone();
            let root = std::path::PathBuf::from(&self.library.path);
            let cancel = self.cancel.clone();
            tokio::spawn(async move { walker.walk(&root, cancel, walk_events_tx).await })
        };

        let walker_handle = {
            let cancel = self.cancel.clone();
            let work_tx = work_tx.clone();
            let library_id = self.library.id.clone();
            let job_id = self.job_id.clone();
            let event_sink = self.event_sink.clone();
            let scanner = self.clone();
            tokio::spawn(async move {
                while let Some(event) = walk_events_rx.recv().await {
                    if cancel.is_cancelled() {
                        break;
                    }
                    match event {
                        WalkEvent::File { path, info } => {
                            if is_sample_file(&path) || !MediaKind::from_path(&path).is_scannable()
                            {
                                continue;
                            }
                            scanner.files_found.fetch_add(1, Ordering::SeqCst);
                            scanner.bytes_found.fetch_add(info.size, Ordering::SeqCst);
                            event_sink
                                .publish(ScanEvent::MediaFileFound {
                                    job_id: job_id.clone(),
                                    library_id: library_id.clone(),
                                    path: path.to_string_lossy().to_string(),
                                })
                                .await;
                            let item = WorkItem {
                                path,
                                file_info: info,
                                library_id: library_id.clone(),
                            };
                            if work_tx.send(item).await.is_err() {
                                break;
                            }
                        }
                        WalkEvent::Error { path, message } => {
                            scanner.errors_count.fetch_add(1, Ordering::SeqCst);
                            warn!(?path, %message, "walker entry error");
                        }
                    }
                }
                drop(work_tx);
                walk_join
                    .await
                    .unwrap_or_else(|e| Err(crate::shared::error::FilesystemError::WalkError(e.to_string())))
            })
        };

        let mut worker_handles = Vec::new();
        for index in 0..self.max_workers {
            worker_handles.push(self.spawn_worker(index, work_rx.clone(), result_tx.clone()));
        }
        drop(result_tx);

        let result_processor = self.spawn_result_processor(
            &mut result_rx,
            estimator.clone(),
            job.clone(),
            work_tx.clone(),
            work_capacity,
        );
        let batch_ticker = self.spawn_batch_ticker();

        let walk_result = walker_handle.await.map_err(|e| {
            ScanError::FatalTraversal(format!("walker task join error: {e}"))
        })?;
        let fatal_traversal = walk_result.err().map(|err| err.to_string());
        if let Some(reason) = &fatal_traversal {
            warn!(%reason, "fatal traversal error");
        }

        for handle in worker_handles {
            let _ = handle.await;
        }
        result_processor.await.ok();
        batch_ticker.abort();

        self.batch_writer.flush().await?;

        let cancelled = self.cancel.is_cancelled();
        let errors = self.errors_count.load(Ordering::SeqCst);
        let mut guard = job.lock().await;
        guard.files_processed = self.files_processed.load(Ordering::SeqCst);
        guard.bytes_processed = self.bytes_processed.load(Ordering::SeqCst);

        if let Some(reason) = fatal_traversal {
            guard.mark_failed(format!("fatal traversal error: {reason}"));
            self.scan_job_repo.update(&guard).await?;
            self.event_sink
                .publish(ScanEvent::Failed {
                    job_id: self.job_id.clone(),
                    library_id: self.library.id.clone(),
                    reason,
                })
                .await;
            let result = guard.clone();
            drop(guard);
            self.spawn_hook(result.clone(), HookCall::ScanCompleted);
            return Ok(result);
        }

        guard.finish(cancelled, errors);
        self.scan_job_repo.update(&guard).await?;

        if cancelled {
            self.event_sink
                .publish(ScanEvent::Paused {
                    job_id: self.job_id.clone(),
                    library_id: self.library.id.clone(),
                })
                .await;
        } else {
            self.event_sink
                .publish(ScanEvent::Completed {
                    job_id: self.job_id.clone(),
                    library_id: self.library.id.clone(),
                    files_processed: guard.files_processed,
                    errors_count: errors,
                })
                .await;
        }
        let result = guard.clone();
        drop(guard);
        self.spawn_hook(result.clone(), HookCall::ScanCompleted);

        Ok(result)
    }

    /// Dispatches a hook callback on its own task so a slow or panicking
    /// hook can never stall the scan pipeline.
    fn spawn_hook(self: &Arc<Self>, job: ScanJob, call: HookCall) {
        let hooks = self.hooks.clone();
        tokio::spawn(async move {
            match call {
                HookCall::ScanStarted => hooks.on_scan_started(&job).await,
                HookCall::ScanCompleted => hooks.on_scan_completed(&job).await,
            }
        });
    }

    fn spawn_file_scanned_hook(self: &Arc<Self>, job_id: String, file: MediaFile) {
        let hooks = self.hooks.clone();
        tokio::spawn(async move {
            hooks.on_file_scanned(&job_id, &file).await;
        });
    }

    fn spawn_worker(
        self: &Arc<Self>,
        index: usize,
        work_rx: Arc<Mutex<mpsc::Receiver<WorkItem>>>,
        result_tx: mpsc::Sender<ScanOutcome>,
    ) -> tokio::task::JoinHandle<()> {
        let scanner = self.clone();
        tokio::spawn(async move {
            loop {
                if scanner.cancel.is_cancelled() {
                    break;
                }
                if index >= scanner.active_workers.load(Ordering::SeqCst) {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    continue;
                }
                let item = {
                    let mut rx = work_rx.lock().await;
                    rx.recv().await
                };
                let Some(item) = item else {
                    break;
                };
                let outcome = scanner.process_item(item).await;
                if result_tx.send(outcome).await.is_err() {
                    break;
                }
            }
        })
    }

    async fn process_item(&self, item: WorkItem) -> ScanOutcome {
        let size = item.file_info.size;
        if self.file_cache.cache_hit(&item.path.to_string_lossy(), size).await.is_some() {
            self.files_processed.fetch_add(1, Ordering::SeqCst);
            self.bytes_processed.fetch_add(size, Ordering::SeqCst);
            return ScanOutcome::Skip { bytes: size };
        }

        let content_hash = match self.hasher.content_hash(&item.path, size).await {
            Ok(hash) => hash,
            Err(err) => {
                return ScanOutcome::Error {
                    path: item.path,
                    message: err.to_string(),
                }
            }
        };

        let media_file = match MediaFile::new(
            item.path.to_string_lossy().to_string(),
            size,
            content_hash.clone(),
            item.library_id.clone(),
            self.job_id.clone(),
        ) {
            Ok(file) => file,
            Err(err) => {
                return ScanOutcome::Error {
                    path: item.path,
                    message: err.to_string(),
                }
            }
        };

        let kind = MediaKind::from_path(&item.path);
        let metadata = if kind.is_music_like() {
            if let Some(cached) = self.metadata_cache.get(&content_hash).await {
                Some(MediaMetadata::new(0, self.extractor.kind().to_string(), cached))
            } else {
                None
            }
        } else {
            match self.extractor.extract(&item.path, &media_file).await {
                Ok(fields) => {
                    self.metadata_cache.insert(content_hash, fields.clone()).await;
                    Some(MediaMetadata::new(0, self.extractor.kind().to_string(), fields))
                }
                Err(err) => {
                    warn!(path = %item.path.display(), error = %err, "metadata extraction failed");
                    None
                }
            }
        };

        self.file_cache.record(media_file.clone()).await;
        self.files_processed.fetch_add(1, Ordering::SeqCst);
        self.bytes_processed.fetch_add(size, Ordering::SeqCst);

        ScanOutcome::Record {
            media_file,
            metadata,
        }
    }

    fn spawn_result_processor(
        self: &Arc<Self>,
        result_rx: &mut mpsc::Receiver<ScanOutcome>,
        estimator: Arc<ProgressEstimator>,
        job: Arc<Mutex<ScanJob>>,
        work_tx: mpsc::Sender<WorkItem>,
        work_capacity: usize,
    ) -> tokio::task::JoinHandle<()> {
        let scanner = self.clone();
        let mut result_rx = std::mem::replace(result_rx, mpsc::channel(1).1);
        let progress_interval = self.config.progress_interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(progress_interval);
            loop {
                tokio::select! {
                    maybe_outcome = result_rx.recv() => {
                        let Some(outcome) = maybe_outcome else { break };
                        match outcome {
                            ScanOutcome::Record { media_file, metadata } => {
                                scanner.spawn_file_scanned_hook(scanner.job_id.clone(), media_file.clone());
                                let eager = scanner.batch_writer.add_file(media_file).await;
                                if let Some(metadata) = metadata {
                                    let _ = scanner.batch_writer.add_metadata(metadata).await;
                                }
                                if eager {
                                    let _ = scanner.batch_writer.flush().await;
                                }
                            }
                            ScanOutcome::Skip { .. } => {}
                            ScanOutcome::Error { path, message } => {
                                scanner.errors_count.fetch_add(1, Ordering::SeqCst);
                                warn!(?path, %message, "per-file scan error");
                            }
                        }
                    }
                    _ = ticker.tick() => {
                        let files_processed = scanner.files_processed.load(Ordering::SeqCst);
                        let bytes_processed = scanner.bytes_processed.load(Ordering::SeqCst);
                        let files_found = scanner.files_found.load(Ordering::SeqCst);
                        let bytes_found = scanner.bytes_found.load(Ordering::SeqCst);

                        estimator.set_totals(files_found, bytes_found);
                        estimator.update(files_processed, bytes_processed);
                        let est = estimator.estimate();

                        {
                            let mut guard = job.lock().await;
                            guard.files_found = files_found;
                            guard.files_processed = files_processed;
                            guard.bytes_processed = bytes_processed;
                            guard.progress = est.percent.clamp(0.0, 100.0) as u8;
                            if let Err(err) = scanner.scan_job_repo.update(&guard).await {
                                warn!(%err, "periodic progress snapshot persist failed");
                            }
                        }

                        scanner.event_sink.publish(ScanEvent::Progress {
                            job_id: scanner.job_id.clone(),
                            library_id: scanner.library.id.clone(),
                            percent: est.percent,
                            files_processed,
                            files_found,
                        }).await;
                        debug!(percent = est.percent, eta = est.eta_secs, "progress tick");

                        let queue_len = work_capacity.saturating_sub(work_tx.capacity());
                        scanner.adjust_workers(queue_len, work_capacity);
                    }
                }
            }
        })
    }

    fn spawn_batch_ticker(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let scanner = self.clone();
        let interval = self.config.batch_interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(err) = scanner.batch_writer.flush().await {
                    warn!(%err, "periodic batch flush failed");
                }
            }
        })
    }

    /// Adaptive pool heuristic, invoked opportunistically on each progress
    /// tick. Hard bounds: active_workers stays within [min_workers,
    /// max_workers]. All `max_workers` tasks are spawned up front in `run`;
    /// growing/shrinking this counter simply parks or unparks the
    /// highest-indexed workers rather than spawning or killing tasks.
    pub fn adjust_workers(&self, queue_len: usize, queue_capacity: usize) {
        let active = self.active_workers.load(Ordering::SeqCst);
        if queue_len as f64 > 0.75 * queue_capacity as f64 && active < self.max_workers {
            self.active_workers.fetch_add(1, Ordering::SeqCst);
            info!(active = active + 1, "adaptive pool: growing worker count");
        } else if queue_len == 0 && active > self.min_workers {
            self.active_workers.fetch_sub(1, Ordering::SeqCst);
            info!(active = active - 1, "adaptive pool: shrinking worker count");
        }
    }
}

enum HookCall {
    ScanStarted,
    ScanCompleted,
}
