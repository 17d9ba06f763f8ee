//! Batch Writer
//!
//! Accumulates MediaFile/MediaMetadata records and flushes them via upsert in
//! bounded batches. A flush is a single transaction per repository; on error
//! the batch is retained in full for the next attempt rather than partially
//! cleared.

use crate::domain::entities::{MediaFile, MediaMetadata};
use crate::domain::repositories::{MediaFileRepository, MediaMetadataRepository};
use crate::shared::error::RepositoryError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const BATCH_SIZE: usize = 100;

pub struct BatchWriter {
    file_repo: Arc<dyn MediaFileRepository>,
    metadata_repo: Arc<dyn MediaMetadataRepository>,
    pending_files: Mutex<Vec<MediaFile>>,
    pending_metadata: Mutex<Vec<MediaMetadata>>,
}

impl BatchWriter {
    pub fn new(
        file_repo: Arc<dyn MediaFileRepository>,
        metadata_repo: Arc<dyn MediaMetadataRepository>,
    ) -> Self {
        Self {
            file_repo,
            metadata_repo,
            pending_files: Mutex::new(Vec::new()),
            pending_metadata: Mutex::new(Vec::new()),
        }
    }

    /// Queues a record; returns true once the size threshold has been hit,
    /// signalling the caller should flush eagerly instead of waiting on the
    /// timer.
    pub async fn add_file(&self, file: MediaFile) -> bool {
        let mut pending = self.pending_files.lock().await;
        pending.push(file);
        pending.len() >= BATCH_SIZE
    }

    pub async fn add_metadata(&self, metadata: MediaMetadata) -> bool {
        let mut pending = self.pending_metadata.lock().await;
        pending.push(metadata);
        pending.len() >= BATCH_SIZE
    }

    /// Flushes both queues. On a transaction error the offending queue keeps
    /// its contents so the next flush attempt retries the whole batch.
    pub async fn flush(&self) -> Result<(), RepositoryError> {
        {
            let mut pending = self.pending_files.lock().await;
            if !pending.is_empty() {
                match self.file_repo.upsert_batch(&pending).await {
                    Ok(()) => {
                        debug!(count = pending.len(), "flushed media file batch");
                        pending.clear();
                    }
                    Err(err) => {
                        warn!(error = %err, "media file batch flush failed, retaining for retry");
                        return Err(err);
                    }
                }
            }
        }
        {
            let mut pending = self.pending_metadata.lock().await;
            if !pending.is_empty() {
                match self.metadata_repo.upsert_batch(&pending).await {
                    Ok(()) => {
                        debug!(count = pending.len(), "flushed media metadata batch");
                        pending.clear();
                    }
                    Err(err) => {
                        warn!(error = %err, "media metadata batch flush failed, retaining for retry");
                        return Err(err);
                    }
                }
            }
        }
        Ok(())
    }
}
