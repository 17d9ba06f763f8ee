//! MediaFileRepository trait
//!
//! Transactional upsert keyed by `path`, chunked reads for FileCache preload,
//! predicate-based delete for Cleanup.

use crate::domain::entities::MediaFile;
use crate::shared::error::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait MediaFileRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<MediaFile>, RepositoryError>;

    /// Chunked read filtered by library_id, used to preload the FileCache.
    async fn find_by_library_chunked(
        &self,
        library_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MediaFile>, RepositoryError>;

    async fn find_by_scan_job(&self, scan_job_id: &str) -> Result<Vec<MediaFile>, RepositoryError>;

    /// Upserts a batch in one transaction; conflict key is `path`, updating
    /// {size, content_hash, last_seen} on conflict.
    async fn upsert_batch(&self, files: &[MediaFile]) -> Result<(), RepositoryError>;

    async fn delete_by_library(&self, library_id: &str) -> Result<u64, RepositoryError>;

    async fn delete_by_scan_job(&self, scan_job_id: &str) -> Result<u64, RepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
