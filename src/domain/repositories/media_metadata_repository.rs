//! MediaMetadataRepository trait
//!
//! Conflict key for upsert is `media_file_id` (one record per extractor kind
//! is enforced by the extractor-kind-qualified query, not by this contract).

use crate::domain::entities::MediaMetadata;
use crate::shared::error::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait MediaMetadataRepository: Send + Sync {
    async fn find_by_media_file(
        &self,
        media_file_id: i64,
    ) -> Result<Vec<MediaMetadata>, RepositoryError>;

    async fn find_by_content_hash(
        &self,
        content_hash: &str,
        extractor_kind: &str,
    ) -> Result<Option<MediaMetadata>, RepositoryError>;

    /// Upserts a batch in one transaction; conflict key is `media_file_id`.
    async fn upsert_batch(&self, records: &[MediaMetadata]) -> Result<(), RepositoryError>;

    async fn delete_by_media_file(&self, media_file_id: i64) -> Result<(), RepositoryError>;
}
