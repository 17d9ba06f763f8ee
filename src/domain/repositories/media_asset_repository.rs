//! MediaAssetRepository trait

use crate::domain::entities::MediaAsset;
use crate::shared::error::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait MediaAssetRepository: Send + Sync {
    async fn find_by_media_file(
        &self,
        media_file_id: i64,
    ) -> Result<Vec<MediaAsset>, RepositoryError>;

    /// All assets, joined with their owning MediaFile's library_id, for the
    /// library/job cleanup variants.
    async fn find_by_library(&self, library_id: &str) -> Result<Vec<MediaAsset>, RepositoryError>;

    async fn find_by_scan_job(&self, scan_job_id: &str) -> Result<Vec<MediaAsset>, RepositoryError>;

    /// Assets whose media_file_id does not match any existing MediaFile.
    async fn find_orphaned(&self) -> Result<Vec<MediaAsset>, RepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
