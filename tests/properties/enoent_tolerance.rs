//! Property: removing an asset whose file is already missing is treated as
//! success and still drops the database row.

use libvaultd::application::CleanupService;
use libvaultd::domain::entities::MediaAsset;
use libvaultd::domain::repositories::{MediaAssetRepository, MediaFileRepository};
use libvaultd::shared::error::RepositoryError;
use std::sync::{Arc, Mutex};

struct MissingFileAssetRepo {
    deleted: Mutex<Vec<i64>>,
}

#[async_trait::async_trait]
impl MediaAssetRepository for MissingFileAssetRepo {
    async fn find_by_media_file(&self, _id: i64) -> Result<Vec<MediaAsset>, RepositoryError> {
        Ok(vec![])
    }
    async fn find_by_library(&self, _lib: &str) -> Result<Vec<MediaAsset>, RepositoryError> {
        Ok(vec![MediaAsset {
            id: Some(7),
            media_file_id: 1,
            relative_path: "already_gone.jpg".into(),
            kind: "cover".into(),
        }])
    }
    async fn find_by_scan_job(&self, _job: &str) -> Result<Vec<MediaAsset>, RepositoryError> {
        Ok(vec![])
    }
    async fn find_orphaned(&self) -> Result<Vec<MediaAsset>, RepositoryError> {
        Ok(vec![])
    }
    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

struct EmptyFileRepo;
#[async_trait::async_trait]
impl MediaFileRepository for EmptyFileRepo {
    async fn find_by_id(
        &self,
        _id: i64,
    ) -> Result<Option<libvaultd::domain::entities::MediaFile>, RepositoryError> {
        Ok(None)
    }
    async fn find_by_library_chunked(
        &self,
        _lib: &str,
        _offset: u64,
        _limit: u64,
    ) -> Result<Vec<libvaultd::domain::entities::MediaFile>, RepositoryError> {
        Ok(vec![])
    }
    async fn find_by_scan_job(
        &self,
        _job: &str,
    ) -> Result<Vec<libvaultd::domain::entities::MediaFile>, RepositoryError> {
        Ok(vec![])
    }
    async fn upsert_batch(
        &self,
        _files: &[libvaultd::domain::entities::MediaFile],
    ) -> Result<(), RepositoryError> {
        Ok(())
    }
    async fn delete_by_library(&self, _lib: &str) -> Result<u64, RepositoryError> {
        Ok(0)
    }
    async fn delete_by_scan_job(&self, _job: &str) -> Result<u64, RepositoryError> {
        Ok(0)
    }
    async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[tokio::test]
async fn missing_asset_file_is_success_and_row_is_dropped() {
    let root = tempfile::tempdir().unwrap();
    let asset_repo = Arc::new(MissingFileAssetRepo {
        deleted: Mutex::new(vec![]),
    });
    let cleanup = CleanupService::new(asset_repo.clone(), Arc::new(EmptyFileRepo), root.path().to_path_buf());

    cleanup.cleanup_library_data("lib-1").await.unwrap();

    assert_eq!(asset_repo.deleted.lock().unwrap().as_slice(), &[7]);
}
