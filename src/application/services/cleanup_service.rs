//! Cleanup Service
//!
//! Deterministically tears down on-disk and in-database artifacts of a scan
//! or library, including orphaned-asset garbage collection, enforcing
//! filesystem safety invariants against path escapes.

use crate::domain::entities::MediaAsset;
use crate::domain::repositories::{MediaAssetRepository, MediaFileRepository};
use crate::shared::error::{FilesystemError, RepositoryError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

pub struct CleanupService {
    asset_repo: Arc<dyn MediaAssetRepository>,
    file_repo: Arc<dyn MediaFileRepository>,
    assets_root: PathBuf,
}

impl CleanupService {
    pub fn new(
        asset_repo: Arc<dyn MediaAssetRepository>,
        file_repo: Arc<dyn MediaFileRepository>,
        assets_root: PathBuf,
    ) -> Self {
        Self {
            asset_repo,
            file_repo,
            assets_root,
        }
    }

    pub async fn cleanup_library_data(&self, library_id: &str) -> Result<(), RepositoryError> {
        let assets = self.asset_repo.find_by_library(library_id).await?;
        self.delete_assets(&assets).await;
        self.file_repo.delete_by_library(library_id).await?;
        Ok(())
    }

    pub async fn cleanup_scan_job_data(&self, scan_job_id: &str) -> Result<(), RepositoryError> {
        let assets = self.asset_repo.find_by_scan_job(scan_job_id).await?;
        self.delete_assets(&assets).await;
        self.file_repo.delete_by_scan_job(scan_job_id).await?;
        Ok(())
    }

    /// Returns (records, files): rows deleted and files actually present on
    /// disk among them.
    pub async fn cleanup_orphaned_assets(&self) -> Result<(u64, u64), RepositoryError> {
        let orphans = self.asset_repo.find_orphaned().await?;
        let records = orphans.len() as u64;
        let files = self.delete_assets(&orphans).await;
        Ok((records, files))
    }

    /// Deletes each asset's on-disk file (per-file failures are logged and
    /// skipped), then its row. Returns the count of files actually removed
    /// from disk (ENOENT does not count as "removed" for this tally, but is
    /// not an error).
    async fn delete_assets(&self, assets: &[MediaAsset]) -> u64 {
        let mut removed = 0u64;
        for asset in assets {
            match self.remove_asset_file(&asset.relative_path).await {
                Ok(existed) => {
                    if existed {
                        removed += 1;
                    }
                }
                Err(err) => {
                    warn!(relative_path = %asset.relative_path, %err, "asset file delete failed, continuing");
                    continue;
                }
            }
            if let Some(id) = asset.id {
                if let Err(err) = self.asset_repo.delete(id).await {
                    warn!(%err, "asset row delete failed");
                }
            }
        }
        removed
    }

    /// Returns Ok(true) if a file was actually unlinked, Ok(false) if it was
    /// already gone (ENOENT treated as success), Err on PathTraversal or
    /// another I/O failure.
    async fn remove_asset_file(&self, relative_path: &str) -> Result<bool, FilesystemError> {
        if relative_path.is_empty() {
            return Err(FilesystemError::PathTraversal(
                "empty relative_path".to_string(),
            ));
        }

        let candidate = self.assets_root.join(relative_path);
        let canonical_root = self
            .assets_root
            .canonicalize()
            .map_err(FilesystemError::Io)?;

        let canonical = match candidate.canonicalize() {
            Ok(path) => path,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(false);
            }
            Err(err) => return Err(FilesystemError::Io(err)),
        };

        if !canonical.starts_with(&canonical_root) {
            return Err(FilesystemError::PathTraversal(relative_path.to_string()));
        }

        match tokio::fs::remove_file(&canonical).await {
            Ok(()) => {
                self.prune_empty_parents(&canonical, &canonical_root).await;
                Ok(true)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(FilesystemError::Io(err)),
        }
    }

    async fn prune_empty_parents(&self, file: &Path, root: &Path) {
        let mut dir = file.parent().map(Path::to_path_buf);
        while let Some(current) = dir {
            if current == *root || !current.starts_with(root) {
                break;
            }
            let mut entries = match tokio::fs::read_dir(&current).await {
                Ok(entries) => entries,
                Err(_) => break,
            };
            let is_empty = entries.next_entry().await.ok().flatten().is_none();
            if !is_empty {
                break;
            }
            if tokio::fs::remove_dir(&current).await.is_err() {
                break;
            }
            dir = current.parent().map(Path::to_path_buf);
        }
    }
}
