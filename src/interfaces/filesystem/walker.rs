//! Walker interface
//!
//! Produces (path, file_info) pairs rooted at a directory, surfaces
//! per-entry errors without aborting the walk, and respects cancellation.

use crate::domain::value_objects::FileInfo;
use crate::shared::error::FilesystemError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// One entry surfaced by a walk: either a resolved file or a per-entry error
/// that must not abort the traversal.
#[derive(Debug)]
pub enum WalkEvent {
    File { path: PathBuf, info: FileInfo },
    Error { path: PathBuf, message: String },
}

#[async_trait]
pub trait Walker: Send + Sync {
    /// Traverses `root`, sending each file (or per-entry error) to `sink`.
    /// Directories are never sent. Returns `Err` only for a fatal traversal
    /// failure (root unreadable); per-entry errors go through `sink`.
    async fn walk(
        &self,
        root: &Path,
        cancel: CancellationToken,
        sink: tokio::sync::mpsc::Sender<WalkEvent>,
    ) -> Result<(), FilesystemError>;
}

/// Scene-release sample detection, carried over unchanged as ambient
/// walker hygiene layered on top of the media-extension filter.
pub fn is_sample_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    if path_str.contains("/sample/") || path_str.contains("/samples/") {
        return true;
    }
    if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
        let filename_lower = filename.to_lowercase();
        if filename_lower.starts_with("sample")
            || filename_lower.starts_with("!sample")
            || filename_lower.contains("sample-")
            || filename_lower.contains(".sample.")
        {
            return true;
        }
    }
    false
}
