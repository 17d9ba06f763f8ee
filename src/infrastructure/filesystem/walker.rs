//! walkdir-backed Walker implementation
//!
//! `walkdir`'s iterator is synchronous, so the traversal runs on a blocking
//! task and streams entries back through the channel as it goes instead of
//! collecting a `Vec` up front. Per entry: skip directories, apply the
//! media-extension and sample-file filters (both path-only, no syscall),
//! and only then stat the survivors — non-media files never pay for a
//! `metadata()` call.

use crate::domain::value_objects::{FileInfo, MediaKind};
use crate::interfaces::filesystem::{is_sample_file, WalkEvent, Walker};
use crate::shared::error::FilesystemError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;

pub struct WalkdirWalker;

impl WalkdirWalker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WalkdirWalker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Walker for WalkdirWalker {
    async fn walk(
        &self,
        root: &Path,
        cancel: CancellationToken,
        sink: Sender<WalkEvent>,
    ) -> Result<(), FilesystemError> {
        if !root.exists() {
            return Err(FilesystemError::PathNotFound(root.display().to_string()));
        }
        let root = root.to_path_buf();

        tokio::task::spawn_blocking(move || walk_blocking(root, cancel, sink))
            .await
            .map_err(|e| FilesystemError::WalkError(e.to_string()))
    }
}

fn walk_blocking(root: PathBuf, cancel: CancellationToken, sink: Sender<WalkEvent>) {
    for entry in walkdir::WalkDir::new(&root).into_iter() {
        if cancel.is_cancelled() {
            break;
        }
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                if sink
                    .blocking_send(WalkEvent::Error {
                        path,
                        message: err.to_string(),
                    })
                    .is_err()
                {
                    break;
                }
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if is_sample_file(path) || !MediaKind::from_path(path).is_scannable() {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                let _ = sink.blocking_send(WalkEvent::Error {
                    path: entry.path().to_path_buf(),
                    message: err.to_string(),
                });
                continue;
            }
        };

        if !metadata.is_file() {
            continue;
        }

        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);
        let info = FileInfo {
            size: metadata.len(),
            modified,
        };
        if sink
            .blocking_send(WalkEvent::File {
                path: entry.path().to_path_buf(),
                info,
            })
            .is_err()
        {
            break;
        }
    }
}
