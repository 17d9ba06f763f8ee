//! FileCache
//!
//! In-memory index of previously-recorded files for change detection,
//! preloaded from the store before scanning. Read-mostly after preload;
//! holds snapshots only, never authoritative state.

use crate::domain::entities::MediaFile;
use crate::domain::repositories::MediaFileRepository;
use crate::shared::error::RepositoryError;
use std::collections::HashMap;
use tokio::sync::RwLock;

const PRELOAD_CHUNK_SIZE: u64 = 1000;

pub struct FileCache {
    entries: RwLock<HashMap<String, MediaFile>>,
}

impl FileCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Preloads every MediaFile row for a library in chunks of 1000.
    pub async fn preload(
        &self,
        repo: &dyn MediaFileRepository,
        library_id: &str,
    ) -> Result<(), RepositoryError> {
        let mut offset = 0u64;
        loop {
            let chunk = repo
                .find_by_library_chunked(library_id, offset, PRELOAD_CHUNK_SIZE)
                .await?;
            if chunk.is_empty() {
                break;
            }
            let got = chunk.len() as u64;
            let mut entries = self.entries.write().await;
            for file in chunk {
                entries.insert(file.path.clone(), file);
            }
            drop(entries);
            if got < PRELOAD_CHUNK_SIZE {
                break;
            }
            offset += got;
        }
        Ok(())
    }

    /// A cache hit requires a matching path AND an unchanged size.
    pub async fn cache_hit(&self, path: &str, size: u64) -> Option<MediaFile> {
        let entries = self.entries.read().await;
        entries
            .get(path)
            .filter(|cached| cached.size == size)
            .cloned()
    }

    pub async fn record(&self, file: MediaFile) {
        let mut entries = self.entries.write().await;
        entries.insert(file.path.clone(), file);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for FileCache {
    fn default() -> Self {
        Self::new()
    }
}
